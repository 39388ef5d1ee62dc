//! Send the same amount to each configured recipient, in order

use anyhow::Context;
use std::process::ExitCode;
use stellar_first_flight::scenarios::batch_requests;
use stellar_first_flight::utils::logging;
use stellar_first_flight::{HorizonClient, StellarConfig, report, send_payments_batch};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = StellarConfig::load().context("failed to load configuration")?;
    let secret = config.require_secret_key()?;
    let horizon = HorizonClient::new(&config.network)?;
    let scenario = &config.scenario;

    print!("{}", report::banner("AUTOMATED PAYMENT SYSTEM"));
    let payments = batch_requests(&scenario.recipients, &scenario.batch_amount);
    let result =
        send_payments_batch(&horizon, secret, payments, config.network.tx_timeout).await;
    print!("{}", report::render_payment_batch(&result));
    Ok(())
}
