//! Send one native payment from the configured source account

use anyhow::Context;
use std::process::ExitCode;
use stellar_first_flight::utils::logging;
use stellar_first_flight::{HorizonClient, PaymentRequest, StellarConfig, report, send_payment};

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

    let payment = PaymentRequest::from(&config.scenario.payment);
    let outcome = send_payment(
        &horizon,
        secret,
        payment.clone(),
        config.network.tx_timeout,
    )
    .await
    .context("payment failed")?;

    print!(
        "{}",
        report::render_payment(&payment, &outcome, horizon.network())
    );
    Ok(())
}
