//! Snapshot a list of accounts and print aggregate statistics

use anyhow::Context;
use std::process::ExitCode;
use stellar_first_flight::utils::logging;
use stellar_first_flight::{HorizonClient, StellarConfig, monitor_balances, report};

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
    let horizon = HorizonClient::new(&config.network)?;

    let result = monitor_balances(&horizon, &config.scenario.monitored_accounts).await;
    print!("{}", report::render_monitor(&result));
    Ok(())
}
