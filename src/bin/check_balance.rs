//! Show every balance of one account, with its reserve breakdown

use anyhow::Context;
use std::process::ExitCode;
use stellar_first_flight::utils::{logging, truncate_key};
use stellar_first_flight::{HorizonClient, StellarConfig, check_balance, report};

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
    let public_key = &config.scenario.balance_account;

    println!("Querying account: {}\n", truncate_key(public_key, 8));

    match check_balance(&horizon, public_key).await {
        Ok(sheet) => {
            print!("{}", report::render_balance_sheet(&sheet));
            Ok(())
        }
        Err(e) => {
            if e.is_not_found() {
                print!("{}", report::render_not_found_hints(public_key));
            }
            Err(e.into())
        }
    }
}
