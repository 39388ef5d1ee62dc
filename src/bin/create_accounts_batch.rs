//! Create and fund several accounts, one after another

use anyhow::Context;
use std::process::ExitCode;
use stellar_first_flight::utils::logging;
use stellar_first_flight::{FriendbotClient, StellarConfig, create_accounts_batch, report};

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
    let friendbot = FriendbotClient::new(&config.network)?;

    print!("{}", report::banner("MASS STELLAR ACCOUNT CREATION"));
    let result = create_accounts_batch(&friendbot, config.scenario.batch_account_count).await;
    print!("{}", report::render_created_accounts(&result));
    Ok(())
}
