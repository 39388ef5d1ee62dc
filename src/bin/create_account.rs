//! Generate a keypair and fund it through Friendbot

use anyhow::Context;
use std::process::ExitCode;
use stellar_first_flight::utils::logging;
use stellar_first_flight::{FriendbotClient, StellarConfig, create_account, report};

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

    let account = create_account(&friendbot).await?;
    print!("{}", report::render_new_account(&account));
    Ok(())
}
