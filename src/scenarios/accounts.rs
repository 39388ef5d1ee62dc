//! Account creation scenarios

use crate::config::SecretSeed;
use crate::core::batch::{BatchReport, BatchRunner, ItemResult};
use crate::core::horizon::{FRIENDBOT_FUNDING_XLM, FundingReceipt, FundingService};
use crate::core::keys::Keypair;
use crate::utils::error::Result;
use tracing::{info, warn};

/// A freshly generated keypair and the outcome of funding it
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub public_key: String,
    pub secret_seed: SecretSeed,
    /// Funding failures are reported but do not invalidate the keys
    pub funding: ItemResult<FundingReceipt>,
}

/// A funded account from the mass creation batch
#[derive(Debug, Clone)]
pub struct CreatedAccount {
    /// 1-based position in the batch
    pub number: usize,
    pub public_key: String,
    pub secret_seed: SecretSeed,
    /// Lumens credited by the faucet
    pub funded_amount: f64,
    pub hash: Option<String>,
}

/// Generate one keypair and ask the faucet to fund it
pub async fn create_account(funder: &dyn FundingService) -> Result<NewAccount> {
    let keypair = Keypair::random()?;
    let public_key = keypair.public_key();
    info!(account = %public_key, "generated keypair");

    let funding = ItemResult::from_result(funder.fund(&public_key).await);
    if let ItemResult::Failure { message, .. } = &funding {
        warn!(account = %public_key, "funding failed: {}", message);
    }

    Ok(NewAccount {
        public_key,
        secret_seed: keypair.secret_seed(),
        funding,
    })
}

/// Create and fund `count` accounts, one after another
pub async fn create_accounts_batch(
    funder: &dyn FundingService,
    count: usize,
) -> BatchReport<usize, CreatedAccount> {
    let runner = BatchRunner::new("create-accounts");

    runner
        .execute_with_summary(
            1..=count,
            |number| create_funded_account(funder, number),
            |account: &CreatedAccount| account.funded_amount,
        )
        .await
}

async fn create_funded_account(
    funder: &dyn FundingService,
    number: usize,
) -> Result<CreatedAccount> {
    let keypair = Keypair::random()?;
    let public_key = keypair.public_key();
    let receipt = funder.fund(&public_key).await?;

    Ok(CreatedAccount {
        number,
        public_key,
        secret_seed: keypair.secret_seed(),
        funded_amount: FRIENDBOT_FUNDING_XLM,
        hash: receipt.hash,
    })
}
