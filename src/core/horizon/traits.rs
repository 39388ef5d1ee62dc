//! Collaborator traits
//!
//! Scenarios talk to the network only through these traits, so they can be
//! driven by the HTTP adapters in production and by mocks in tests. Every
//! method returns the crate error type; raw HTTP failures are classified by
//! the adapter before they reach a caller.

use super::types::{AccountRecord, FundingReceipt, PaymentReceipt};
use crate::config::SecretSeed;
use crate::core::payment::PaymentRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read access to ledger accounts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountQuery: Send + Sync {
    /// Load an account; `StellarError::NotFound` when it does not exist
    async fn load_account(&self, public_key: &str) -> Result<AccountRecord>;
}

/// Builds, signs and submits payments
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentSubmitter: Send + Sync {
    /// Send `payment` from the account controlled by `source_secret`.
    ///
    /// The transaction is valid for `timeout_seconds`. A rejection by the
    /// network is `StellarError::Submission`.
    async fn build_and_submit(
        &self,
        source_secret: &SecretSeed,
        payment: &PaymentRequest,
        timeout_seconds: u64,
    ) -> Result<PaymentReceipt>;
}

/// Test-network faucet
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FundingService: Send + Sync {
    async fn fund(&self, public_key: &str) -> Result<FundingReceipt>;
}
