//! # stellar-first-flight
//!
//! Example programs for a first flight on the Stellar network: create and
//! fund accounts, inspect balances, and send payments, one at a time or in
//! sequential batches.
//!
//! ## Features
//!
//! - **Batch runner**: processes work items strictly in order, isolates
//!   per-item failures and summarizes the results
//! - **Horizon adapter**: account queries and transaction submission over HTTP
//! - **Friendbot adapter**: test-network account funding
//! - **Scenarios**: the six programs' logic, callable as library functions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stellar_first_flight::{HorizonClient, StellarConfig, monitor_balances, report};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StellarConfig::load()?;
//!     let horizon = HorizonClient::new(&config.network)?;
//!
//!     let result = monitor_balances(&horizon, &config.scenario.monitored_accounts).await;
//!     print!("{}", report::render_monitor(&result));
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod report;
pub mod scenarios;
pub mod utils;

// Re-export main types
pub use config::{Network, NetworkConfig, SecretSeed, StellarConfig};
pub use utils::error::{Result, StellarError};

pub use core::batch::{
    BatchItemResult, BatchReport, BatchRunner, BatchSummary, FailureKind, ItemResult,
};
pub use core::horizon::{
    AccountQuery, AccountRecord, Balance, FriendbotClient, FundingReceipt, FundingService,
    HorizonClient, PaymentReceipt, PaymentSubmitter,
};
pub use core::keys::Keypair;
pub use core::payment::PaymentRequest;
pub use core::reserve::BalanceBreakdown;

pub use scenarios::{
    check_balance, create_account, create_accounts_batch, monitor_balances, send_payment,
    send_payments_batch,
};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Short git commit hash captured at build time
pub const GIT_HASH: &str = env!("GIT_HASH");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp, seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: GIT_HASH,
            rust_version: env!("RUST_VERSION"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
