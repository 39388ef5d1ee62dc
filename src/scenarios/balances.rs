//! Balance inspection scenarios

use crate::core::batch::{BatchReport, BatchRunner};
use crate::core::horizon::{AccountQuery, AccountRecord};
use crate::core::reserve::BalanceBreakdown;
use crate::utils::error::Result;
use serde::Serialize;
use tracing::info;

/// Full balance listing of one account
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceSheet {
    pub account: AccountRecord,
    /// Reserve breakdown of the lumen balance, if the account holds one
    pub native: Option<BalanceBreakdown>,
}

/// Point-in-time view of a monitored account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSnapshot {
    pub public_key: String,
    /// Native balance in XLM
    pub balance: f64,
    pub trustlines: usize,
    pub sequence: i64,
}

impl AccountSnapshot {
    pub fn from_record(record: &AccountRecord) -> Result<Self> {
        let balance = match record.native_balance() {
            Some(native) => native.amount()?,
            None => 0.0,
        };

        Ok(Self {
            public_key: record.account_id.clone(),
            balance,
            trustlines: record.trustline_count(),
            sequence: record.sequence,
        })
    }
}

/// Monitoring batch plus the trustline total across reachable accounts
#[derive(Debug, Clone)]
pub struct MonitorReport {
    pub batch: BatchReport<String, AccountSnapshot>,
    pub total_trustlines: usize,
}

/// Load one account and compute its reserve breakdown
pub async fn check_balance(query: &dyn AccountQuery, public_key: &str) -> Result<BalanceSheet> {
    let account = query.load_account(public_key).await?;
    let native = BalanceBreakdown::for_account(&account)?;
    info!(
        account = %account.account_id,
        lines = account.balances.len(),
        "loaded balances"
    );

    Ok(BalanceSheet { account, native })
}

/// Snapshot each account in turn; missing accounts are reported, not fatal
pub async fn monitor_balances(query: &dyn AccountQuery, public_keys: &[String]) -> MonitorReport {
    let runner = BatchRunner::new("monitor-balances");

    let batch = runner
        .execute_with_summary(
            public_keys.iter().cloned(),
            |key| snapshot(query, key),
            |s: &AccountSnapshot| round_to_cents(s.balance),
        )
        .await;

    let total_trustlines = batch
        .results
        .iter()
        .filter_map(|r| r.result.success())
        .map(|s| s.trustlines)
        .sum();

    MonitorReport {
        batch,
        total_trustlines,
    }
}

/// Each account contributes its balance as displayed, to two decimals
fn round_to_cents(balance: f64) -> f64 {
    (balance * 100.0).round() / 100.0
}

async fn snapshot(query: &dyn AccountQuery, public_key: String) -> Result<AccountSnapshot> {
    let record = query.load_account(&public_key).await?;
    AccountSnapshot::from_record(&record)
}
