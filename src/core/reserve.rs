//! Reserved vs. spendable lumens

use super::horizon::AccountRecord;
use crate::utils::error::Result;

/// Reserve held for the account itself and for each subentry, in XLM
pub const BASE_RESERVE_XLM: f64 = 0.5;

/// Native balance split into what is locked and what can be spent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceBreakdown {
    pub total: f64,
    pub reserved: f64,
    pub available: f64,
}

impl BalanceBreakdown {
    /// `reserved = base + subentries * base`; `available` may go negative on
    /// accounts below their minimum balance
    pub fn new(total: f64, subentry_count: u32) -> Self {
        let reserved = BASE_RESERVE_XLM + subentry_count as f64 * BASE_RESERVE_XLM;
        Self {
            total,
            reserved,
            available: total - reserved,
        }
    }

    /// Breakdown of an account's native balance; `None` without a native line
    pub fn for_account(account: &AccountRecord) -> Result<Option<Self>> {
        match account.native_balance() {
            Some(balance) => Ok(Some(Self::new(balance.amount()?, account.subentry_count))),
            None => Ok(None),
        }
    }
}
