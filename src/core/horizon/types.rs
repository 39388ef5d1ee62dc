//! Horizon and Friendbot response types

use crate::utils::error::{Result, StellarError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Asset type Horizon reports for lumens
pub const NATIVE_ASSET_TYPE: &str = "native";

/// One balance line of an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// `native`, `credit_alphanum4`, `credit_alphanum12` or `liquidity_pool_shares`
    pub asset_type: String,
    /// Decimal string with seven fractional digits
    pub balance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_issuer: Option<String>,
}

impl Balance {
    pub fn native(balance: impl Into<String>) -> Self {
        Self {
            asset_type: NATIVE_ASSET_TYPE.to_string(),
            balance: balance.into(),
            asset_code: None,
            asset_issuer: None,
        }
    }

    pub fn credit(
        code: impl Into<String>,
        issuer: impl Into<String>,
        balance: impl Into<String>,
    ) -> Self {
        let code = code.into();
        let asset_type = if code.len() <= 4 {
            "credit_alphanum4"
        } else {
            "credit_alphanum12"
        };
        Self {
            asset_type: asset_type.to_string(),
            balance: balance.into(),
            asset_code: Some(code),
            asset_issuer: Some(issuer.into()),
        }
    }

    pub fn is_native(&self) -> bool {
        self.asset_type == NATIVE_ASSET_TYPE
    }

    /// Balance as a number; unparseable values are an error, not zero
    pub fn amount(&self) -> Result<f64> {
        let parsed = self.balance.trim().parse::<f64>().ok();
        parsed.filter(|v| v.is_finite()).ok_or_else(|| {
            StellarError::Parsing(format!(
                "Balance '{}' for asset {} is not a number",
                self.balance,
                self.asset_code.as_deref().unwrap_or(&self.asset_type)
            ))
        })
    }
}

/// Account as Horizon serves it on `/accounts/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct HorizonAccount {
    pub account_id: String,
    /// Decimal string; may exceed the f64 integer range so it is parsed separately
    pub sequence: Value,
    #[serde(default)]
    pub subentry_count: u32,
    #[serde(default)]
    pub balances: Vec<Balance>,
}

/// Account state used by the scenarios
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountRecord {
    pub account_id: String,
    pub sequence: i64,
    pub subentry_count: u32,
    pub balances: Vec<Balance>,
}

impl TryFrom<HorizonAccount> for AccountRecord {
    type Error = StellarError;

    fn try_from(account: HorizonAccount) -> Result<Self> {
        let sequence = match &account.sequence {
            Value::String(s) => s.parse::<i64>().ok(),
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
        .ok_or_else(|| {
            StellarError::Parsing(format!(
                "Invalid sequence number for {}: {}",
                account.account_id, account.sequence
            ))
        })?;

        Ok(Self {
            account_id: account.account_id,
            sequence,
            subentry_count: account.subentry_count,
            balances: account.balances,
        })
    }
}

impl AccountRecord {
    /// The lumen balance line, if present
    pub fn native_balance(&self) -> Option<&Balance> {
        self.balances.iter().find(|b| b.is_native())
    }

    /// Number of non-native balance lines
    pub fn trustline_count(&self) -> usize {
        self.balances.iter().filter(|b| !b.is_native()).count()
    }
}

/// Horizon's answer to an accepted transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub hash: String,
    #[serde(default)]
    pub ledger: Option<u32>,
    /// Source account's native balance before the payment
    #[serde(skip)]
    pub source_balance: Option<String>,
}

/// Friendbot's answer to a funding request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingReceipt {
    #[serde(default)]
    pub successful: bool,
    #[serde(default)]
    pub hash: Option<String>,
}

/// RFC 7807 problem document returned by Horizon and Friendbot on errors
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Problem {
    #[serde(rename = "type", default)]
    pub problem_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub extras: Option<Value>,
}

impl Problem {
    /// Parse a problem body; non-JSON bodies yield an empty problem
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// `detail`, else `title`
    pub fn message(&self) -> Option<&str> {
        self.detail.as_deref().or(self.title.as_deref())
    }

    /// `extras.result_codes` of a failed transaction
    pub fn result_codes(&self) -> Option<&Value> {
        self.extras.as_ref()?.get("result_codes")
    }

    pub fn is_transaction_failure(&self) -> bool {
        self.problem_type
            .as_deref()
            .is_some_and(|t| t.ends_with("transaction_failed"))
            || self.result_codes().is_some()
    }
}
