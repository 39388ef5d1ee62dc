//! Payment requests and signed transaction envelopes
//!
//! Transaction construction, signing and XDR encoding are done by the SDK;
//! this module validates inputs and wires them together.

use crate::config::Network;
use crate::core::keys::{Keypair, parse_public_key};
use crate::utils::error::{Result, StellarError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use stellar_base::amount::Amount;
use stellar_base::asset::Asset;
use stellar_base::memo::Memo;
use stellar_base::operations::Operation;
use stellar_base::time_bounds::TimeBounds;
use stellar_base::transaction::{MIN_BASE_FEE, Transaction};
use stellar_base::xdr::XDRSerialize;
use tracing::debug;

/// Longest text memo the network accepts, in bytes
pub const MAX_MEMO_TEXT_BYTES: usize = 28;

/// Amounts are expressed in stroops, 10^-7 XLM
pub const MAX_AMOUNT_DECIMALS: usize = 7;

/// A native-asset payment to one destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub destination: String,
    /// Decimal XLM amount, e.g. `"2"` or `"13.5"`
    pub amount: String,
    pub memo: Option<String>,
}

impl PaymentRequest {
    pub fn new(
        destination: impl Into<String>,
        amount: impl Into<String>,
        memo: Option<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            amount: amount.into(),
            memo: memo.filter(|m| !m.is_empty()),
        }
    }

    /// Check destination, amount and memo before touching the network
    pub fn validate(&self) -> Result<()> {
        parse_public_key(&self.destination)?;
        parse_amount(&self.amount)?;
        if let Some(memo) = &self.memo {
            if memo.len() > MAX_MEMO_TEXT_BYTES {
                return Err(StellarError::InvalidInput(format!(
                    "Memo is {} bytes; text memos are limited to {} bytes",
                    memo.len(),
                    MAX_MEMO_TEXT_BYTES
                )));
            }
        }
        Ok(())
    }

    /// Amount as a number, for reporting
    pub fn amount_value(&self) -> Result<f64> {
        parse_amount(&self.amount)
    }
}

/// Parse a positive decimal XLM amount with at most seven fractional digits
pub fn parse_amount(amount: &str) -> Result<f64> {
    let invalid = |reason: &str| {
        StellarError::InvalidInput(format!("Invalid amount '{}': {}", amount, reason))
    };

    let (whole, fraction) = match amount.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (amount, ""),
    };

    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("expected a decimal number"));
    }
    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("expected a decimal number"));
    }
    if fraction.len() > MAX_AMOUNT_DECIMALS {
        return Err(invalid("more than 7 decimal places"));
    }

    let value: f64 = amount
        .parse()
        .map_err(|_| invalid("expected a decimal number"))?;
    if value <= 0.0 {
        return Err(invalid("must be greater than zero"));
    }
    Ok(value)
}

/// Build, sign and encode a single-payment transaction.
///
/// `sequence` is the sequence number the transaction will carry, i.e. the
/// source account's current sequence plus one. Returns the base64 XDR
/// envelope ready for submission.
pub fn build_signed_envelope(
    source: &Keypair,
    sequence: i64,
    payment: &PaymentRequest,
    timeout_seconds: u64,
    network: Network,
) -> Result<String> {
    payment.validate()?;

    let destination = parse_public_key(&payment.destination)?;
    let amount = Amount::from_str(&payment.amount)?;

    let operation = Operation::new_payment()
        .with_destination(destination)
        .with_amount(amount)?
        .with_asset(Asset::new_native())
        .build()?;

    let memo = match &payment.memo {
        Some(text) => Memo::new_text(text.clone())?,
        None => Memo::new_none(),
    };

    let validity = chrono::Duration::seconds(timeout_seconds as i64);
    let mut tx = Transaction::builder(
        source.sdk_keypair().public_key().clone(),
        sequence,
        MIN_BASE_FEE,
    )
    .with_memo(memo)
    .with_time_bounds(TimeBounds::valid_for(validity))
    .add_operation(operation)
    .into_transaction()?;

    tx.sign(source.sdk_keypair().as_ref(), &network.sdk_network())?;

    debug!(
        sequence,
        passphrase = network.passphrase(),
        "signed payment transaction"
    );

    let envelope = tx.into_envelope().xdr_base64()?;
    Ok(envelope)
}
