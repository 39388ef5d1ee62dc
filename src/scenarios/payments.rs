//! Payment scenarios

use crate::config::{PaymentScenario, Recipient, SecretSeed};
use crate::core::batch::{BatchReport, BatchRunner};
use crate::core::horizon::PaymentSubmitter;
use crate::core::payment::PaymentRequest;
use crate::utils::error::Result;
use serde::Serialize;

/// An accepted payment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentOutcome {
    pub hash: String,
    /// XLM sent
    pub amount: f64,
    pub ledger: Option<u32>,
    /// Source native balance before the payment, when the submitter reports it
    pub source_balance: Option<String>,
}

impl From<&PaymentScenario> for PaymentRequest {
    fn from(scenario: &PaymentScenario) -> Self {
        PaymentRequest::new(
            scenario.destination.clone(),
            scenario.amount.clone(),
            scenario.memo.clone(),
        )
    }
}

/// One request per recipient, all for `amount`, in recipient order
pub fn batch_requests(recipients: &[Recipient], amount: &str) -> Vec<PaymentRequest> {
    recipients
        .iter()
        .map(|r| PaymentRequest::new(r.public_key.clone(), amount, Some(r.memo.clone())))
        .collect()
}

/// Send a single payment
pub async fn send_payment(
    submitter: &dyn PaymentSubmitter,
    source_secret: &SecretSeed,
    payment: PaymentRequest,
    timeout_seconds: u64,
) -> Result<PaymentOutcome> {
    submit(submitter, source_secret, payment, timeout_seconds).await
}

/// Send `payments` one after another from the same source account.
///
/// Each submission consumes the next sequence number, so a payment is only
/// built once the previous one has been answered.
pub async fn send_payments_batch(
    submitter: &dyn PaymentSubmitter,
    source_secret: &SecretSeed,
    payments: Vec<PaymentRequest>,
    timeout_seconds: u64,
) -> BatchReport<PaymentRequest, PaymentOutcome> {
    let runner = BatchRunner::new("send-payments");

    runner
        .execute_with_summary(
            payments,
            |payment| submit(submitter, source_secret, payment, timeout_seconds),
            |outcome: &PaymentOutcome| outcome.amount,
        )
        .await
}

async fn submit(
    submitter: &dyn PaymentSubmitter,
    source_secret: &SecretSeed,
    payment: PaymentRequest,
    timeout_seconds: u64,
) -> Result<PaymentOutcome> {
    let amount = payment.amount_value()?;
    let receipt = submitter
        .build_and_submit(source_secret, &payment, timeout_seconds)
        .await?;

    Ok(PaymentOutcome {
        hash: receipt.hash,
        amount,
        ledger: receipt.ledger,
        source_balance: receipt.source_balance,
    })
}
