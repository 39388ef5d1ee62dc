//! Batch result types

use crate::utils::error::{Result, StellarError};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Classified reason an item failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The target resource does not exist (HTTP 404)
    NotFound,
    /// The network rejected a submitted transaction
    SubmissionError,
    /// Anything else
    Other,
}

impl FailureKind {
    /// Single classification point from the crate error type
    pub fn classify(error: &StellarError) -> Self {
        match error {
            StellarError::NotFound(_) => FailureKind::NotFound,
            StellarError::Submission { .. } => FailureKind::SubmissionError,
            _ => FailureKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::NotFound => "not found",
            FailureKind::SubmissionError => "submission error",
            FailureKind::Other => "error",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one work item. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemResult<R> {
    Success(R),
    Failure { kind: FailureKind, message: String },
}

impl<R> ItemResult<R> {
    /// Wrap an operation result, classifying the error if any
    pub fn from_result(result: Result<R>) -> Self {
        match result {
            Ok(value) => ItemResult::Success(value),
            Err(error) => ItemResult::Failure {
                kind: FailureKind::classify(&error),
                message: error.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ItemResult::Success(_))
    }

    pub fn success(&self) -> Option<&R> {
        match self {
            ItemResult::Success(value) => Some(value),
            ItemResult::Failure { .. } => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            ItemResult::Success(_) => None,
            ItemResult::Failure { kind, .. } => Some(*kind),
        }
    }
}

/// Result record for one item, attributed to its input position
#[derive(Debug, Clone)]
pub struct BatchItemResult<T, R> {
    /// Index of the item in the original batch
    pub index: usize,
    /// The item that was processed
    pub item: T,
    pub result: ItemResult<R>,
    /// Time taken by the operation
    pub duration: Duration,
}

/// Aggregates over a finished batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Sum of the measured field over successful items
    pub total_value: f64,
    /// Mean of the measured field; `None` when nothing succeeded
    pub average: Option<f64>,
}

impl BatchSummary {
    /// Summarize `results`, measuring `value` on successful items only
    pub fn from_results<T, R, V>(results: &[BatchItemResult<T, R>], value: V) -> Self
    where
        V: Fn(&R) -> f64,
    {
        let total = results.len();
        let successes: Vec<&R> = results.iter().filter_map(|r| r.result.success()).collect();
        let succeeded = successes.len();
        let total_value: f64 = successes.iter().map(|r| value(*r)).sum();
        let average = if succeeded > 0 {
            Some(total_value / succeeded as f64)
        } else {
            None
        };

        Self {
            total,
            succeeded,
            failed: total - succeeded,
            total_value,
            average,
        }
    }

    /// Number of failures of a given kind
    pub fn count_kind<T, R>(results: &[BatchItemResult<T, R>], kind: FailureKind) -> usize {
        results
            .iter()
            .filter(|r| r.result.failure_kind() == Some(kind))
            .count()
    }
}

/// Results in input order plus the summary computed from them
#[derive(Debug, Clone)]
pub struct BatchReport<T, R> {
    pub results: Vec<BatchItemResult<T, R>>,
    pub summary: BatchSummary,
    /// Wall time for the whole batch
    pub total_duration: Duration,
}
