//! Sequential batch runner
//!
//! Items are processed strictly one after another: the next operation does
//! not start until the previous one has completed its network round-trip.
//! Payments from one source account each consume that account's sequence
//! number, so overlapping submissions would be rejected by the network.

use super::types::{BatchItemResult, BatchReport, BatchSummary, ItemResult};
use crate::utils::error::Result;
use std::future::Future;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs one operation per work item and isolates per-item failures
#[derive(Debug, Clone)]
pub struct BatchRunner {
    name: String,
}

impl BatchRunner {
    /// Create a runner; `name` labels its log events
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Process every item in input order.
    ///
    /// Returns exactly one record per item, in the same order. A failing item
    /// is recorded as `ItemResult::Failure` and the batch moves on.
    ///
    /// ```rust,ignore
    /// let runner = BatchRunner::new("monitor");
    /// let results = runner
    ///     .execute(keys, |key| async move { horizon.load_account(&key).await })
    ///     .await;
    /// ```
    pub async fn execute<T, R, F, Fut>(
        &self,
        items: impl IntoIterator<Item = T>,
        mut operation: F,
    ) -> Vec<BatchItemResult<T, R>>
    where
        T: Clone,
        F: FnMut(T) -> Fut,
        Fut: Future<Output = Result<R>>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let total = items.len();
        let mut results = Vec::with_capacity(total);

        for (index, item) in items.into_iter().enumerate() {
            info!(batch = %self.name, "[{}/{}] processing item", index + 1, total);

            let start = Instant::now();
            let result = ItemResult::from_result(operation(item.clone()).await);
            let duration = start.elapsed();

            match &result {
                ItemResult::Success(_) => {
                    debug!(batch = %self.name, index, ?duration, "item succeeded")
                }
                ItemResult::Failure { kind, message } => {
                    warn!(batch = %self.name, index, %kind, "item failed: {}", message)
                }
            }

            results.push(BatchItemResult {
                index,
                item,
                result,
                duration,
            });
        }

        results
    }

    /// Process every item, then summarize the numeric field `value` over successes
    pub async fn execute_with_summary<T, R, F, Fut, V>(
        &self,
        items: impl IntoIterator<Item = T>,
        operation: F,
        value: V,
    ) -> BatchReport<T, R>
    where
        T: Clone,
        F: FnMut(T) -> Fut,
        Fut: Future<Output = Result<R>>,
        V: Fn(&R) -> f64,
    {
        let start = Instant::now();
        let results = self.execute(items, operation).await;
        let total_duration = start.elapsed();

        let summary = BatchSummary::from_results(&results, value);
        info!(
            batch = %self.name,
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            ?total_duration,
            "batch finished"
        );

        BatchReport {
            results,
            summary,
            total_duration,
        }
    }
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new("batch")
    }
}
