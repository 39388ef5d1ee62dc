//! Batch processing with per-item error isolation
//!
//! A batch walks an ordered list of work items, runs one external operation
//! per item, records a success or a classified failure for each, and
//! summarizes the successes.

mod runner;
mod types;


pub use runner::BatchRunner;
pub use types::{BatchItemResult, BatchReport, BatchSummary, FailureKind, ItemResult};
