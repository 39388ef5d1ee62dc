//! The six first-flight scenarios as library functions
//!
//! Each scenario takes its collaborators as trait objects and its work items
//! as plain values, and returns data for [`crate::report`] to render.

mod accounts;
mod balances;
mod payments;

pub use accounts::{CreatedAccount, NewAccount, create_account, create_accounts_batch};
pub use balances::{AccountSnapshot, BalanceSheet, MonitorReport, check_balance, monitor_balances};
pub use payments::{PaymentOutcome, batch_requests, send_payment, send_payments_batch};
