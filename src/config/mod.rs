//! Configuration management
//!
//! Network endpoints, the payment source secret and the item lists that each
//! scenario iterates over.

pub mod loader;
pub mod models;

pub use loader::CONFIG_FILE_ENV;
pub use models::*;
