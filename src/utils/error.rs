//! Error handling for the Stellar tooling
//!
//! This module defines the error type shared by the Horizon and Friendbot
//! adapters, the configuration loader and the scenarios.

use thiserror::Error;

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, StellarError>;

/// Main error type
#[derive(Error, Debug)]
pub enum StellarError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors (connection refused, TLS, timeouts)
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested ledger resource does not exist (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// The network rejected a submitted transaction
    #[error("Transaction rejected (HTTP {status}): {details}")]
    Submission { status: u16, details: String },

    /// Friendbot refused to fund an account
    #[error("Funding failed: {0}")]
    Funding(String),

    /// Any other non-success response from Horizon
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Key parsing, transaction building, signing or encoding failed in the SDK
    #[error("SDK error: {0}")]
    Sdk(String),

    /// Invalid caller-supplied input (amount, memo, key)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A response field could not be interpreted
    #[error("Parsing error: {0}")]
    Parsing(String),
}

impl StellarError {
    /// Error
    pub fn is_not_found(&self) -> bool {
        matches!(self, StellarError::NotFound(_))
    }

    /// Error
    pub fn is_submission(&self) -> bool {
        matches!(self, StellarError::Submission { .. })
    }

    /// Errors raised before any network call was made
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            StellarError::Config(_)
                | StellarError::Yaml(_)
                | StellarError::Io(_)
                | StellarError::InvalidInput(_)
                | StellarError::Sdk(_)
        )
    }
}

impl From<stellar_base::error::Error> for StellarError {
    fn from(error: stellar_base::error::Error) -> Self {
        StellarError::Sdk(error.to_string())
    }
}
