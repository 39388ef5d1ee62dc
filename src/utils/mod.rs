//! Utility modules
//!
//! - **error**: the crate error type and `Result` alias
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{Result, StellarError};

/// Keep the first `head` characters followed by `...`
///
/// Strings that already fit are returned unchanged.
pub fn truncate_key(s: &str, head: usize) -> String {
    if s.chars().count() <= head {
        s.to_string()
    } else {
        let prefix: String = s.chars().take(head).collect();
        format!("{}...", prefix)
    }
}

/// Abbreviate as `HEAD...TAIL`, e.g. `GB5UV...3DQ`
pub fn abbreviate_key(s: &str, head: usize, tail: usize) -> String {
    let len = s.chars().count();
    if len <= head + tail {
        return s.to_string();
    }
    let prefix: String = s.chars().take(head).collect();
    let suffix: String = s.chars().skip(len - tail).collect();
    format!("{}...{}", prefix, suffix)
}

/// Check if a string is a valid absolute URL
pub fn is_valid_url(url: &str) -> bool {
    url::Url::parse(url).is_ok()
}
