//! HTTP error mapping
//!
//! Converts a non-success status code and response body into the crate
//! error type. This is the only place where HTTP statuses are inspected.

use super::types::Problem;
use crate::utils::error::StellarError;

/// Maps HTTP failures to `StellarError`
pub trait ErrorMapper: Send + Sync + 'static {
    /// Map HTTP status code and response body
    ///
    /// # Common Mappings
    /// * `404` - Resource not found
    /// * `5xx` - Server-side errors
    fn map_http_error(&self, status_code: u16, response_body: &str) -> StellarError;
}

/// Horizon error mapper
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizonErrorMapper;

impl ErrorMapper for HorizonErrorMapper {
    fn map_http_error(&self, status_code: u16, response_body: &str) -> StellarError {
        let problem = Problem::parse(response_body);

        match status_code {
            404 => StellarError::NotFound(
                problem
                    .message()
                    .unwrap_or("The resource at the url requested was not found.")
                    .to_string(),
            ),
            _ => StellarError::Api {
                status: status_code,
                message: problem
                    .message()
                    .map(str::to_string)
                    .unwrap_or_else(|| body_excerpt(response_body)),
            },
        }
    }
}

impl HorizonErrorMapper {
    /// Map a failed `POST /transactions`
    ///
    /// Only a 400 carrying a `transaction_failed` problem means the network
    /// refused the transaction; the details hold Horizon's result codes when
    /// it sent them. Anything else, rate limiting included, goes through
    /// `map_http_error`.
    pub fn map_submission_error(&self, status_code: u16, response_body: &str) -> StellarError {
        let problem = Problem::parse(response_body);

        if status_code != 400 || !problem.is_transaction_failure() {
            return self.map_http_error(status_code, response_body);
        }

        let details = match problem.result_codes() {
            Some(codes) => codes.to_string(),
            None => problem
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| body_excerpt(response_body)),
        };

        StellarError::Submission {
            status: status_code,
            details,
        }
    }
}

/// Friendbot error mapper
#[derive(Debug, Clone, Copy, Default)]
pub struct FriendbotErrorMapper;

impl ErrorMapper for FriendbotErrorMapper {
    fn map_http_error(&self, status_code: u16, response_body: &str) -> StellarError {
        let problem = Problem::parse(response_body);
        let message = problem
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| body_excerpt(response_body));
        StellarError::Funding(format!("HTTP {}: {}", status_code, message))
    }
}

/// First line of a non-JSON body, bounded in length
fn body_excerpt(body: &str) -> String {
    const MAX: usize = 200;
    let line = body.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        "empty response body".to_string()
    } else if line.chars().count() > MAX {
        format!("{}...", line.chars().take(MAX).collect::<String>())
    } else {
        line.to_string()
    }
}
