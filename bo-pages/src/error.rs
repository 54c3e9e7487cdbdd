//! Driver error types

use thiserror::Error;

/// Errors raised while driving a browser tab
#[derive(Debug, Error)]
pub enum DriverError {
    /// A wait did not complete in time
    #[error("Timed out after {after_ms}ms waiting for {what}")]
    Timeout { what: String, after_ms: u64 },

    /// No element matches the selector
    #[error("No element matches selector: {0}")]
    NoSuchElement(String),

    /// The WebDriver endpoint answered with an error
    #[error("WebDriver error `{error}`: {message}")]
    Protocol { error: String, message: String },

    /// HTTP request to the WebDriver endpoint failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Unexpected JSON in a WebDriver response
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A click that should have opened a tab did not
    #[error("No new window opened after clicking {0}")]
    NoNewWindow(String),
}

impl DriverError {
    pub fn timeout(what: impl Into<String>, after: std::time::Duration) -> Self {
        Self::Timeout {
            what: what.into(),
            after_ms: after.as_millis() as u64,
        }
    }
}

/// Result type for driver operations
pub type DriverResult<T> = Result<T, DriverError>;
