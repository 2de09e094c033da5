//! Error types for the dashboard client.

use thiserror::Error;

/// Result type for dashboard client operations.
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Dashboard client errors.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response); carries the server-reported message
    /// when one was present
    #[error("{0}")]
    Api(String),

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for DashboardError {
    fn from(error: reqwest::Error) -> Self {
        DashboardError::Network(error.to_string())
    }
}
