//! Task store API-specific error types.

/// Errors that can occur during task store operations.
///
/// Transport failures and non-success statuses are treated the same way by
/// callers: logged and swallowed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request could not be sent, timed out, or the body could not be read
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Base URL could not be used to build a request
    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}
