//! API error types for the MockTrade REST client.
//!
//! Non-2xx responses are *not* errors here: they come back as an
//! [`ApiResponse`](crate::api::ApiResponse) for the assertions to judge.
//! Only failures that leave no response to inspect end up in [`ApiError`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure from reqwest (connection refused, timeout, unreadable body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid request input (header name/value, URL)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Request payload could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
