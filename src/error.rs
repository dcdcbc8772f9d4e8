//! Unified harness error types.

use thiserror::Error;

use crate::api::ApiError;
use crate::assertions::AssertionError;

/// Top-level error a scenario step can fail with.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Assertion failed: {0}")]
    Assertion(#[from] AssertionError),

    /// A step read scenario state that no earlier step stored.
    #[error("No {0} recorded in this scenario")]
    MissingState(&'static str),
}

/// Result type alias for step-level operations.
pub type HarnessResult<T> = Result<T, HarnessError>;
