//! Scenario-halting checks over an [`ApiResponse`].
//!
//! Every helper returns `Err(AssertionError)` on failure; step definitions
//! propagate it with `?`, which aborts the rest of the scenario. Failures are
//! also logged at `warn` with the request line and body.

use serde_json::Value;
use thiserror::Error;

use crate::api::ApiResponse;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssertionError {
    #[error("Expected status code {expected} but got {actual}. Response: {body}")]
    StatusMismatch {
        expected: u16,
        actual: u16,
        body: String,
    },

    #[error("Expected one of status codes {expected:?} but got {actual}. Response: {body}")]
    StatusNotIn {
        expected: Vec<u16>,
        actual: u16,
        body: String,
    },

    #[error("Expected field '{path}' not found in response")]
    MissingField { path: String },

    #[error("Expected field '{path}' to be '{expected}' but got '{actual}'")]
    FieldMismatch {
        path: String,
        expected: Value,
        /// `null` when the field is absent
        actual: Value,
    },

    #[error("Expected field '{path}' to be a number but got '{actual}'")]
    NotANumber { path: String, actual: Value },

    #[error("Expected field '{path}' to be {expected} (±{tolerance}) but got {actual}")]
    OutOfTolerance {
        path: String,
        expected: f64,
        actual: f64,
        tolerance: f64,
    },

    #[error("Expected response body to contain '{text}' but it didn't")]
    BodyMissingText { text: String },
}

/// Passes iff `response.status() == expected`.
pub fn assert_status_code(response: &ApiResponse, expected: u16) -> Result<(), AssertionError> {
    if response.status() == expected {
        return Ok(());
    }
    fail(
        response,
        AssertionError::StatusMismatch {
            expected,
            actual: response.status(),
            body: response.body().to_string(),
        },
    )
}

/// Passes iff the status is one of `expected`.
pub fn assert_status_in(response: &ApiResponse, expected: &[u16]) -> Result<(), AssertionError> {
    if expected.contains(&response.status()) {
        return Ok(());
    }
    fail(
        response,
        AssertionError::StatusNotIn {
            expected: expected.to_vec(),
            actual: response.status(),
            body: response.body().to_string(),
        },
    )
}

/// Fails when the path is absent or holds JSON `null`.
pub fn assert_response_contains_field(
    response: &ApiResponse,
    path: &str,
) -> Result<(), AssertionError> {
    match response.field(path) {
        Some(value) if !value.is_null() => Ok(()),
        _ => fail(
            response,
            AssertionError::MissingField {
                path: path.to_string(),
            },
        ),
    }
}

/// Fails unless the field equals `expected`. Numbers compare by value, so
/// `10` matches `10.0`; an absent field compares as `null`.
pub fn assert_response_field_equals(
    response: &ApiResponse,
    path: &str,
    expected: impl Into<Value>,
) -> Result<(), AssertionError> {
    let expected = expected.into();
    let actual = response.field(path).cloned().unwrap_or(Value::Null);
    if values_match(&actual, &expected) {
        return Ok(());
    }
    fail(
        response,
        AssertionError::FieldMismatch {
            path: path.to_string(),
            expected,
            actual,
        },
    )
}

/// Fails unless the field is a number within `tolerance` of `expected`.
pub fn assert_response_field_approx(
    response: &ApiResponse,
    path: &str,
    expected: f64,
    tolerance: f64,
) -> Result<(), AssertionError> {
    let actual = match response.field(path) {
        None => {
            return fail(
                response,
                AssertionError::MissingField {
                    path: path.to_string(),
                },
            )
        }
        Some(value) => value,
    };
    let Some(actual) = actual.as_f64() else {
        return fail(
            response,
            AssertionError::NotANumber {
                path: path.to_string(),
                actual: actual.clone(),
            },
        );
    };
    if (actual - expected).abs() <= tolerance {
        return Ok(());
    }
    fail(
        response,
        AssertionError::OutOfTolerance {
            path: path.to_string(),
            expected,
            actual,
            tolerance,
        },
    )
}

/// Fails unless the raw body contains `text`.
pub fn assert_response_body_contains(
    response: &ApiResponse,
    text: &str,
) -> Result<(), AssertionError> {
    if response.body().contains(text) {
        return Ok(());
    }
    fail(
        response,
        AssertionError::BodyMissingText {
            text: text.to_string(),
        },
    )
}

fn values_match(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Number(a), Value::Number(b)) => match (a.as_i64(), b.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => match (a.as_u64(), b.as_u64()) {
                (Some(x), Some(y)) => x == y,
                _ => a.as_f64() == b.as_f64(),
            },
        },
        _ => actual == expected,
    }
}

fn fail(response: &ApiResponse, error: AssertionError) -> Result<(), AssertionError> {
    tracing::warn!(
        method = %response.method(),
        url = %response.url(),
        status = response.status(),
        body = %response.body(),
        "{}",
        error
    );
    Err(error)
}
