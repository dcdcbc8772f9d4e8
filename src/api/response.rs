//! Fully materialized HTTP responses.

use std::sync::OnceLock;

use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::path::FieldPath;

/// A response whose status, headers and body have all been read off the wire.
///
/// The JSON form of the body is parsed on first use and cached. A body that
/// is not JSON simply has no structured form; field lookups then miss.
#[derive(Debug)]
pub struct ApiResponse {
    method: Method,
    url: String,
    status: u16,
    headers: HeaderMap,
    body: String,
    json: OnceLock<Option<Value>>,
}

impl ApiResponse {
    pub fn new(
        method: Method,
        url: impl Into<String>,
        status: u16,
        headers: HeaderMap,
        body: impl Into<String>,
    ) -> Self {
        Self {
            method,
            url: url.into(),
            status,
            headers,
            body: body.into(),
            json: OnceLock::new(),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Header value as text, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Raw body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parsed body, or `None` when the body is not valid JSON.
    pub fn json(&self) -> Option<&Value> {
        self.json
            .get_or_init(|| serde_json::from_str(&self.body).ok())
            .as_ref()
    }

    /// Deserialize the body into a typed view.
    pub fn json_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Look up a field path such as `user.id` or `fills[0].qty`.
    ///
    /// An unparsable path is treated like an absent field.
    pub fn field(&self, path: &str) -> Option<&Value> {
        let path: FieldPath = path.parse().ok()?;
        path.lookup(self.json()?)
    }

    /// String field, `None` if absent or not a string.
    pub fn field_str(&self, path: &str) -> Option<&str> {
        self.field(path).and_then(Value::as_str)
    }

    /// Field rendered as an identifier: strings verbatim, numbers via `to_string`.
    pub fn field_id(&self, path: &str) -> Option<String> {
        match self.field(path)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
