//! Per-call request description.

use std::fmt::Display;

use reqwest::Method;
use serde_json::Value;

/// Query string parameters, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter. Numbers and other `Display` values are rendered as text.
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.0.push((name.into(), value.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Headers that replace same-named defaults for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderOverrides(Vec<(String, String)>);

impl HeaderOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((name.into(), value.into()));
        self
    }

    /// `Authorization: Bearer <token>`
    pub fn bearer(self, token: &str) -> Self {
        self.with("Authorization", format!("Bearer {}", token))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Method, path and optional parts of one HTTP call.
///
/// `path` is relative to the configured base URL and base path.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Value>,
    pub headers: HeaderOverrides,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::default(),
            body: None,
            headers: HeaderOverrides::default(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_query(mut self, query: Option<&QueryParams>) -> Self {
        if let Some(q) = query {
            self.query = q.clone();
        }
        self
    }

    /// Attach a JSON body. `None` leaves the request without one.
    pub fn with_body(mut self, body: Option<Value>) -> Self {
        self.body = body;
        self
    }

    pub fn with_headers(mut self, headers: &HeaderOverrides) -> Self {
        self.headers = headers.clone();
        self
    }
}
