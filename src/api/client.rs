//! MockTrade REST client implementation.
//!
//! [`TradeApiClient`] wraps a `reqwest` client configured from a
//! [`Config`]: base URL and path, JSON default headers, transport timeout and
//! relaxed TLS validation. Every call returns a fully read [`ApiResponse`],
//! whatever its status code.
//!
//! # Example
//!
//! ```rust,ignore
//! use mocktrade_e2e::api::{QueryParams, TradeApiClient};
//! use mocktrade_e2e::config::Config;
//!
//! let client = TradeApiClient::new(&Config::load())?;
//!
//! let orders = client.get("/orders/", Some(&QueryParams::new().with("limit", 5))).await?;
//! println!("{} -> {}", orders.url(), orders.status());
//! ```

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde_json::Value;

use crate::api::auth::Auth;
use crate::api::error::{ApiError, ApiResult};
use crate::api::orders::Orders;
use crate::api::request::{ApiRequest, HeaderOverrides, QueryParams};
use crate::api::response::ApiResponse;
use crate::config::Config;

/// Builder for configuring [`TradeApiClient`].
#[derive(Debug, Clone)]
pub struct TradeApiClientBuilder {
    base_url: String,
    base_path: String,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
    accept_invalid_certs: bool,
}

impl TradeApiClientBuilder {
    /// Start from the connection settings in `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url().trim_end_matches('/').to_string(),
            base_path: normalize_base_path(config.base_path()),
            timeout: config.default_timeout(),
            default_headers: config.default_headers().to_vec(),
            accept_invalid_certs: true,
        }
    }

    /// Set the transport timeout. `Duration::ZERO` disables it.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a default header to all requests, replacing a same-named one.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.default_headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        self.default_headers.push((name, value.into()));
        self
    }

    /// Accept self-signed and otherwise invalid certificates (on by default).
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<TradeApiClient> {
        let headers = header_map(&self.default_headers)?;

        let mut builder = Client::builder()
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .default_headers(headers);
        if !self.timeout.is_zero() {
            builder = builder.timeout(self.timeout);
        }
        let http_client = builder.build()?;

        Ok(TradeApiClient {
            http_client,
            base_url: self.base_url,
            base_path: self.base_path,
        })
    }
}

/// MockTrade REST API client.
///
/// Owned by a single scenario; nothing in it is shared or mutated across calls.
#[derive(Debug, Clone)]
pub struct TradeApiClient {
    http_client: Client,
    base_url: String,
    base_path: String,
}

impl TradeApiClient {
    /// Create a client with the settings from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a default header is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &Config) -> ApiResult<Self> {
        TradeApiClientBuilder::new(config).build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder(config: &Config) -> TradeApiClientBuilder {
        TradeApiClientBuilder::new(config)
    }

    /// Service origin, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Normalized API prefix: empty, or one leading slash and no trailing one.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Absolute URL for an API-relative path.
    pub fn url_for(&self, path: &str) -> String {
        let separator = if path.is_empty() || path.starts_with('/') {
            ""
        } else {
            "/"
        };
        format!("{}{}{}{}", self.base_url, self.base_path, separator, path)
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    /// Login, logout and current-user endpoints.
    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    /// Order lifecycle endpoints.
    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    // =========================================================================
    // Verbs
    // =========================================================================

    /// GET `path` with optional query parameters.
    pub async fn get(&self, path: &str, query: Option<&QueryParams>) -> ApiResult<ApiResponse> {
        self.execute(ApiRequest::get(path).with_query(query)).await
    }

    /// POST `path`. The body is sent as JSON when `Some`; with `None` the
    /// request has no body at all.
    pub async fn post(
        &self,
        path: &str,
        body: Option<Value>,
        query: Option<&QueryParams>,
    ) -> ApiResult<ApiResponse> {
        self.execute(ApiRequest::post(path).with_body(body).with_query(query))
            .await
    }

    /// PUT `path`, with the same body rules as [`TradeApiClient::post`].
    pub async fn put(
        &self,
        path: &str,
        body: Option<Value>,
        query: Option<&QueryParams>,
    ) -> ApiResult<ApiResponse> {
        self.execute(ApiRequest::put(path).with_body(body).with_query(query))
            .await
    }

    /// DELETE `path` with optional query parameters.
    pub async fn delete(&self, path: &str, query: Option<&QueryParams>) -> ApiResult<ApiResponse> {
        self.execute(ApiRequest::delete(path).with_query(query)).await
    }

    /// GET with per-request header overrides.
    pub async fn get_with_headers(
        &self,
        path: &str,
        headers: &HeaderOverrides,
    ) -> ApiResult<ApiResponse> {
        self.execute(ApiRequest::get(path).with_headers(headers))
            .await
    }

    /// POST with per-request header overrides.
    pub async fn post_with_headers(
        &self,
        path: &str,
        body: Option<Value>,
        headers: &HeaderOverrides,
    ) -> ApiResult<ApiResponse> {
        self.execute(ApiRequest::post(path).with_body(body).with_headers(headers))
            .await
    }

    /// Send a request exactly once and read the whole response.
    ///
    /// Any status code is returned as `Ok`. Transport failures are returned
    /// as [`ApiError::Http`].
    pub async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = self.url_for(&request.path);
        let mut builder = self.http_client.request(request.method.clone(), &url);

        if !request.query.is_empty() {
            builder = builder.query(request.query.pairs());
        }
        if !request.headers.is_empty() {
            builder = builder.headers(header_map(request.headers.pairs())?);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(
            method = %request.method,
            url = %url,
            query = ?request.query.pairs(),
            body = ?request.body,
            "Sending request"
        );

        let started = Instant::now();
        let response = builder.send().await.map_err(|e| {
            tracing::debug!(method = %request.method, url = %url, error = %e, "Request failed");
            e
        })?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;
        let elapsed_ms = millis(started.elapsed());

        if (200..300).contains(&status) {
            tracing::debug!(status, elapsed_ms, url = %url, "Received response");
        } else {
            tracing::debug!(
                status,
                elapsed_ms,
                url = %url,
                body = %body,
                "Received non-success response"
            );
        }

        Ok(ApiResponse::new(request.method, url, status, headers, body))
    }
}

/// `""` stays empty; otherwise one leading slash and no trailing slash.
fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn header_map(pairs: &[(String, String)]) -> ApiResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
            ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e))
        })?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}
