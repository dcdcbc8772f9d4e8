//! Test environment configuration.
//!
//! Settings come from an optional Java-style properties file. A missing or
//! unreadable file is an expected condition: the built-in defaults are used
//! and the harness carries on.
//!
//! | Key | Default |
//! |---|---|
//! | `base.url` | `http://localhost:8000` |
//! | `base.path` | `/api/v1` |
//! | `default.timeout` | `30000` (ms, `0` disables the timeout) |
//! | `default.trader.id` | see [`crate::factory`] |
//! | `default.account.id` | see [`crate::factory`] |

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use java_properties::{LineContent, PropertiesIter};

/// Default service URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default API prefix appended to the base URL.
pub const DEFAULT_BASE_PATH: &str = "/api/v1";

/// Default transport timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Properties file read by [`Config::load`].
pub const DEFAULT_CONFIG_PATH: &str = "tests/resources/config.properties";

/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "MOCKTRADE_CONFIG";

pub const KEY_BASE_URL: &str = "base.url";
pub const KEY_BASE_PATH: &str = "base.path";
pub const KEY_DEFAULT_TIMEOUT: &str = "default.timeout";
pub const KEY_DEFAULT_TRADER_ID: &str = "default.trader.id";
pub const KEY_DEFAULT_ACCOUNT_ID: &str = "default.account.id";

/// Immutable snapshot of the harness settings.
///
/// Built once per process and handed to
/// [`TradeApiClient`](crate::api::TradeApiClient) explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    base_url: String,
    base_path: String,
    default_headers: Vec<(String, String)>,
    default_timeout_ms: u64,
    properties: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_properties(std::iter::empty::<(String, String)>())
    }
}

impl Config {
    /// Load from `$MOCKTRADE_CONFIG`, or [`DEFAULT_CONFIG_PATH`] when unset.
    pub fn load() -> Self {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::from_path(path)
    }

    /// Load from a Java-style properties file, falling back to defaults if it
    /// cannot be opened.
    ///
    /// Both `key=value` and `key: value` separators are accepted and values
    /// are taken literally. A line that cannot be decoded (for example a bad
    /// `\uXXXX` escape) is skipped with a warning.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::info!(path = %path.display(), error = %e, "Using default configuration");
                return Self::default();
            }
        };

        let mut properties = HashMap::new();
        for item in PropertiesIter::new(BufReader::new(file)) {
            match item {
                Ok(line) => {
                    if let LineContent::KVPair(key, value) = line.consume_content() {
                        properties.insert(key, value);
                    }
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping malformed property line");
                }
            }
        }

        tracing::info!(
            path = %path.display(),
            count = properties.len(),
            "Loaded test configuration"
        );
        Self::from_properties(properties)
    }

    /// Build from raw key/value pairs. Unknown keys stay available via [`Config::property`].
    pub fn from_properties<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let properties: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let base_url = properties
            .get(KEY_BASE_URL)
            .cloned()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_path = properties
            .get(KEY_BASE_PATH)
            .cloned()
            .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());
        let default_timeout_ms = match properties.get(KEY_DEFAULT_TIMEOUT) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid default.timeout, using {}ms", DEFAULT_TIMEOUT_MS);
                DEFAULT_TIMEOUT_MS
            }),
            None => DEFAULT_TIMEOUT_MS,
        };

        Self {
            base_url,
            base_path,
            default_headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
            default_timeout_ms,
            properties,
        }
    }

    /// Same settings, different host.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Scheme and host of the service, e.g. `http://localhost:8000`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API prefix joined after [`Config::base_url`], e.g. `/api/v1`.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Headers sent with every request.
    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    /// Transport timeout in milliseconds. `0` means no timeout.
    pub fn default_timeout_ms(&self) -> u64 {
        self.default_timeout_ms
    }

    /// [`Config::default_timeout_ms`] as a [`Duration`]; `Duration::ZERO`
    /// means requests never time out.
    pub fn default_timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms)
    }

    /// Look up a raw property, returning `default` when it is not set.
    pub fn property(&self, key: &str, default: &str) -> String {
        self.properties
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}
