//! Order-related types for the MockTrade REST API.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// The only order type the harness submits.
pub const ORDER_TYPE_LIMIT: &str = "LIMIT";

/// The only time-in-force the harness submits.
pub const TIF_DAY: &str = "DAY";

// ─── OrderId ─────────────────────────────────────────────────────────────────

/// Newtype for order identifiers as returned by `POST /orders/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for OrderId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(OrderId(s.to_string()))
    }
}

impl Serialize for OrderId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(OrderId)
    }
}

// ─── OrderPayload ────────────────────────────────────────────────────────────

/// Body for `POST /orders/`.
///
/// Quantity and price are passed through as given; rejecting non-positive
/// values is the service's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    /// Instrument identifier (not the ticker symbol)
    pub instrument: String,
    /// `BUY` / `SELL`, uppercased on construction
    pub side: String,
    pub qty: i64,
    /// Sent as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "type")]
    pub order_type: String,
    pub tif: String,
    pub trader: String,
    pub account: String,
}

impl OrderPayload {
    /// A `LIMIT` / `DAY` order.
    pub fn limit_day(
        instrument: impl Into<String>,
        side: &str,
        qty: i64,
        price: Decimal,
        trader: impl Into<String>,
        account: impl Into<String>,
    ) -> Self {
        Self {
            instrument: instrument.into(),
            side: side.to_uppercase(),
            qty,
            price,
            order_type: ORDER_TYPE_LIMIT.to_string(),
            tif: TIF_DAY.to_string(),
            trader: trader.into(),
            account: account.into(),
        }
    }
}
