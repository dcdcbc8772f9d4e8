//! Canonical request payloads for scenarios.

use rust_decimal::Decimal;

use crate::api::types::{LoginCredentials, OrderPayload};
use crate::config::{Config, KEY_DEFAULT_ACCOUNT_ID, KEY_DEFAULT_TRADER_ID};

/// Trader used when `default.trader.id` is not configured.
pub const FALLBACK_TRADER_ID: &str = "d168e0c6-0cc2-49ec-81b1-484ffd4e24e5";

/// Account used when `default.account.id` is not configured.
pub const FALLBACK_ACCOUNT_ID: &str = "a6e7a42b-5812-4b8a-99ec-7f5d2e8d441a";

/// Symbol used for unrecognised tickers.
pub const DEFAULT_SYMBOL: &str = "AAPL";

/// Seeded test instruments on the service.
const SYMBOL_TABLE: &[(&str, &str)] = &[
    ("AAPL", "25473d66-8d9a-4cb6-b084-54f1b1286c9a"),
    ("GOOGL", "d2a9b71c-22c3-4c5e-881c-9db9e280717f"),
    ("MSFT", "43fb5465-4535-4064-bd5e-9eb81a2a9bf1"),
    ("TSLA", "190310b3-1948-44fd-88eb-7f1a5d3aabab"),
];

/// A `LIMIT` / `DAY` order with every field given explicitly.
pub fn simple_order(
    side: &str,
    instrument_id: &str,
    qty: i64,
    price: Decimal,
    trader_id: &str,
    account_id: &str,
) -> OrderPayload {
    OrderPayload::limit_day(instrument_id, side, qty, price, trader_id, account_id)
}

/// A `LIMIT` / `DAY` order for a ticker symbol, trader and account taken
/// from `config` (or the built-in fallbacks).
pub fn simple_order_for_symbol(
    config: &Config,
    side: &str,
    symbol: &str,
    qty: i64,
    price: Decimal,
) -> OrderPayload {
    let trader = config.property(KEY_DEFAULT_TRADER_ID, FALLBACK_TRADER_ID);
    let account = config.property(KEY_DEFAULT_ACCOUNT_ID, FALLBACK_ACCOUNT_ID);
    OrderPayload::limit_day(
        instrument_id_for_symbol(symbol),
        side,
        qty,
        price,
        trader,
        account,
    )
}

/// Instrument id for a known symbol; AAPL's id for anything else.
pub fn instrument_id_for_symbol(symbol: &str) -> &'static str {
    if let Some(id) = lookup_symbol(symbol) {
        return id;
    }
    tracing::warn!(symbol, "Unknown symbol, defaulting to {}", DEFAULT_SYMBOL);
    lookup_symbol(DEFAULT_SYMBOL).unwrap_or_default()
}

fn lookup_symbol(symbol: &str) -> Option<&'static str> {
    SYMBOL_TABLE
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, id)| *id)
}

pub fn login_credentials(username: &str, password: &str) -> LoginCredentials {
    LoginCredentials::new(username, password)
}

/// Random UUID v4, for fixtures that need a fresh identifier.
pub fn unique_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
