//! Request payload types for the MockTrade REST API.

pub mod auth;
pub mod order;

pub use auth::LoginCredentials;
pub use order::{OrderId, OrderPayload, ORDER_TYPE_LIMIT, TIF_DAY};
