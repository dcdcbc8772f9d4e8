//! REST client module for MockTrade.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mocktrade_e2e::api::{LoginCredentials, TradeApiClient};
//! use mocktrade_e2e::config::Config;
//!
//! let client = TradeApiClient::new(&Config::load())?;
//!
//! let login = client.auth().login(&LoginCredentials::new("alice", "secret")).await?;
//! println!("login -> {}", login.status());
//!
//! let orders = client.orders().list().await?;
//! println!("first order id: {:?}", orders.field_str("[0].id"));
//! ```
//!
//! # Error Handling
//!
//! Only transport failures become an [`ApiError`]. A 4xx/5xx reply is an
//! ordinary [`ApiResponse`] and is judged by [`crate::assertions`]:
//!
//! ```rust,ignore
//! match client.orders().get(&"missing".into()).await {
//!     Ok(resp) if resp.status() == 404 => println!("not found"),
//!     Ok(resp) => println!("status {}", resp.status()),
//!     Err(ApiError::Http(e)) => println!("service unreachable: {}", e),
//!     Err(e) => println!("other error: {}", e),
//! }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod orders;
pub mod path;
pub mod request;
pub mod response;
pub mod types;

// Re-export main types for convenience
pub use auth::Auth;
pub use client::{TradeApiClient, TradeApiClientBuilder};
pub use error::{ApiError, ApiResult};
pub use orders::Orders;
pub use path::{FieldPath, InvalidFieldPath, Segment};
pub use request::{ApiRequest, HeaderOverrides, QueryParams};
pub use response::ApiResponse;
pub use types::{LoginCredentials, OrderId, OrderPayload, ORDER_TYPE_LIMIT, TIF_DAY};
