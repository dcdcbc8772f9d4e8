//! # MockTrade E2E
//!
//! A behavior-driven end-to-end harness for the MockTrade REST API.
//!
//! ## Modules
//!
//! - [`config`]: connection settings loaded from an optional properties file
//! - [`api`]: HTTP client wrapper, response handles and the Auth / Order facades
//! - [`factory`]: canonical request payloads for scenarios
//! - [`assertions`]: status and JSON body checks over a response
//! - [`session`]: per-scenario state threaded between steps
//!
//! The scenario runner itself lives in `tests/cucumber.rs`; this crate only
//! provides what the step definitions call into.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mocktrade_e2e::prelude::*;
//!
//! let config = Config::load();
//! let client = TradeApiClient::new(&config)?;
//!
//! let order = factory::simple_order_for_symbol(&config, "buy", "AAPL", 10, Decimal::new(15000, 2));
//! let response = client.orders().create(&order).await?;
//!
//! assert_status_code(&response, 200)?;
//! assert_response_field_equals(&response, "status", "NEW")?;
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Connection settings and free-form test properties.
pub mod config;

/// REST client module: request building, responses, domain facades.
pub mod api;

/// Test data: order payloads, login credentials, unique ids.
pub mod factory;

/// Scenario-halting checks over an [`api::ApiResponse`].
pub mod assertions;

/// Mutable state for a single scenario.
pub mod session;

/// Top-level harness error.
pub mod error;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use mocktrade_e2e::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ApiError, ApiRequest, ApiResponse, ApiResult, FieldPath, HeaderOverrides, LoginCredentials,
        OrderId, OrderPayload, QueryParams, TradeApiClient, TradeApiClientBuilder,
    };
    pub use crate::assertions::{
        assert_response_body_contains, assert_response_contains_field,
        assert_response_field_approx, assert_response_field_equals, assert_status_code,
        assert_status_in, AssertionError,
    };
    pub use crate::config::Config;
    pub use crate::error::{HarnessError, HarnessResult};
    pub use crate::factory;
    pub use crate::session::ScenarioSession;
}
