//! Orders sub-client.

use serde::Serialize;

use crate::api::client::TradeApiClient;
use crate::api::error::ApiResult;
use crate::api::response::ApiResponse;
use crate::api::types::{OrderId, OrderPayload};

pub const ORDERS_PATH: &str = "/orders/";
pub const STRATEGY_ORDERS_PATH: &str = "/orders/strategy";

pub struct Orders<'a> {
    pub(crate) client: &'a TradeApiClient,
}

impl<'a> Orders<'a> {
    /// `POST /orders/`
    pub async fn create(&self, payload: &OrderPayload) -> ApiResult<ApiResponse> {
        let body = serde_json::to_value(payload)?;
        self.client.post(ORDERS_PATH, Some(body), None).await
    }

    /// `GET /orders/`
    pub async fn list(&self) -> ApiResult<ApiResponse> {
        self.client.get(ORDERS_PATH, None).await
    }

    /// `GET /orders/{id}`
    pub async fn get(&self, order_id: &OrderId) -> ApiResult<ApiResponse> {
        self.client.get(&order_path(order_id, ""), None).await
    }

    /// `POST /orders/{id}/cancel`
    pub async fn cancel(&self, order_id: &OrderId) -> ApiResult<ApiResponse> {
        self.client
            .post(&order_path(order_id, "/cancel"), None, None)
            .await
    }

    /// `POST /orders/{id}/simulate_fill`
    pub async fn simulate_fill(&self, order_id: &OrderId) -> ApiResult<ApiResponse> {
        self.client
            .post(&order_path(order_id, "/simulate_fill"), None, None)
            .await
    }

    /// `POST /orders/strategy`. The payload shape is up to the caller.
    pub async fn create_strategy(&self, payload: &impl Serialize) -> ApiResult<ApiResponse> {
        let body = serde_json::to_value(payload)?;
        self.client.post(STRATEGY_ORDERS_PATH, Some(body), None).await
    }
}

/// The id is inserted verbatim; no percent-encoding.
fn order_path(order_id: &OrderId, suffix: &str) -> String {
    format!("{}{}{}", ORDERS_PATH, order_id, suffix)
}
