//! Per-scenario state threaded between steps.
//!
//! A fresh [`ScenarioSession`] is created for every scenario and dropped at
//! its end. Steps record what later steps need (the last response, the order
//! they created) and read it back through the `require_*` accessors.

use crate::api::{ApiResponse, OrderId};
use crate::error::{HarnessError, HarnessResult};

#[derive(Debug, Default)]
pub struct ScenarioSession {
    last_response: Option<ApiResponse>,
    last_order_id: Option<OrderId>,
    last_trade_id: Option<String>,
    current_username: Option<String>,
}

impl ScenarioSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_response(&self) -> Option<&ApiResponse> {
        self.last_response.as_ref()
    }

    /// Replace the stored response. The previous one is dropped, never edited.
    pub fn set_last_response(&mut self, response: ApiResponse) {
        self.last_response = Some(response);
    }

    pub fn require_last_response(&self) -> HarnessResult<&ApiResponse> {
        self.last_response
            .as_ref()
            .ok_or(HarnessError::MissingState("response"))
    }

    pub fn last_order_id(&self) -> Option<&OrderId> {
        self.last_order_id.as_ref()
    }

    pub fn set_last_order_id(&mut self, order_id: OrderId) {
        self.last_order_id = Some(order_id);
    }

    pub fn require_last_order_id(&self) -> HarnessResult<&OrderId> {
        self.last_order_id
            .as_ref()
            .ok_or(HarnessError::MissingState("order id"))
    }

    pub fn last_trade_id(&self) -> Option<&str> {
        self.last_trade_id.as_deref()
    }

    pub fn set_last_trade_id(&mut self, trade_id: impl Into<String>) {
        self.last_trade_id = Some(trade_id.into());
    }

    pub fn current_username(&self) -> Option<&str> {
        self.current_username.as_deref()
    }

    pub fn set_current_username(&mut self, username: impl Into<String>) {
        self.current_username = Some(username.into());
    }
}
