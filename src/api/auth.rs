//! Auth sub-client: login, logout and the current user.
//!
//! Each call maps one-to-one onto an endpoint. Nothing is validated or
//! remembered locally; the caller decides what a response means.

use crate::api::client::TradeApiClient;
use crate::api::error::ApiResult;
use crate::api::response::ApiResponse;
use crate::api::types::LoginCredentials;

pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const CURRENT_USER_PATH: &str = "/auth/me";

/// Sub-client for authentication endpoints.
pub struct Auth<'a> {
    pub(crate) client: &'a TradeApiClient,
}

impl<'a> Auth<'a> {
    /// `POST /auth/login` with the given credentials.
    pub async fn login(&self, credentials: &LoginCredentials) -> ApiResult<ApiResponse> {
        let body = serde_json::to_value(credentials)?;
        self.client.post(LOGIN_PATH, Some(body), None).await
    }

    /// Build credentials from a username and password, then [`Auth::login`].
    pub async fn login_with_password(
        &self,
        username: &str,
        password: &str,
    ) -> ApiResult<ApiResponse> {
        self.login(&LoginCredentials::new(username, password)).await
    }

    /// `POST /auth/logout` with no body.
    pub async fn logout(&self) -> ApiResult<ApiResponse> {
        self.client.post(LOGOUT_PATH, None, None).await
    }

    /// `GET /auth/me`.
    pub async fn current_user(&self) -> ApiResult<ApiResponse> {
        self.client.get(CURRENT_USER_PATH, None).await
    }
}
