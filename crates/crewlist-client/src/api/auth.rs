//! Authentication endpoints.

use reqwest::Method;
use serde::Serialize;

use super::client::ApiClient;
use super::error::ApiError;
use super::response::ApiResponse;

impl ApiClient {
    /// `POST /auth/login` with the given credentials.
    ///
    /// On success the body carries the bearer token. The token is not
    /// stored automatically; write it to
    /// [`token_store`](ApiClient::token_store) to authenticate later
    /// requests.
    pub async fn login<B>(&self, credentials: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.post("/auth/login", credentials).await
    }

    /// `POST /auth/register` with the new account data.
    pub async fn register<B>(&self, user_data: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.post("/auth/register", user_data).await
    }

    /// `POST /auth/logout`. Sent without a body.
    pub async fn logout(&self) -> Result<ApiResponse, ApiError> {
        self.request(Method::POST, "/auth/logout").send().await
    }

    /// `GET /auth/profile` for the authenticated user.
    pub async fn fetch_profile(&self) -> Result<ApiResponse, ApiError> {
        self.get("/auth/profile").await
    }

    /// `POST /auth/refresh` to exchange the current token for a fresh one.
    pub async fn refresh_token(&self) -> Result<ApiResponse, ApiError> {
        self.request(Method::POST, "/auth/refresh").send().await
    }
}
