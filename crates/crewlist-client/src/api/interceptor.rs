//! Request and response hooks.
//!
//! Every outgoing request passes through the registered
//! [`RequestInterceptor`]s in order before it is sent, and every outcome
//! passes through the [`ResponseObserver`]s in order before it reaches the
//! caller. The client wires in [`BearerAuth`] and [`ErrorLogger`] by
//! default; applications append their own hooks through the builder.

use std::sync::Arc;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Request;
use tracing::error;

use super::error::ApiError;
use super::response::ApiResponse;
use crate::token::TokenStore;

/// Hook that runs on every outgoing request before it is sent.
pub trait RequestInterceptor: Send + Sync {
    fn intercept(&self, request: Request) -> Result<Request, ApiError>;
}

/// Hook that runs on every completed request, success or failure.
///
/// Observers may replace the outcome; the built-in ones pass it through
/// untouched.
pub trait ResponseObserver: Send + Sync {
    fn observe(&self, outcome: Result<ApiResponse, ApiError>) -> Result<ApiResponse, ApiError>;
}

/// Attaches `Authorization: Bearer <token>` when the token store holds one.
///
/// Requests go out untouched when no token is stored, so unauthenticated
/// endpoints like login keep working before sign-in.
pub struct BearerAuth {
    store: Arc<dyn TokenStore>,
}

impl BearerAuth {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }
}

impl RequestInterceptor for BearerAuth {
    fn intercept(&self, mut request: Request) -> Result<Request, ApiError> {
        if let Some(token) = self.store.get() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(ApiError::InvalidToken)?;
            request.headers_mut().insert(AUTHORIZATION, value);
        }
        Ok(request)
    }
}

/// Logs each failed request once, then hands the failure on unchanged.
#[derive(Default)]
pub struct ErrorLogger;

impl ResponseObserver for ErrorLogger {
    fn observe(&self, outcome: Result<ApiResponse, ApiError>) -> Result<ApiResponse, ApiError> {
        if let Err(err) = &outcome {
            error!(error = %err, "API request failed");
        }
        outcome
    }
}
