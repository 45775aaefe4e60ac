//! HTTP client for the Crewlist REST API.
//!
//! # Overview
//! One [`ApiClient`] owns the connection pool, the base URL and the token
//! store. Every request flows through the same pipeline: bearer token
//! injection from the store, dispatch with JSON defaults, then failure
//! logging before the outcome reaches the caller. The endpoint modules
//! under [`api`] wrap the documented routes in thin methods and pass
//! request and response bodies through untouched.
//!
//! # Design
//! - Payloads are anything `Serialize`; responses come back as buffered
//!   [`ApiResponse`] values the caller decodes with
//!   [`json`](api::ApiResponse::json).
//! - Signing in does not store the token. Applications write it to the
//!   client's [`TokenStore`] after a successful login and clear it on
//!   logout.
//! - The client is `Clone` and safe to share across tasks; clones reuse
//!   the connection pool and see the same token.

pub mod api;
pub mod config;
pub mod token;

pub use api::{ApiClient, ApiClientBuilder, ApiError, ApiResponse};
pub use config::ClientConfig;
pub use token::{InMemoryTokenStore, KeyringTokenStore, TokenStore};
