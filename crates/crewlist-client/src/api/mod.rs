//! REST API client module for the Crewlist backend.
//!
//! This module provides the `ApiClient` for talking to the Crewlist API:
//! a shared transport with JSON defaults, bearer token injection and
//! failure logging, plus thin wrappers for the auth, project and list
//! endpoints.
//!
//! The API uses bearer token authentication; the token comes from
//! `POST /auth/login` and lives in the client's token store.

pub mod auth;
pub mod client;
pub mod error;
pub mod interceptor;
pub mod lists;
pub mod projects;
pub mod response;

pub use client::{ApiClient, ApiClientBuilder, RequestBuilder};
pub use error::ApiError;
pub use interceptor::{BearerAuth, ErrorLogger, RequestInterceptor, ResponseObserver};
pub use response::ApiResponse;
