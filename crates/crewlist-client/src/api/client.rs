//! HTTP transport for communicating with the Crewlist REST API.
//!
//! This module provides the `ApiClient` struct the endpoint services are
//! built on: one shared connection pool with JSON defaults, and the
//! interceptor pipeline that injects credentials and reports failures.

use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client, Method};
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::token::{InMemoryTokenStore, TokenStore};

use super::error::ApiError;
use super::interceptor::{BearerAuth, ErrorLogger, RequestInterceptor, ResponseObserver};
use super::response::ApiResponse;

/// Client version reported in the User-Agent header
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the Crewlist backend.
///
/// Cloning is cheap: clones share the connection pool and see the same
/// token store.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token_store: Arc<dyn TokenStore>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_observers: Vec<Arc<dyn ResponseObserver>>,
}

impl ApiClient {
    /// Create a client with the default pipeline: bearer auth from an
    /// in-memory token store, failures logged once.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Create a client configured from `API_BASE_URL` and `API_TIMEOUT`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The token store backing the auth interceptor. Write the token here
    /// after login and clear it on logout.
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.token_store
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ===== Request building =====

    /// Start a request against an API path. Paths are given with a leading
    /// slash and are joined onto the configured base URL.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder<'_> {
        RequestBuilder {
            client: self,
            inner: self.client.request(method, self.endpoint_url(path)),
        }
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.request(Method::GET, path).send().await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path).json(body).send().await
    }

    pub async fn put<B>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path).json(body).send().await
    }

    pub async fn patch<B>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::PATCH, path).json(body).send().await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.request(Method::DELETE, path).send().await
    }

    /// `POST` a multipart form. The form's boundary content type replaces
    /// the JSON default for this request only.
    pub async fn post_form_data(&self, path: &str, form: Form) -> Result<ApiResponse, ApiError> {
        self.request(Method::POST, path).multipart(form).send().await
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    // ===== Pipeline =====

    async fn execute(&self, builder: reqwest::RequestBuilder) -> Result<ApiResponse, ApiError> {
        let mut outcome = self.dispatch(builder).await;
        for observer in &self.response_observers {
            outcome = observer.observe(outcome);
        }
        outcome
    }

    async fn dispatch(&self, builder: reqwest::RequestBuilder) -> Result<ApiResponse, ApiError> {
        let mut request = builder.build()?;
        for interceptor in &self.request_interceptors {
            request = interceptor.intercept(request)?;
        }

        debug!(method = %request.method(), url = %request.url(), "Sending request");

        let response = self.client.execute(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        let response = ApiResponse::new(status, headers, body);

        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status(Box::new(response)))
        }
    }
}

/// A single API request under construction.
///
/// Created by [`ApiClient::request`] and the verb helpers. Nothing goes on
/// the wire until [`send`](RequestBuilder::send).
#[must_use = "requests are not sent until `send` is called"]
pub struct RequestBuilder<'a> {
    client: &'a ApiClient,
    inner: reqwest::RequestBuilder,
}

impl RequestBuilder<'_> {
    /// Set a header on this request, overriding any client default.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.inner = self.inner.header(name, value);
        self
    }

    /// Append query parameters serialized as `application/x-www-form-urlencoded`.
    pub fn query<T>(mut self, params: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        self.inner = self.inner.query(params);
        self
    }

    /// Attach a JSON body.
    pub fn json<B>(mut self, body: &B) -> Self
    where
        B: Serialize + ?Sized,
    {
        self.inner = self.inner.json(body);
        self
    }

    /// Attach a multipart form body.
    pub fn multipart(mut self, form: Form) -> Self {
        self.inner = self.inner.multipart(form);
        self
    }

    /// Send the request through the interceptor pipeline.
    pub async fn send(self) -> Result<ApiResponse, ApiError> {
        self.client.execute(self.inner).await
    }
}

/// Builder for [`ApiClient`].
///
/// Hooks registered here run after the built-in ones, in registration
/// order: bearer auth before custom request interceptors, the error logger
/// before custom response observers.
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ClientConfig>,
    token_store: Option<Arc<dyn TokenStore>>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_observers: Vec<Arc<dyn ResponseObserver>>,
}

impl ApiClientBuilder {
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the default in-memory token store.
    pub fn token_store(mut self, store: impl TokenStore + 'static) -> Self {
        self.token_store = Some(Arc::new(store));
        self
    }

    /// Append a hook that runs on every outgoing request.
    pub fn request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request_interceptors.push(Arc::new(interceptor));
        self
    }

    /// Append a hook that runs on every completed request.
    pub fn response_observer(mut self, observer: impl ResponseObserver + 'static) -> Self {
        self.response_observers.push(Arc::new(observer));
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let config = self.config.unwrap_or_default();
        let token_store = self
            .token_store
            .unwrap_or_else(|| Arc::new(InMemoryTokenStore::new()));

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_str(&format!("crewlist-client/{VERSION}"))
                .unwrap_or_else(|_| HeaderValue::from_static("crewlist-client")),
        );

        // A zero timeout means no deadline at all.
        let mut http = Client::builder().default_headers(headers);
        if !config.timeout.is_zero() {
            http = http.timeout(config.timeout);
        }
        let client = http.build().context("Failed to build HTTP client")?;

        let mut request_interceptors: Vec<Arc<dyn RequestInterceptor>> =
            vec![Arc::new(BearerAuth::new(token_store.clone()))];
        request_interceptors.extend(self.request_interceptors);

        let mut response_observers: Vec<Arc<dyn ResponseObserver>> = vec![Arc::new(ErrorLogger)];
        response_observers.extend(self.response_observers);

        Ok(ApiClient {
            client,
            base_url: config.base_url,
            token_store,
            request_interceptors,
            response_observers,
        })
    }
}
