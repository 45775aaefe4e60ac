//! Client configuration.
//!
//! Configuration is environment-provided: `API_BASE_URL` and `API_TIMEOUT`
//! override the compiled-in defaults. There is no config file; applications
//! that want one can build a `ClientConfig` by hand and pass it to
//! [`ApiClient::new`](crate::ApiClient::new).

use std::time::Duration;

use anyhow::{Context, Result};

/// Base endpoint used when `API_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Whole-request timeout in milliseconds used when `API_TIMEOUT` is unset.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Environment variable overriding the base URL
const ENV_BASE_URL: &str = "API_BASE_URL";

/// Environment variable overriding the timeout, in milliseconds (`0` disables it)
const ENV_TIMEOUT: &str = "API_TIMEOUT";

/// Connection settings for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is joined onto. A trailing slash is
    /// tolerated.
    pub base_url: String,
    /// Whole-request timeout enforced by the transport. A zero duration
    /// disables the deadline entirely.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    /// Read the configuration from the environment, falling back to the
    /// defaults for anything unset. A present but malformed `API_TIMEOUT`
    /// is an error rather than a silent default.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = match std::env::var(ENV_TIMEOUT) {
            Ok(raw) => {
                let ms: u64 = raw.parse().with_context(|| {
                    format!("{ENV_TIMEOUT} must be a millisecond count, got {raw:?}")
                })?;
                Duration::from_millis(ms)
            }
            Err(_) => Duration::from_millis(DEFAULT_TIMEOUT_MS),
        };

        Ok(Self { base_url, timeout })
    }
}
