use reqwest::header::InvalidHeaderValue;
use reqwest::StatusCode;
use thiserror::Error;

use super::response::ApiResponse;

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Truncate a response body to avoid logging excessive data
fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        body.to_string()
    } else {
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..end],
            body.len()
        )
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-success status. The full response is
    /// preserved so callers can inspect the status, headers and body.
    #[error("Request failed with status {}: {}", .0.status(), truncate_body(&.0.text()))]
    Status(Box<ApiResponse>),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Stored token is not a valid bearer credential")]
    InvalidToken(#[source] InvalidHeaderValue),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status attached to this error, if the request got far enough to
    /// produce one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status(response) => Some(response.status()),
            ApiError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// The buffered backend response, when the failure was an error status
    /// rather than a transport problem.
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            ApiError::Status(response) => Some(response),
            _ => None,
        }
    }
}
