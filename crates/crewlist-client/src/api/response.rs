use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// A fully buffered backend response.
///
/// The transport reads the body eagerly, so observers and error values can
/// hold onto a response without keeping the connection open. Cloning copies
/// the body bytes.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ApiResponse {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body decoded as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn json_decodes_the_buffered_body() {
        let response = ApiResponse::new(
            StatusCode::OK,
            HeaderMap::new(),
            br#"{"id": 7, "name": "Provisions"}"#.to_vec(),
        );

        let value: Value = response.json().unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["name"], "Provisions");
    }

    #[test]
    fn json_reports_malformed_bodies_as_decode_errors() {
        let response = ApiResponse::new(StatusCode::OK, HeaderMap::new(), b"not json".to_vec());

        let err = response.json::<Value>().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn text_replaces_invalid_utf8() {
        let response = ApiResponse::new(StatusCode::OK, HeaderMap::new(), vec![0xff, 0xfe]);
        assert!(!response.text().is_empty());
    }
}
