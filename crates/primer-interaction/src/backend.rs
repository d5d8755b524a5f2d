//! Shared HTTP client for the handbook backend.
//!
//! Every endpoint goes through one `BackendClient` holding the configured
//! base URL, so no component carries its own copy of the host.

use primer_core::PrimerError;
use primer_core::config::RootConfig;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

/// Client for the handbook backend REST API.
///
/// Cheap to clone; all service trait implementations live on this type.
#[derive(Clone)]
pub struct BackendClient {
    pub(crate) http: Client,
    base_url: String,
}

impl BackendClient {
    /// Creates a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client from the loaded configuration.
    pub fn from_config(config: &RootConfig) -> Self {
        Self::new(config.backend_url.clone())
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins an endpoint path onto the base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Formats the Authorization header value for a bearer token.
    pub(crate) fn bearer(token: &str) -> String {
        format!("Bearer {token}")
    }

    /// Converts a non-2xx response into a backend error, extracting the
    /// JSON `detail` field when the body carries one.
    pub(crate) async fn error_from_response(response: Response) -> PrimerError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        map_backend_error(status, body)
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    detail: String,
}

fn map_backend_error(status: StatusCode, body: String) -> PrimerError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.detail)
        .unwrap_or_else(|_| body.clone());

    PrimerError::backend(Some(status.as_u16()), message)
}

/// Maps a response-body decode failure.
pub(crate) fn decode_error(err: reqwest::Error) -> PrimerError {
    PrimerError::Serialization {
        format: "JSON".to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_field_is_extracted() {
        let err = map_backend_error(
            StatusCode::BAD_REQUEST,
            r#"{"detail": "Bad credentials"}"#.to_string(),
        );

        assert_eq!(err.backend_status(), Some(400));
        assert!(matches!(
            err,
            PrimerError::Backend { message, .. } if message == "Bad credentials"
        ));
    }

    #[test]
    fn test_non_json_body_is_kept_verbatim() {
        let err = map_backend_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "upstream exploded".to_string(),
        );

        assert!(matches!(
            err,
            PrimerError::Backend { status: Some(500), message } if message == "upstream exploded"
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = BackendClient::new("http://localhost:8000/");
        assert_eq!(client.url("/auth/me"), "http://localhost:8000/auth/me");
    }
}
