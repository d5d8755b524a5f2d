//! Authentication endpoints.
//!
//! Sign-in is the one endpoint that speaks form-urlencoded (the backend's
//! JWT login contract); everything else is JSON.

use crate::backend::{BackendClient, decode_error};
use async_trait::async_trait;
use primer_core::Result;
use primer_core::auth::{AccessToken, AuthService, RegisteredUser};
use serde::Serialize;

#[async_trait]
impl AuthService for BackendClient {
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken> {
        let response = self
            .http
            .post(self.url("/auth/jwt/login"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let token: AccessToken = response.json().await.map_err(decode_error)?;
        tracing::debug!("login succeeded");
        Ok(token)
    }

    async fn register(&self, email: &str, password: &str) -> Result<RegisteredUser> {
        let body = RegisterRequest { email, password };

        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let user: RegisteredUser = response.json().await.map_err(decode_error)?;
        tracing::debug!(user_id = %user.id, "registration succeeded");
        Ok(user)
    }
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_shape() {
        let body = RegisterRequest {
            email: "reader@example.com",
            password: "hunter2",
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["email"], "reader@example.com");
        assert_eq!(json["password"], "hunter2");
    }

    #[test]
    fn test_login_response_shape() {
        let json = r#"{"access_token": "T", "token_type": "bearer"}"#;
        let token: AccessToken = serde_json::from_str(json).unwrap();

        assert_eq!(token.access_token, "T");
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn test_register_response_ignores_extra_fields() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "email": "reader@example.com",
            "is_active": true,
            "is_superuser": false,
            "is_verified": false
        }"#;
        let user: RegisteredUser = serde_json::from_str(json).unwrap();

        assert_eq!(user.email, "reader@example.com");
    }
}
