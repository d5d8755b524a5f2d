//! Authentication service seam.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The bearer credential returned at sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

/// The account record returned at sign-up.
///
/// The backend returns more fields; only the ones the client uses are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub email: String,
}

/// Backend authentication operations.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchanges credentials for a bearer token.
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken>;

    /// Registers a new reader account.
    async fn register(&self, email: &str, password: &str) -> Result<RegisteredUser>;
}
