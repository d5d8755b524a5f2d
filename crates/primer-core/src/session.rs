//! Session domain model and persistence seam.
//!
//! A session holds the reader's bearer credential and, once known, their
//! user identifier. It is written by the sign-in flow (token) and the
//! sign-up flow (user id), and read by every authenticated call.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The locally persisted session record.
///
/// Both fields are optional: a fresh sign-up knows the user id before any
/// token exists, and a returning sign-in stores a token before the user id
/// can be resolved. `is_authenticated` is what gates authenticated calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

impl Session {
    /// Creates a session holding only a bearer token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            user_id: None,
        }
    }

    /// True when a bearer token is present.
    pub fn is_authenticated(&self) -> bool {
        self.access_token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }

    /// The bearer token, if one is stored.
    pub fn bearer_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|token| !token.is_empty())
    }
}

/// Persistence seam for the session record.
///
/// Injected into every component that needs authentication state; there are
/// no ambient lookups. `load` on an empty store yields the default session.
pub trait SessionStore: Send + Sync {
    /// Loads the stored session, or the empty session if none exists.
    fn load(&self) -> Result<Session>;

    /// Persists the session.
    fn save(&self, session: &Session) -> Result<()>;

    /// Removes any stored session.
    fn clear(&self) -> Result<()>;
}
