//! Application configuration model.

use serde::{Deserialize, Serialize};

/// Backend host used when neither the config file nor the environment
/// provides one.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Root configuration loaded from config.toml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootConfig {
    /// Base URL of the handbook backend.
    pub backend_url: String,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}
