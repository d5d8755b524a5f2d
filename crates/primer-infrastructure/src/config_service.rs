//! Configuration service implementation.
//!
//! Loads the root configuration from the configuration file
//! (~/.config/primer/config.toml) and caches it. When the file provides no
//! backend URL, the `PRIMER_BACKEND_URL` environment variable is consulted
//! before falling back to the default host.

use primer_core::config::{DEFAULT_BACKEND_URL, RootConfig};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Environment variable consulted when config.toml has no backend URL.
pub const BACKEND_URL_ENV: &str = "PRIMER_BACKEND_URL";

/// Partial view of config.toml used to tell "absent" from "set".
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    backend_url: Option<String>,
}

/// Configuration service that loads and caches the root configuration.
///
/// The configuration is loaded lazily on first access and cached to avoid
/// repeated file I/O.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a new ConfigService reading from the default location.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService reading from a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    pub fn get_config(&self) -> RootConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config();

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn load_config(&self) -> RootConfig {
        let file_value = self.read_file_value();
        let env_value = env::var(BACKEND_URL_ENV).ok();

        RootConfig {
            backend_url: resolve_backend_url(file_value, env_value),
        }
    }

    /// Reads backend_url from config.toml, if the file exists and parses.
    fn read_file_value(&self) -> Option<String> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => crate::paths::PrimerPaths::config_file().ok()?,
        };

        let content = std::fs::read_to_string(&path).ok()?;
        match toml::from_str::<RawConfig>(&content) {
            Ok(raw) => raw.backend_url,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring unparsable config file");
                None
            }
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// Priority: config file, then environment, then the built-in default.
/// Empty values are treated as absent.
fn resolve_backend_url(file_value: Option<String>, env_value: Option<String>) -> String {
    file_value
        .filter(|url| !url.trim().is_empty())
        .or(env_value.filter(|url| !url.trim().is_empty()))
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}
