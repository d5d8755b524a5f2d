//! File-backed session persistence.
//!
//! The session is a single pretty-printed JSON file under the Primer config
//! directory. Loading a missing file yields the empty session; `clear`
//! removes the file.

use crate::paths::PrimerPaths;
use primer_core::Result;
use primer_core::session::{Session, SessionStore};
use std::fs;
use std::path::PathBuf;

/// `SessionStore` implementation over `session.json`.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store at the default location (~/.config/primer/session.json).
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn new() -> Result<Self> {
        let path = PrimerPaths::session_file()?;
        Ok(Self { path })
    }

    /// Creates a store at a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Session> {
        if !self.path.exists() {
            return Ok(Session::default());
        }

        let json = fs::read_to_string(&self.path)?;
        let session = serde_json::from_str(&json)?;
        Ok(session)
    }

    fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
