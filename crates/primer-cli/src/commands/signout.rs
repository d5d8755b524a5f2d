use anyhow::Result;
use primer_core::session::SessionStore;
use primer_infrastructure::FileSessionStore;
use std::sync::Arc;

pub fn run(sessions: &Arc<FileSessionStore>) -> Result<()> {
    sessions.clear()?;
    println!("Signed out. Session cleared.");
    Ok(())
}
