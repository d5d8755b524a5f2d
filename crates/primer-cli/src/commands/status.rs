use anyhow::Result;
use primer_application::gate::{PersonalizationGate, SURVEY_REQUIRED_HINT};
use primer_core::session::SessionStore;
use primer_infrastructure::FileSessionStore;
use primer_interaction::BackendClient;
use std::sync::Arc;

pub async fn run(backend: &Arc<BackendClient>, sessions: &Arc<FileSessionStore>) -> Result<()> {
    let gate = PersonalizationGate::new(backend.clone(), backend.clone(), sessions.clone());

    if gate.refresh_eligibility().await? {
        println!("Personalization is available for your profile.");
    } else if sessions.load()?.is_authenticated() {
        println!("{SURVEY_REQUIRED_HINT}");
    } else {
        println!("Not signed in. Run `primer signin` first.");
    }

    Ok(())
}
