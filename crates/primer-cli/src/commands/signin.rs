use anyhow::Result;
use primer_application::auth_flow::{SigninFields, SigninFlow};
use primer_infrastructure::FileSessionStore;
use primer_interaction::BackendClient;
use std::sync::Arc;

pub async fn run(
    backend: &Arc<BackendClient>,
    sessions: &Arc<FileSessionStore>,
    username: String,
    password: String,
) -> Result<()> {
    let flow = SigninFlow::new(backend.clone(), backend.clone(), sessions.clone());
    let result = flow.submit(&SigninFields { username, password }).await;

    if let Some(message) = flow.status().message() {
        println!("{message}");
    }

    match result {
        Ok(_) => Ok(()),
        Err(err) => {
            // Validation failures never reach the flow status.
            if flow.status().message().is_none() {
                eprintln!("{err}");
            }
            std::process::exit(1);
        }
    }
}
