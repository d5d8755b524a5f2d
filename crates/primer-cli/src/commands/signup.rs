use anyhow::Result;
use primer_application::auth_flow::{SignupFields, SignupFlow};
use primer_infrastructure::FileSessionStore;
use primer_interaction::BackendClient;
use std::sync::Arc;

pub async fn run(
    backend: &Arc<BackendClient>,
    sessions: &Arc<FileSessionStore>,
    email: String,
    password: String,
) -> Result<()> {
    let flow = SignupFlow::new(backend.clone(), sessions.clone());
    let result = flow.submit(&SignupFields { email, password }).await;

    if let Some(message) = flow.status().message() {
        println!("{message}");
    }

    match result {
        Ok(_) => {
            println!("Next: `primer signin`, then `primer survey` to complete your background.");
            Ok(())
        }
        Err(err) => {
            if flow.status().message().is_none() {
                eprintln!("{err}");
            }
            std::process::exit(1);
        }
    }
}
