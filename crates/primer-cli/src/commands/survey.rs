use anyhow::Result;
use primer_application::form::{NextStep, redirect_on_failure};
use primer_application::survey_flow::SurveyFlow;
use primer_core::profile::SurveyResponses;
use primer_infrastructure::FileSessionStore;
use primer_interaction::BackendClient;
use std::sync::Arc;

pub async fn run(
    backend: &Arc<BackendClient>,
    sessions: &Arc<FileSessionStore>,
    survey: SurveyResponses,
) -> Result<()> {
    let flow = SurveyFlow::new(backend.clone(), sessions.clone());
    let result = flow.submit(&survey).await;

    if let Some(message) = flow.status().message() {
        println!("{message}");
    }

    match result {
        Ok(_) => Ok(()),
        Err(err) => {
            if redirect_on_failure(&err) == Some(NextStep::Signin) {
                println!("Run `primer signin` first.");
            }
            std::process::exit(1);
        }
    }
}
