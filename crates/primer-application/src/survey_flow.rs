//! Background survey submission flow.
//!
//! A valid session is required before anything touches the network. The
//! user id must already be stored (recorded at sign-up, or resolved from
//! the profile at sign-in); when it is missing the flow fails with an
//! authentication error instead of inventing an identifier.

use crate::form::{NextStep, SubmissionState, failure_message};
use primer_core::profile::{ProfileService, SurveyResponses};
use primer_core::session::SessionStore;
use primer_core::submission::SubmissionStatus;
use primer_core::{PrimerError, Result};
use std::sync::Arc;

/// The survey use case: stores the reader's background with the backend.
pub struct SurveyFlow {
    profiles: Arc<dyn ProfileService>,
    sessions: Arc<dyn SessionStore>,
    state: SubmissionState,
}

impl SurveyFlow {
    pub fn new(profiles: Arc<dyn ProfileService>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            profiles,
            sessions,
            state: SubmissionState::new(),
        }
    }

    /// Current submission status.
    pub fn status(&self) -> SubmissionStatus {
        self.state.status()
    }

    pub async fn submit(&self, survey: &SurveyResponses) -> Result<NextStep> {
        let _guard = self.state.begin()?;

        match self.perform(survey).await {
            Ok(step) => {
                self.state
                    .succeed("Survey submitted successfully! Redirecting...");
                Ok(step)
            }
            Err(err) => {
                self.state.fail(failure_message(
                    "Survey submission",
                    "survey submission",
                    &err,
                ));
                Err(err)
            }
        }
    }

    async fn perform(&self, survey: &SurveyResponses) -> Result<NextStep> {
        let session = self.sessions.load()?;

        let Some(token) = session.bearer_token() else {
            return Err(PrimerError::auth_required(
                "Not authenticated. Please sign in again.",
            ));
        };
        let Some(user_id) = session.user_id else {
            return Err(PrimerError::auth_required(
                "No user id is stored for this session. Please sign in again.",
            ));
        };

        self.profiles.submit_background(token, user_id, survey).await?;
        Ok(NextStep::Home)
    }
}
