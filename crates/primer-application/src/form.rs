//! Shared submission machinery for the form flows.

use primer_core::submission::SubmissionStatus;
use primer_core::{PrimerError, Result};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Where the user is taken after a flow completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// Back to the handbook home.
    Home,
    /// On to the background survey.
    Survey,
    /// To the sign-in step.
    Signin,
}

/// The redirect a failed flow asks for, if any.
pub fn redirect_on_failure(err: &PrimerError) -> Option<NextStep> {
    err.is_auth_required().then_some(NextStep::Signin)
}

/// Submission status plus an in-flight guard, one per flow instance.
///
/// The guard rejects a second submit while one is running, so rapid
/// re-triggers cannot issue duplicate requests.
#[derive(Default)]
pub struct SubmissionState {
    status: Mutex<SubmissionStatus>,
    in_flight: AtomicBool,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of the current status.
    pub fn status(&self) -> SubmissionStatus {
        self.status.lock().unwrap().clone()
    }

    /// Marks a submission as started, clearing the prior message.
    ///
    /// Returns `AlreadyInFlight` if another submission is running. The
    /// returned guard releases the in-flight flag when dropped, so a
    /// cancelled future cannot wedge the flow.
    pub(crate) fn begin(&self) -> Result<InFlightGuard<'_>> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(PrimerError::AlreadyInFlight);
        }

        *self.status.lock().unwrap() = SubmissionStatus::InFlight;
        Ok(InFlightGuard { state: self })
    }

    pub(crate) fn succeed(&self, message: impl Into<String>) {
        *self.status.lock().unwrap() = SubmissionStatus::Succeeded {
            message: message.into(),
        };
    }

    pub(crate) fn fail(&self, message: impl Into<String>) {
        *self.status.lock().unwrap() = SubmissionStatus::Failed {
            message: message.into(),
        };
    }
}

pub(crate) struct InFlightGuard<'a> {
    state: &'a SubmissionState,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.state.in_flight.store(false, Ordering::SeqCst);
    }
}

/// Renders an error as the one-line status message the forms show.
///
/// `action` opens the backend-rejection message ("Signin failed: ...");
/// `during` names the operation in the generic network message.
pub(crate) fn failure_message(action: &str, during: &str, err: &PrimerError) -> String {
    match err {
        PrimerError::Backend { message, .. } => format!("{action} failed: {message}"),
        PrimerError::Network(_) => format!("Network error during {during}."),
        PrimerError::AuthRequired(message) => format!("Error: {message}"),
        other => format!("{action} failed: {other}"),
    }
}
