//! Personalization gate.
//!
//! Decides whether the signed-in reader may request personalized content
//! (their survey profile must be complete) and performs the request. The
//! gate is scoped to one chapter at a time; switching chapters bumps an
//! epoch counter, and any check still in flight for the previous chapter
//! is discarded when it resolves.

use crate::form::failure_message;
use primer_core::personalize::PersonalizeService;
use primer_core::profile::ProfileService;
use primer_core::session::SessionStore;
use primer_core::{PrimerError, Result};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Shown when the reader has not completed the survey yet.
pub const SURVEY_REQUIRED_HINT: &str =
    "Please complete your background survey to enable personalization.";

/// A point-in-time view of the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateSnapshot {
    pub chapter: Option<String>,
    pub eligible: bool,
    pub loading: bool,
    pub message: String,
}

#[derive(Default)]
struct GateState {
    chapter: Option<String>,
    eligible: bool,
    message: String,
}

/// Gate over the personalize action for the current chapter.
pub struct PersonalizationGate {
    profiles: Arc<dyn ProfileService>,
    personalizer: Arc<dyn PersonalizeService>,
    sessions: Arc<dyn SessionStore>,
    /// Bumped on every chapter change; in-flight results carry the epoch
    /// they started under and are dropped if it moved.
    epoch: AtomicU64,
    loading: AtomicBool,
    state: Mutex<GateState>,
}

impl PersonalizationGate {
    pub fn new(
        profiles: Arc<dyn ProfileService>,
        personalizer: Arc<dyn PersonalizeService>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            profiles,
            personalizer,
            sessions,
            epoch: AtomicU64::new(0),
            loading: AtomicBool::new(false),
            state: Mutex::new(GateState::default()),
        }
    }

    /// Points the gate at a chapter, resetting eligibility state and
    /// superseding any check still in flight.
    pub fn set_chapter(&self, key: impl Into<String>) {
        let mut state = self.state.lock().unwrap();
        state.chapter = Some(key.into());
        state.eligible = false;
        state.message.clear();
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    /// A snapshot of the gate's current state.
    pub fn snapshot(&self) -> GateSnapshot {
        let state = self.state.lock().unwrap();
        GateSnapshot {
            chapter: state.chapter.clone(),
            eligible: state.eligible,
            loading: self.loading.load(Ordering::SeqCst),
            message: state.message.clone(),
        }
    }

    /// Whether the personalize action is currently actionable.
    pub fn can_personalize(&self) -> bool {
        let snapshot = self.snapshot();
        snapshot.eligible && !snapshot.loading
    }

    /// Re-derives eligibility from the stored session and the backend
    /// profile. Without a token this is decided locally; no request is
    /// made. Returns the eligibility the gate now reports.
    pub async fn refresh_eligibility(&self) -> Result<bool> {
        let epoch = self.epoch.load(Ordering::SeqCst);

        let session = self.sessions.load().unwrap_or_default();
        let Some(token) = session.bearer_token() else {
            return Ok(self.apply_eligibility(epoch, false));
        };

        let eligible = match self.profiles.current_profile(token).await {
            Ok(profile) => profile.survey_completed(),
            Err(err) => {
                tracing::debug!(%err, "eligibility check failed");
                false
            }
        };

        Ok(self.apply_eligibility(epoch, eligible))
    }

    /// Applies a fetched result unless the chapter changed while the check
    /// was in flight; a superseded result is discarded.
    fn apply_eligibility(&self, epoch: u64, eligible: bool) -> bool {
        let mut state = self.state.lock().unwrap();
        if self.epoch.load(Ordering::SeqCst) != epoch {
            tracing::debug!("discarding eligibility result for a superseded chapter");
            return state.eligible;
        }
        state.eligible = eligible;
        state.eligible
    }

    /// Requests personalized content for a chapter.
    ///
    /// Requires a session token; the displayed content is left to the
    /// caller, so a failure changes nothing. Only one request runs at a
    /// time.
    pub async fn personalize(&self, chapter_key: &str, content: &str) -> Result<String> {
        if self.loading.swap(true, Ordering::SeqCst) {
            return Err(PrimerError::AlreadyInFlight);
        }
        let _guard = LoadingGuard(&self.loading);

        let epoch = self.epoch.load(Ordering::SeqCst);
        let result = self.perform(chapter_key, content).await;

        match &result {
            Ok(_) => self.set_message(epoch, "Content personalized successfully!"),
            Err(err) => self.set_message(
                epoch,
                failure_message("Personalization", "personalization", err),
            ),
        }

        result
    }

    async fn perform(&self, chapter_key: &str, content: &str) -> Result<String> {
        let session = self.sessions.load().unwrap_or_default();
        let Some(token) = session.bearer_token() else {
            return Err(PrimerError::auth_required("Not authenticated."));
        };

        self.personalizer
            .personalize_chapter(token, chapter_key, content)
            .await
    }

    fn set_message(&self, epoch: u64, message: impl Into<String>) {
        let mut state = self.state.lock().unwrap();
        if self.epoch.load(Ordering::SeqCst) == epoch {
            state.message = message.into();
        }
    }
}

struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
