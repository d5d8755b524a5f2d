//! Sign-in and sign-up flows.
//!
//! Both follow the shared form contract: validate locally, guard against
//! overlapping submits, issue exactly one request, and surface the outcome
//! as a one-line status message.

use crate::form::{NextStep, SubmissionState, failure_message};
use primer_core::auth::AuthService;
use primer_core::profile::ProfileService;
use primer_core::session::SessionStore;
use primer_core::submission::SubmissionStatus;
use primer_core::{PrimerError, Result};
use std::sync::Arc;

/// Sign-in form fields.
#[derive(Debug, Clone)]
pub struct SigninFields {
    pub username: String,
    pub password: String,
}

impl SigninFields {
    /// Rejects submission when a required field is empty.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.username.trim().is_empty() {
            missing.push("username".to_string());
        }
        if self.password.is_empty() {
            missing.push("password".to_string());
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(PrimerError::validation(missing))
        }
    }
}

/// The sign-in use case: exchanges credentials for a token and stores it.
pub struct SigninFlow {
    auth: Arc<dyn AuthService>,
    profiles: Arc<dyn ProfileService>,
    sessions: Arc<dyn SessionStore>,
    state: SubmissionState,
}

impl SigninFlow {
    pub fn new(
        auth: Arc<dyn AuthService>,
        profiles: Arc<dyn ProfileService>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            auth,
            profiles,
            sessions,
            state: SubmissionState::new(),
        }
    }

    /// Current submission status.
    pub fn status(&self) -> SubmissionStatus {
        self.state.status()
    }

    /// Submits the form. On success the token is persisted and, for a
    /// returning reader, the user id is refreshed from the profile.
    pub async fn submit(&self, fields: &SigninFields) -> Result<NextStep> {
        fields.validate()?;
        let _guard = self.state.begin()?;

        match self.perform(fields).await {
            Ok(step) => {
                self.state.succeed("Signin successful!");
                Ok(step)
            }
            Err(err) => {
                self.state.fail(failure_message("Signin", "signin", &err));
                Err(err)
            }
        }
    }

    async fn perform(&self, fields: &SigninFields) -> Result<NextStep> {
        let token = self.auth.login(&fields.username, &fields.password).await?;

        let mut session = self.sessions.load().unwrap_or_default();
        if session.user_id.is_none() {
            // Best effort: a fresh account has no profile yet, and the id
            // was already stored at sign-up.
            match self.profiles.current_profile(&token.access_token).await {
                Ok(profile) => session.user_id = Some(profile.user_id),
                Err(err) => tracing::debug!(%err, "could not resolve user id at sign-in"),
            }
        }
        session.access_token = Some(token.access_token);
        self.sessions.save(&session)?;

        Ok(NextStep::Home)
    }
}

/// Sign-up form fields.
#[derive(Debug, Clone)]
pub struct SignupFields {
    pub email: String,
    pub password: String,
}

impl SignupFields {
    /// Rejects submission when a required field is empty.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.email.trim().is_empty() {
            missing.push("email".to_string());
        }
        if self.password.is_empty() {
            missing.push("password".to_string());
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(PrimerError::validation(missing))
        }
    }
}

/// The sign-up use case: registers the account and records the returned
/// user id, then directs the reader to the survey step.
pub struct SignupFlow {
    auth: Arc<dyn AuthService>,
    sessions: Arc<dyn SessionStore>,
    state: SubmissionState,
}

impl SignupFlow {
    pub fn new(auth: Arc<dyn AuthService>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            auth,
            sessions,
            state: SubmissionState::new(),
        }
    }

    /// Current submission status.
    pub fn status(&self) -> SubmissionStatus {
        self.state.status()
    }

    pub async fn submit(&self, fields: &SignupFields) -> Result<NextStep> {
        fields.validate()?;
        let _guard = self.state.begin()?;

        match self.perform(fields).await {
            Ok(step) => {
                self.state.succeed("Signup successful! Redirecting to survey...");
                Ok(step)
            }
            Err(err) => {
                self.state.fail(failure_message("Signup", "signup", &err));
                Err(err)
            }
        }
    }

    async fn perform(&self, fields: &SignupFields) -> Result<NextStep> {
        let user = self.auth.register(&fields.email, &fields.password).await?;

        // The register response is the only place the backend exposes the
        // user id before a survey exists; keep it for the survey flow.
        let mut session = self.sessions.load().unwrap_or_default();
        session.user_id = Some(user.id);
        self.sessions.save(&session)?;

        Ok(NextStep::Survey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        MemorySessionStore, StubAuthService, StubProfileService, sample_profile, sample_token,
        sample_user_id,
    };
    use primer_core::session::{Session, SessionStore};
    use std::sync::atomic::Ordering;

    fn signin_flow(
        auth: &Arc<StubAuthService>,
        profiles: &Arc<StubProfileService>,
        sessions: &Arc<MemorySessionStore>,
    ) -> SigninFlow {
        SigninFlow::new(auth.clone(), profiles.clone(), sessions.clone())
    }

    #[tokio::test]
    async fn test_successful_signin_stores_the_token() {
        let sessions = Arc::new(MemorySessionStore::new());
        let auth = Arc::new(StubAuthService::logins(Ok(sample_token())));
        let profiles = Arc::new(StubProfileService::with_profile(Ok(sample_profile(true))));
        let flow = signin_flow(&auth, &profiles, &sessions);

        let fields = SigninFields {
            username: "reader@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let step = flow.submit(&fields).await.unwrap();

        assert_eq!(step, NextStep::Home);
        assert_eq!(flow.status().message(), Some("Signin successful!"));

        let session = sessions.load().unwrap();
        assert_eq!(session.access_token.as_deref(), Some("T"));
        assert_eq!(session.user_id, Some(sample_user_id()));
    }

    #[tokio::test]
    async fn test_rejected_signin_surfaces_the_detail() {
        let sessions = Arc::new(MemorySessionStore::new());
        let auth = Arc::new(StubAuthService::logins(Err(PrimerError::backend(
            Some(400),
            "Bad credentials",
        ))));
        let profiles = Arc::new(StubProfileService::with_profile(Ok(sample_profile(true))));
        let flow = signin_flow(&auth, &profiles, &sessions);

        let fields = SigninFields {
            username: "reader@example.com".to_string(),
            password: "wrong".to_string(),
        };
        let err = flow.submit(&fields).await.unwrap_err();

        assert!(err.is_backend());
        assert_eq!(
            flow.status().message(),
            Some("Signin failed: Bad credentials")
        );
        assert!(!sessions.load().unwrap().is_authenticated());
    }

    #[tokio::test]
    async fn test_empty_fields_never_reach_the_network() {
        let sessions = Arc::new(MemorySessionStore::new());
        let auth = Arc::new(StubAuthService::logins(Ok(sample_token())));
        let profiles = Arc::new(StubProfileService::with_profile(Ok(sample_profile(true))));
        let flow = signin_flow(&auth, &profiles, &sessions);

        let fields = SigninFields {
            username: String::new(),
            password: String::new(),
        };
        let err = flow.submit(&fields).await.unwrap_err();

        assert!(err.is_validation());
        assert!(flow.status().is_idle());
        assert_eq!(auth.login_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_signin_keeps_a_previously_stored_user_id() {
        let stored = Session {
            access_token: None,
            user_id: Some(sample_user_id()),
        };
        let sessions = Arc::new(MemorySessionStore::with_session(stored));
        let auth = Arc::new(StubAuthService::logins(Ok(sample_token())));
        let profiles = Arc::new(StubProfileService::with_profile(Err(PrimerError::backend(
            Some(404),
            "User background not found",
        ))));
        let flow = signin_flow(&auth, &profiles, &sessions);

        let fields = SigninFields {
            username: "reader@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        flow.submit(&fields).await.unwrap();

        let session = sessions.load().unwrap();
        assert_eq!(session.user_id, Some(sample_user_id()));
        assert!(session.is_authenticated());
        // The id was already known, so no profile lookup happened.
        assert_eq!(profiles.profile_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_signin_survives_an_unresolvable_user_id() {
        let sessions = Arc::new(MemorySessionStore::new());
        let auth = Arc::new(StubAuthService::logins(Ok(sample_token())));
        let profiles = Arc::new(StubProfileService::with_profile(Err(PrimerError::backend(
            Some(404),
            "User background not found",
        ))));
        let flow = signin_flow(&auth, &profiles, &sessions);

        let fields = SigninFields {
            username: "reader@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        flow.submit(&fields).await.unwrap();

        let session = sessions.load().unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.user_id, None);
    }

    #[tokio::test]
    async fn test_successful_signup_records_the_user_id() {
        let sessions = Arc::new(MemorySessionStore::new());
        let auth = StubAuthService::registers(Ok(primer_core::auth::RegisteredUser {
            id: sample_user_id(),
            email: "reader@example.com".to_string(),
        }));
        let flow = SignupFlow::new(Arc::new(auth), sessions.clone());

        let fields = SignupFields {
            email: "reader@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let step = flow.submit(&fields).await.unwrap();

        assert_eq!(step, NextStep::Survey);
        assert_eq!(
            flow.status().message(),
            Some("Signup successful! Redirecting to survey...")
        );
        assert_eq!(sessions.load().unwrap().user_id, Some(sample_user_id()));
    }

    #[tokio::test]
    async fn test_rejected_signup_surfaces_the_detail() {
        let sessions = Arc::new(MemorySessionStore::new());
        let auth = Arc::new(StubAuthService::registers(Err(PrimerError::backend(
            Some(400),
            "REGISTER_USER_ALREADY_EXISTS",
        ))));
        let flow = SignupFlow::new(auth.clone(), sessions);

        let fields = SignupFields {
            email: "reader@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let err = flow.submit(&fields).await.unwrap_err();

        assert!(err.is_backend());
        assert_eq!(
            flow.status().message(),
            Some("Signup failed: REGISTER_USER_ALREADY_EXISTS")
        );
        // One attempt, no retry.
        assert_eq!(auth.register_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_network_failure_uses_the_generic_message() {
        let sessions = Arc::new(MemorySessionStore::new());
        let auth = StubAuthService::registers(Err(PrimerError::network("connection refused")));
        let flow = SignupFlow::new(Arc::new(auth), sessions);

        let fields = SignupFields {
            email: "reader@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let err = flow.submit(&fields).await.unwrap_err();

        assert!(err.is_network());
        assert_eq!(
            flow.status().message(),
            Some("Network error during signup.")
        );
    }
}
