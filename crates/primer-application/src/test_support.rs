//! Hand-rolled service stubs shared by the use-case tests.

use async_trait::async_trait;
use chrono::Utc;
use primer_core::Result;
use primer_core::auth::{AccessToken, AuthService, RegisteredUser};
use primer_core::personalize::PersonalizeService;
use primer_core::profile::{ProfileService, SurveyResponses, UserProfile};
use primer_core::session::{Session, SessionStore};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

pub fn sample_token() -> AccessToken {
    AccessToken {
        access_token: "T".to_string(),
        token_type: "bearer".to_string(),
    }
}

pub fn sample_user_id() -> Uuid {
    "a1b2c3d4-e5f6-7890-1234-567890abcdef".parse().unwrap()
}

pub fn sample_profile(completed: bool) -> UserProfile {
    UserProfile {
        id: 1,
        user_id: sample_user_id(),
        role: Some("Student".to_string()),
        programming_level: if completed {
            Some("Beginner".to_string())
        } else {
            Some(String::new())
        },
        hardware_specs: None,
        software_experience: None,
        interest_field: Some("Robotics".to_string()),
        preferred_language: Some("English".to_string()),
        goals: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_survey() -> SurveyResponses {
    use primer_core::profile::{InterestField, PreferredLanguage, ProgrammingLevel, Role};
    SurveyResponses {
        role: Role::Student,
        programming_level: ProgrammingLevel::Beginner,
        interest_field: InterestField::Robotics,
        preferred_language: PreferredLanguage::English,
        hardware_specs: None,
        software_experience: None,
        goals: None,
    }
}

/// In-memory session store.
#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Session> {
        Ok(self.session.lock().unwrap().clone().unwrap_or_default())
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}

/// Auth service returning canned results and counting calls.
pub struct StubAuthService {
    pub login_result: Result<AccessToken>,
    pub register_result: Result<RegisteredUser>,
    pub login_calls: AtomicUsize,
    pub register_calls: AtomicUsize,
}

impl StubAuthService {
    pub fn logins(login_result: Result<AccessToken>) -> Self {
        Self {
            login_result,
            register_result: Ok(RegisteredUser {
                id: sample_user_id(),
                email: "reader@example.com".to_string(),
            }),
            login_calls: AtomicUsize::new(0),
            register_calls: AtomicUsize::new(0),
        }
    }

    pub fn registers(register_result: Result<RegisteredUser>) -> Self {
        Self {
            login_result: Ok(sample_token()),
            register_result,
            login_calls: AtomicUsize::new(0),
            register_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AuthService for StubAuthService {
    async fn login(&self, _username: &str, _password: &str) -> Result<AccessToken> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.login_result.clone()
    }

    async fn register(&self, _email: &str, _password: &str) -> Result<RegisteredUser> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        self.register_result.clone()
    }
}

/// Profile service returning canned results and recording submissions.
pub struct StubProfileService {
    pub profile_result: Result<UserProfile>,
    pub profile_calls: AtomicUsize,
    pub submitted: Mutex<Vec<Uuid>>,
}

impl StubProfileService {
    pub fn with_profile(profile_result: Result<UserProfile>) -> Self {
        Self {
            profile_result,
            profile_calls: AtomicUsize::new(0),
            submitted: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ProfileService for StubProfileService {
    async fn current_profile(&self, _token: &str) -> Result<UserProfile> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.profile_result.clone()
    }

    async fn submit_background(
        &self,
        _token: &str,
        user_id: Uuid,
        _survey: &SurveyResponses,
    ) -> Result<UserProfile> {
        self.submitted.lock().unwrap().push(user_id);
        self.profile_result.clone()
    }
}

/// Personalize service returning a canned result.
pub struct StubPersonalizeService {
    pub result: Result<String>,
    pub calls: AtomicUsize,
}

impl StubPersonalizeService {
    pub fn returning(result: Result<String>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PersonalizeService for StubPersonalizeService {
    async fn personalize_chapter(
        &self,
        _token: &str,
        _chapter_key: &str,
        _content: &str,
    ) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
