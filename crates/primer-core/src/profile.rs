//! Reader profile domain model.
//!
//! The profile mirrors the backend's background record for a reader. The
//! three fields `role`, `programming_level`, and `interest_field` decide
//! whether the reader is eligible for personalized content.

use crate::error::{PrimerError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The reader's background record as the backend returns it.
///
/// All survey fields are optional on the wire; an entry exists as soon as
/// the reader has submitted the survey once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub user_id: Uuid,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub programming_level: Option<String>,
    #[serde(default)]
    pub hardware_specs: Option<String>,
    #[serde(default)]
    pub software_experience: Option<String>,
    #[serde(default)]
    pub interest_field: Option<String>,
    #[serde(default)]
    pub preferred_language: Option<String>,
    #[serde(default)]
    pub goals: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// True when the profile carries the minimum fields personalization
    /// needs: role, programming level, and field of interest, all non-empty.
    pub fn survey_completed(&self) -> bool {
        filled(&self.role) && filled(&self.programming_level) && filled(&self.interest_field)
    }
}

fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// The reader's current role, one of the survey's fixed options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Student,
    Developer,
    Engineer,
    Beginner,
    Researcher,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Student => "Student",
            Role::Developer => "Developer",
            Role::Engineer => "Engineer",
            Role::Beginner => "Beginner",
            Role::Researcher => "Researcher",
        };
        f.write_str(label)
    }
}

impl FromStr for Role {
    type Err = PrimerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Student" => Ok(Role::Student),
            "Developer" => Ok(Role::Developer),
            "Engineer" => Ok(Role::Engineer),
            "Beginner" => Ok(Role::Beginner),
            "Researcher" => Ok(Role::Researcher),
            other => Err(PrimerError::config(format!("Unknown role: '{other}'"))),
        }
    }
}

/// Programming experience level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgrammingLevel {
    None,
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for ProgrammingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProgrammingLevel::None => "None",
            ProgrammingLevel::Beginner => "Beginner",
            ProgrammingLevel::Intermediate => "Intermediate",
            ProgrammingLevel::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

impl FromStr for ProgrammingLevel {
    type Err = PrimerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "None" => Ok(ProgrammingLevel::None),
            "Beginner" => Ok(ProgrammingLevel::Beginner),
            "Intermediate" => Ok(ProgrammingLevel::Intermediate),
            "Advanced" => Ok(ProgrammingLevel::Advanced),
            other => Err(PrimerError::config(format!(
                "Unknown programming level: '{other}'"
            ))),
        }
    }
}

/// Field of interest driving the personalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterestField {
    Robotics,
    #[serde(rename = "AI Agents")]
    AiAgents,
    Vision,
    Humanoids,
    Embedded,
}

impl fmt::Display for InterestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InterestField::Robotics => "Robotics",
            InterestField::AiAgents => "AI Agents",
            InterestField::Vision => "Vision",
            InterestField::Humanoids => "Humanoids",
            InterestField::Embedded => "Embedded",
        };
        f.write_str(label)
    }
}

impl FromStr for InterestField {
    type Err = PrimerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Robotics" => Ok(InterestField::Robotics),
            "AI Agents" => Ok(InterestField::AiAgents),
            "Vision" => Ok(InterestField::Vision),
            "Humanoids" => Ok(InterestField::Humanoids),
            "Embedded" => Ok(InterestField::Embedded),
            other => Err(PrimerError::config(format!(
                "Unknown interest field: '{other}'"
            ))),
        }
    }
}

/// Language the personalized content should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreferredLanguage {
    English,
    Urdu,
}

impl fmt::Display for PreferredLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PreferredLanguage::English => "English",
            PreferredLanguage::Urdu => "Urdu",
        };
        f.write_str(label)
    }
}

impl FromStr for PreferredLanguage {
    type Err = PrimerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "English" => Ok(PreferredLanguage::English),
            "Urdu" => Ok(PreferredLanguage::Urdu),
            other => Err(PrimerError::config(format!(
                "Unknown preferred language: '{other}'"
            ))),
        }
    }
}

/// The survey submission payload.
///
/// The four selection fields are required; the free-form fields may be left
/// out and serialize as null, matching the backend's optional columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyResponses {
    pub role: Role,
    pub programming_level: ProgrammingLevel,
    pub interest_field: InterestField,
    pub preferred_language: PreferredLanguage,
    pub hardware_specs: Option<String>,
    pub software_experience: Option<String>,
    pub goals: Option<String>,
}

/// Backend access to the reader's profile.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Fetches the signed-in reader's profile.
    async fn current_profile(&self, token: &str) -> Result<UserProfile>;

    /// Creates or updates the reader's background record.
    async fn submit_background(
        &self,
        token: &str,
        user_id: Uuid,
        survey: &SurveyResponses,
    ) -> Result<UserProfile>;
}
