//! Per-form submission status.

use serde::{Deserialize, Serialize};

/// Transient state of a single form submission.
///
/// Owned solely by the flow it belongs to and reset on the next submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded {
        message: String,
    },
    Failed {
        message: String,
    },
}

impl SubmissionStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The user-facing status message, if this state carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Succeeded { message } | Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}
