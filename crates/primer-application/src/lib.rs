//! Application layer for Primer.
//!
//! This crate provides the use cases that coordinate the domain and
//! infrastructure layers: the form submission flows, the personalization
//! gate, and the content swap controller.

pub mod auth_flow;
pub mod content_swap;
pub mod form;
pub mod gate;
pub mod markdown;
pub mod survey_flow;

#[cfg(test)]
mod test_support;

pub use auth_flow::{SigninFields, SigninFlow, SignupFields, SignupFlow};
pub use content_swap::ContentSwapController;
pub use form::NextStep;
pub use gate::PersonalizationGate;
pub use survey_flow::SurveyFlow;
