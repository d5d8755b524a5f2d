//! Content swap controller.
//!
//! Holds the original and, when present, the personalized rendition of one
//! chapter, and decides which one is displayed. Resetting always returns
//! to the original and is idempotent.

use crate::markdown;

/// Display state for a single chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSwapController {
    original: String,
    personalized: Option<String>,
}

impl ContentSwapController {
    /// Starts out displaying the original content.
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            personalized: None,
        }
    }

    /// Replaces the underlying chapter; the display resets to the new
    /// original.
    pub fn replace_original(&mut self, original: impl Into<String>) {
        self.original = original.into();
        self.personalized = None;
    }

    /// The content currently displayed, verbatim.
    pub fn displayed(&self) -> &str {
        self.personalized.as_deref().unwrap_or(&self.original)
    }

    /// The original content, regardless of what is displayed.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// True when the personalized rendition is active; drives the reset
    /// affordance.
    pub fn is_personalized(&self) -> bool {
        self.personalized.is_some()
    }

    /// Makes a personalized rendition the displayed content.
    pub fn show_personalized(&mut self, content: impl Into<String>) {
        self.personalized = Some(content.into());
    }

    /// Returns to the original content.
    pub fn reset(&mut self) {
        self.personalized = None;
    }

    /// Renders whichever content is active through the sanitizing markdown
    /// pipeline; personalized content never reaches the output unfiltered.
    pub fn render(&self) -> String {
        markdown::to_sanitized_html(self.displayed())
    }
}
