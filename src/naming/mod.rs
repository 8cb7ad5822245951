//! Card naming through an external text-completion service.
//!
//! The orchestrator talks to a [`NamingService`] it is handed at
//! construction, never to a global client. [`GeminiClient`] is the HTTP
//! implementation; [`DisabledNaming`] is used when no credential is
//! configured, and tests supply their own fakes.

pub mod gemini;
pub mod names;

pub use gemini::GeminiClient;
pub use names::{choose_name, name_card, naming_prompt, sanitize_name, ERROR_NAME};

use crate::error::NamingError;

/// One raw completion returned by the naming service.
///
/// `text` is `None` when the service returned a candidate whose text could
/// not be extracted (blocked, empty, or malformed).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameCandidate {
    /// Raw candidate text.
    pub text: Option<String>,
}

impl NameCandidate {
    /// A candidate with text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// A candidate whose text could not be extracted.
    #[must_use]
    pub const fn malformed() -> Self {
        Self { text: None }
    }
}

/// External text-completion provider used to name cards.
pub trait NamingService {
    /// Whether the service is configured and should be called.
    fn is_enabled(&self) -> bool;

    /// Complete a prompt into zero or more raw candidates.
    ///
    /// Implementations own their retry policy; an error here means the
    /// service is unavailable for this prompt.
    fn complete(&self, prompt: &str) -> Result<Vec<NameCandidate>, NamingError>;
}

/// Naming service that is never enabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledNaming;

impl NamingService for DisabledNaming {
    fn is_enabled(&self) -> bool {
        false
    }

    fn complete(&self, _prompt: &str) -> Result<Vec<NameCandidate>, NamingError> {
        Err(NamingError::Config("naming is disabled".to_owned()))
    }
}
