//! Error types for the generator.
//!
//! Uses `thiserror` for typed errors. Only pool lookups and export can fail a
//! run; naming errors are handled per card by the orchestrator and never
//! abort generation.

use crate::core::Element;

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum ForgeError {
    /// No content pool is registered for the element.
    #[error("unknown element: no content pool registered for {0}")]
    UnknownElement(Element),

    /// A registered pool cannot support sampling.
    #[error("invalid content pool for {element}: {reason}")]
    InvalidPool {
        /// Element whose pool is invalid.
        element: Element,
        /// What is wrong with it.
        reason: String,
    },

    /// Writing the exported collection failed.
    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a card record failed.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors raised on the naming path.
///
/// All of these are local to one card.
#[derive(Debug, thiserror::Error)]
pub enum NamingError {
    /// Credential missing or configuration invalid. Naming is disabled.
    #[error("naming config error: {0}")]
    Config(String),

    /// The service call failed after all retries.
    #[error("naming service unavailable: {0}")]
    Transient(String),

    /// A single candidate could not be parsed.
    #[error("malformed name candidate: {0}")]
    Malformed(String),
}

/// Convenience alias.
pub type Result<T, E = ForgeError> = std::result::Result<T, E>;
