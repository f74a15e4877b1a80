//! Core error types for the split categories extension.
//!
//! Host-specific failures (taxonomy lookups, option storage, templating) are
//! converted to these types by the adapters that implement the host traits.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the extension.
///
/// Stale category ids, malformed block keys and a missing image companion are
/// not errors; they are handled as "nothing to do" by the callers.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Term operation failed: {0}")]
    Term(#[from] TermError),

    #[error("Settings operation failed: {0}")]
    Settings(String),

    #[error("Failed to serialize settings: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors reported by the host taxonomy.
#[derive(Error, Debug)]
pub enum TermError {
    /// The taxonomy could not be queried.
    #[error("Term lookup failed: {0}")]
    LookupFailed(String),

    /// The ancestry relation could not be evaluated.
    #[error("Ancestry test failed: {0}")]
    AncestryFailed(String),

    /// The taxonomy rejected a write.
    #[error("Term update failed: {0}")]
    WriteFailed(String),

    /// A permalink could not be built for the term.
    #[error("Permalink generation failed: {0}")]
    PermalinkFailed(String),
}

/// Validation errors for settings submitted from the admin form.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid category id: {0}")]
    InvalidCategoryId(String),
}
