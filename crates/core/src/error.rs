//! Error types for cutlist.

use thiserror::Error;

/// Result type alias for cutlist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a planning run.
///
/// Data-quality problems (bad catalog rows, oversized parts) are never
/// reported through this type; they are counted and returned alongside the
/// results instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration that cannot produce a meaningful layout.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A textual option that does not name a known value.
    #[error("Unknown {kind} '{token}' (expected one of: {expected})")]
    UnknownToken {
        /// What was being parsed (e.g. "strategy").
        kind: &'static str,
        /// The rejected input.
        token: String,
        /// Accepted spellings.
        expected: &'static str,
    },

    /// A part record that violates the catalog invariants.
    #[error("Invalid part: {0}")]
    InvalidPart(String),
}

impl Error {
    /// Returns true if the error was caused by configuration rather than data.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidConfiguration(_) | Error::UnknownToken { .. }
        )
    }
}
