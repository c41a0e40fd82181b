//! Error types for catalog I/O.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur when reading catalogs or writing reports.
///
/// Individual bad rows are not errors; see [`crate::RejectedRow`].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to process CSV: {0}")]
    Csv(#[from] csv::Error),
}
