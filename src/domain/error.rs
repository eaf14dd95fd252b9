//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the document model.
/// These are independent of rendering and I/O concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid heading level: {0} (expected 1..=9)")]
    InvalidHeadingLevel(u8),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
