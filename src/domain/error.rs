//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent a malformed layout literal.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("empty entry name in directory: {parent}")]
    EmptyName { parent: String },

    #[error("entry name must not contain '/': {path}")]
    InvalidName { path: String },

    #[error("duplicate entry in layout: {path}")]
    DuplicateEntry { path: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
