//! Error types for the contact book.
//!
//! All failures are strongly typed with thiserror and returned as values;
//! callers pattern match on the variant they care about. Only unrecoverable
//! I/O surfaces through [`PersistError`].

use thiserror::Error;

use crate::contact::ContactId;

/// Validation failures that block insertion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was missing or blank after trimming.
    #[error("required field '{field}' is missing or blank")]
    MissingField {
        /// The offending field name.
        field: &'static str,
    },
}

/// Failures of store operations. The store is never left partially
/// modified: every operation that returns an error was a full no-op.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The record failed required-field validation.
    #[error("invalid record: {0}")]
    Validation(#[from] ValidationError),

    /// No record with this identifier exists.
    #[error("contact not found: {0}")]
    ContactNotFound(ContactId),

    /// The deletion confirmer answered no.
    #[error("deletion of {0} was declined")]
    DeleteDeclined(ContactId),

    /// A contact cannot be merged into itself.
    #[error("cannot merge {0} into itself")]
    SelfMerge(ContactId),

    /// The resolver could not pick a side for a conflicting field.
    #[error("merge conflict on '{field}' was left unresolved")]
    MergeUnresolved {
        /// The conflicting field, e.g. `phone` or `address.city`.
        field: String,
    },
}

/// Failures while saving or loading a snapshot file.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Reading or writing the file failed.
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but is not valid JSON.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum RolodexError {
    /// A store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A persistence operation failed.
    #[error(transparent)]
    Persist(#[from] PersistError),
}

impl RolodexError {
    /// Returns true if this failure came from a store operation.
    #[must_use]
    pub const fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }

    /// Returns true if this failure came from persistence.
    #[must_use]
    pub const fn is_persist(&self) -> bool {
        matches!(self, Self::Persist(_))
    }
}

/// Result type alias for crate operations.
pub type RolodexResult<T> = Result<T, RolodexError>;
