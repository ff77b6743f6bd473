//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`RollbookError`]
//! via `#[from]`; callers match on variants, never on message text.

use crate::id::StudentId;

/// An id-addressed lookup or existence check found no record.
///
/// The display text is fixed, so it carries the failing id as data rather
/// than interpolating it into the message.
#[derive(Debug, thiserror::Error)]
#[error("Student not found")]
pub struct NotFoundError {
    /// The id that failed to resolve.
    pub id: StudentId,
}

/// Workspace-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum RollbookError {
    /// An id-addressed lookup failed.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A failure raised below the storage port, passed through unmodified.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
