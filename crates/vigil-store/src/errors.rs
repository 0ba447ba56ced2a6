//! Store error types.

use thiserror::Error;
use vigil_types::{CaseId, SignalId, UserId};

/// Uniqueness violations surfaced by table inserts.
///
/// Reads return `Option` rather than erroring; "not found" only becomes an
/// error at the service layer, where the entity kind is known.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A case with this external number already exists.
    #[error("case number already exists: {0}")]
    DuplicateCaseNumber(String),

    /// A case row with this id already exists.
    #[error("case id already exists: {0}")]
    DuplicateCaseId(CaseId),

    /// A signal row with this id already exists.
    #[error("signal id already exists: {0}")]
    DuplicateSignalId(SignalId),

    /// A profile row already exists for this user identity.
    #[error("profile already exists for user: {0}")]
    ProfileExists(UserId),
}
