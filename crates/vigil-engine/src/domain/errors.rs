//! The registry error taxonomy.
//!
//! Every error surfaces directly to the caller; nothing retries and nothing
//! partially applies. Audit writes are not best-effort — their failure fails
//! the whole operation through the same path.

use thiserror::Error;
use vigil_store::StoreError;
use vigil_types::{CaseId, CaseStatus, Permission, SignalId, UserId};

/// Errors surfaced by registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No caller identity could be resolved. Blocks all access, reads
    /// included.
    #[error("caller is not authenticated")]
    Unauthenticated,

    /// The referenced case does not exist.
    #[error("case not found: {id}")]
    CaseNotFound { id: CaseId },

    /// The referenced signal does not exist.
    #[error("signal not found: {id}")]
    SignalNotFound { id: SignalId },

    /// The referenced user identity has no directory entry.
    #[error("user not found: {id}")]
    UserNotFound { id: UserId },

    /// A profile already exists for this user identity.
    #[error("profile already exists for user: {user_id}")]
    ProfileExists { user_id: UserId },

    /// The caller's stored capability set lacks the required permission.
    #[error("missing required permission: {required}")]
    Forbidden { required: Permission },

    /// The strict transition policy rejected this status change.
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition { from: CaseStatus, to: CaseStatus },

    /// A store uniqueness invariant fired.
    #[error(transparent)]
    Store(#[from] StoreError),
}
