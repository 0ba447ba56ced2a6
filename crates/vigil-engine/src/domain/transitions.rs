//! Status transition policy.
//!
//! The nominal lifecycle is `draft → submitted → under_review →
//! approved/rejected → closed`, with `closed` reachable from any state and
//! `under_review` re-enterable after a verdict. The status enum itself
//! enforces nothing; whether off-path transitions are rejected is decided
//! here, per configuration.

use vigil_types::CaseStatus;

/// Whether off-path status transitions are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Any status may be set from any status. The default, matching the
    /// historical behavior this registry replaces.
    Permissive,
    /// Only the transitions of the lifecycle diagram are accepted.
    Strict,
}

impl TransitionPolicy {
    /// Whether moving `from → to` is allowed under this policy.
    pub fn allows(&self, from: CaseStatus, to: CaseStatus) -> bool {
        match self {
            TransitionPolicy::Permissive => true,
            TransitionPolicy::Strict => allowed_strict(from, to),
        }
    }
}

/// The strict transition table.
fn allowed_strict(from: CaseStatus, to: CaseStatus) -> bool {
    use CaseStatus::*;
    // Closing is allowed from anywhere.
    if to == Closed {
        return true;
    }
    matches!(
        (from, to),
        (Draft, Submitted)
            | (Submitted, UnderReview)
            | (UnderReview, Approved)
            | (UnderReview, Rejected)
            | (Approved, UnderReview)
            | (Rejected, UnderReview)
    )
}
