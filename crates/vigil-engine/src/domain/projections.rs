//! Read-side projections.
//!
//! List and detail shapes returned to UI/API consumers: the stored row plus
//! resolved display names for the user references. Search hits skip the
//! name join. Projections serialize with the row's own wire field names
//! flattened in, plus `id` and `creationTime`.

use serde::Serialize;
use vigil_store::tables::users::UserDirectory;
use vigil_store::{Doc, EntrySeq};
use vigil_types::{
    CaseId, CaseRecord, Permission, ProfileId, Role, SignalId, SignalRecord, TimestampMs,
    UserAccount, UserId, UserProfile, WorkflowEntry,
};

pub use crate::domain::stats::{CaseStats, SignalStats};

/// A raw search hit: the stored row, no display-name join.
pub type CaseHit = Doc<CaseId, CaseRecord>;

/// One case row joined with creator/assignee display names.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummary {
    #[serde(flatten)]
    pub doc: Doc<CaseId, CaseRecord>,
    /// Resolved display name of `createdBy`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_name: Option<String>,
    /// Resolved display name of `assignedTo`, when assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_name: Option<String>,
}

impl CaseSummary {
    /// Join one row with the directory.
    pub fn project(doc: &Doc<CaseId, CaseRecord>, directory: &UserDirectory) -> Self {
        Self {
            created_by_name: directory.display_name(&doc.record.created_by),
            assigned_to_name: doc
                .record
                .assigned_to
                .and_then(|user| directory.display_name(&user)),
            doc: doc.clone(),
        }
    }
}

/// One workflow entry joined with the performer's display name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowEntryView {
    #[serde(flatten)]
    pub doc: Doc<EntrySeq, WorkflowEntry>,
    /// Resolved display name of `performedBy`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performed_by_name: Option<String>,
}

impl WorkflowEntryView {
    /// Join one entry with the directory.
    pub fn project(doc: &Doc<EntrySeq, WorkflowEntry>, directory: &UserDirectory) -> Self {
        Self {
            performed_by_name: directory.display_name(&doc.record.performed_by),
            doc: doc.clone(),
        }
    }
}

/// A single case with its full workflow history, timestamp descending.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDetail {
    #[serde(flatten)]
    pub case: CaseSummary,
    pub workflow: Vec<WorkflowEntryView>,
}

/// One signal row joined with creator/assignee display names.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalSummary {
    #[serde(flatten)]
    pub doc: Doc<SignalId, SignalRecord>,
    /// Resolved display name of `createdBy`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_name: Option<String>,
    /// Resolved display name of `assignedTo`, when assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_name: Option<String>,
}

impl SignalSummary {
    /// Join one row with the directory.
    pub fn project(doc: &Doc<SignalId, SignalRecord>, directory: &UserDirectory) -> Self {
        Self {
            created_by_name: directory.display_name(&doc.record.created_by),
            assigned_to_name: doc
                .record
                .assigned_to
                .and_then(|user| directory.display_name(&user)),
            doc: doc.clone(),
        }
    }
}

/// The caller's own account joined with their profile, if one exists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
}

impl CurrentUser {
    /// Join the caller's directory row (may be absent) with their profile.
    pub fn project(
        user_id: UserId,
        account: Option<&UserAccount>,
        profile: Option<&UserProfile>,
    ) -> Self {
        Self {
            user_id,
            name: account.and_then(|a| a.name.clone()),
            email: account.and_then(|a| a.email.clone()),
            profile: profile.cloned(),
        }
    }
}

/// One profile row joined with its directory entry, for user management.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: ProfileId,
    pub creation_time: TimestampMs,
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
    pub department: String,
    pub permissions: Vec<Permission>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<TimestampMs>,
}

impl UserView {
    /// Join one profile row with the directory.
    pub fn project(doc: &Doc<ProfileId, UserProfile>, directory: &UserDirectory) -> Self {
        let account = directory.get(&doc.record.user_id);
        Self {
            id: doc.id,
            creation_time: doc.creation_time,
            user_id: doc.record.user_id,
            name: account.and_then(|a| a.name.clone()),
            email: account.and_then(|a| a.email.clone()),
            role: doc.record.role,
            department: doc.record.department.clone(),
            permissions: doc.record.permissions.clone(),
            is_active: doc.record.is_active,
            last_login: doc.record.last_login,
        }
    }
}
