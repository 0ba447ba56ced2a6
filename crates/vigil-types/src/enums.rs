//! Wire-contract enums.
//!
//! Each enum's serialized form is fixed: lifecycle/role/priority values use
//! `snake_case`, audit action tags use `SCREAMING_SNAKE_CASE`. `Display`
//! yields the same wire string, because workflow action texts interpolate
//! status values verbatim ("Status changed from draft to under_review").

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// CASE LIFECYCLE
// =============================================================================

/// Lifecycle status of a case.
///
/// The nominal path is `draft → submitted → under_review → approved/rejected
/// → closed`, with `closed` reachable from anywhere and `under_review`
/// re-enterable after a verdict. Whether off-path transitions are rejected
/// is a policy decision made by the engine, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Draft,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
    Closed,
}

impl CaseStatus {
    /// Every status, in breakdown-reporting order.
    pub const ALL: [CaseStatus; 6] = [
        CaseStatus::Draft,
        CaseStatus::Submitted,
        CaseStatus::UnderReview,
        CaseStatus::Approved,
        CaseStatus::Rejected,
        CaseStatus::Closed,
    ];

    /// The wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Draft => "draft",
            CaseStatus::Submitted => "submitted",
            CaseStatus::UnderReview => "under_review",
            CaseStatus::Approved => "approved",
            CaseStatus::Rejected => "rejected",
            CaseStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Triage priority of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Every priority, in breakdown-reporting order.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    /// The wire string for this priority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reported patient gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatientGender {
    Male,
    Female,
    Other,
}

/// Clinical outcome of the adverse event, when known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Recovered,
    Recovering,
    NotRecovered,
    Fatal,
    Unknown,
}

/// Who filed the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReporterType {
    HealthcareProfessional,
    Consumer,
    RegulatoryAuthority,
    Company,
}

// =============================================================================
// USERS & CAPABILITIES
// =============================================================================

/// Role assigned to a user profile at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    SafetyOfficer,
    DataEntry,
    Reviewer,
    Viewer,
}

impl Role {
    /// The wire string for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::SafetyOfficer => "safety_officer",
            Role::DataEntry => "data_entry",
            Role::Reviewer => "reviewer",
            Role::Viewer => "viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named capability granted through a role.
///
/// Profiles persist these as plain strings; the set stored at profile
/// creation is what capability checks compare against from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Read,
    Write,
    Delete,
    ManageUsers,
    ManageSystem,
    Review,
    Approve,
    SignalDetection,
}

impl Permission {
    /// The wire string for this permission.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Read => "read",
            Permission::Write => "write",
            Permission::Delete => "delete",
            Permission::ManageUsers => "manage_users",
            Permission::ManageSystem => "manage_system",
            Permission::Review => "review",
            Permission::Approve => "approve",
            Permission::SignalDetection => "signal_detection",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SIGNALS
// =============================================================================

/// Evaluation status of a detected safety signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalStatus {
    Detected,
    UnderEvaluation,
    Confirmed,
    Refuted,
    Closed,
}

impl SignalStatus {
    /// Every status, in breakdown-reporting order.
    pub const ALL: [SignalStatus; 5] = [
        SignalStatus::Detected,
        SignalStatus::UnderEvaluation,
        SignalStatus::Confirmed,
        SignalStatus::Refuted,
        SignalStatus::Closed,
    ];

    /// The wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalStatus::Detected => "detected",
            SignalStatus::UnderEvaluation => "under_evaluation",
            SignalStatus::Confirmed => "confirmed",
            SignalStatus::Refuted => "refuted",
            SignalStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for SignalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strength of the statistical or clinical association behind a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalStrength {
    Weak,
    Moderate,
    Strong,
}

impl SignalStrength {
    /// Every strength, in breakdown-reporting order.
    pub const ALL: [SignalStrength; 3] = [
        SignalStrength::Weak,
        SignalStrength::Moderate,
        SignalStrength::Strong,
    ];

    /// The wire string for this strength.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalStrength::Weak => "weak",
            SignalStrength::Moderate => "moderate",
            SignalStrength::Strong => "strong",
        }
    }
}

impl fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a signal was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    Statistical,
    ClinicalReview,
    Literature,
    Regulatory,
}

// =============================================================================
// AUDIT LEDGER
// =============================================================================

/// Kind of entity an audit entry refers to.
///
/// The set is closed at three members. Signal mutations are recorded under
/// `Case` with the signal id in `entityId`; consumers rely on that quirk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEntityType {
    Case,
    User,
    System,
}

impl AuditEntityType {
    /// The wire string for this entity type.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditEntityType::Case => "case",
            AuditEntityType::User => "user",
            AuditEntityType::System => "system",
        }
    }
}

impl fmt::Display for AuditEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action tag carried by an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Create,
    UpdateStatus,
    Assign,
    UpdateSignalStatus,
    CreateSignal,
    CreateProfile,
}

impl AuditAction {
    /// The wire string for this action tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "CREATE",
            AuditAction::UpdateStatus => "UPDATE_STATUS",
            AuditAction::Assign => "ASSIGN",
            AuditAction::UpdateSignalStatus => "UPDATE_SIGNAL_STATUS",
            AuditAction::CreateSignal => "CREATE_SIGNAL",
            AuditAction::CreateProfile => "CREATE_PROFILE",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
