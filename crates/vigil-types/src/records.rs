//! Persisted record shapes.
//!
//! One struct per table row. Field names serialize in `camelCase` and
//! optional fields are omitted when absent; both are part of the wire
//! contract. Rows carry no id or creation stamp themselves — the store
//! attaches those as document metadata.

use serde::{Deserialize, Serialize};

use crate::enums::{
    AuditAction, AuditEntityType, CaseStatus, DetectionMethod, Outcome, PatientGender, Permission,
    Priority, ReporterType, Role, SignalStatus, SignalStrength,
};
use crate::ids::{CaseId, UserId};

/// Milliseconds since the Unix epoch.
pub type TimestampMs = i64;

// =============================================================================
// CASES
// =============================================================================

/// Submission state toward one regulatory authority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoritySubmission {
    /// Whether the case has been submitted to this authority.
    pub submitted: bool,
    /// When it was submitted, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_date: Option<TimestampMs>,
    /// Acknowledgment number returned by the authority, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgment_number: Option<String>,
}

impl AuthoritySubmission {
    /// The zero state: not submitted, no date, no acknowledgment.
    pub fn not_submitted() -> Self {
        Self {
            submitted: false,
            submission_date: None,
            acknowledgment_number: None,
        }
    }
}

impl Default for AuthoritySubmission {
    fn default() -> Self {
        Self::not_submitted()
    }
}

/// Fixed-shape regulatory submission tracker: one sub-record per authority.
///
/// Case creation zero-initializes all three; later regulatory workflows
/// flip them individually.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulatoryStatus {
    /// U.S. Food and Drug Administration.
    pub fda: AuthoritySubmission,
    /// European Medicines Agency.
    pub ema: AuthoritySubmission,
    /// International Council for Harmonisation.
    pub ich: AuthoritySubmission,
}

/// An adverse-event case record.
///
/// Created once in `draft` status and mutated in place by status and
/// assignment updates; never deleted. `caseNumber` and `createdBy` are
/// immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    /// External display identifier, `PV-<timestamp>-<seq>`. Unique.
    pub case_number: String,
    /// Current lifecycle status.
    pub status: CaseStatus,
    /// Triage priority.
    pub priority: Priority,

    // Patient information
    /// Patient age in years.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_age: Option<u32>,
    /// Patient gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_gender: Option<PatientGender>,
    /// Patient weight in kilograms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_weight: Option<f64>,

    // Product information
    /// Name of the suspect product.
    pub product_name: String,
    /// Manufacturing batch, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_number: Option<String>,
    /// Indication the product was taken for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indication: Option<String>,
    /// Dosage regimen, free-form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,

    // Event information
    /// Short name of the adverse event. Full-text searchable.
    pub adverse_event: String,
    /// Narrative description of the event.
    pub event_description: String,
    /// When the event occurred.
    pub event_date: TimestampMs,
    /// When the event was reported.
    pub report_date: TimestampMs,
    /// Whether the event meets seriousness criteria.
    pub seriousness: bool,
    /// Clinical outcome, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,

    // Reporter information
    /// Category of the reporter.
    pub reporter_type: ReporterType,
    /// Reporter's country code or name, free-form.
    pub reporter_country: String,

    // Regulatory
    /// Per-authority submission tracking.
    pub regulatory_status: RegulatoryStatus,

    /// Current assignee, if the case has been assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<UserId>,
    /// Who created the case. Never changes.
    pub created_by: UserId,
    /// Who last mutated the case.
    pub last_modified_by: UserId,
}

// =============================================================================
// LEDGERS
// =============================================================================

/// One append-only entry in a case's workflow history.
///
/// `fromStatus` is absent only on the creation entry. Assignment changes
/// also land here, with `toStatus` equal to the unchanged current status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowEntry {
    /// The case this entry belongs to.
    pub case_id: CaseId,
    /// Status before the action; absent on the creation entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_status: Option<CaseStatus>,
    /// Status after the action.
    pub to_status: CaseStatus,
    /// Human-readable description of the action.
    pub action: String,
    /// Free-form comments supplied by the actor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Who performed the action.
    pub performed_by: UserId,
    /// Wall-clock time of the action.
    pub timestamp: TimestampMs,
}

/// Single-field diff attached to an audit entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChange {
    /// Name of the mutated field.
    pub field: String,
    /// Stringified value before the mutation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    /// Stringified value after the mutation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
}

/// One append-only entry in the cross-entity audit trail.
///
/// Exactly one entry is written per mutating call, regardless of how many
/// workflow entries that call produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    /// Kind of entity acted on.
    pub entity_type: AuditEntityType,
    /// Opaque id of the entity (stringified row id).
    pub entity_id: String,
    /// Action tag.
    pub action: AuditAction,
    /// Single-field diff, when the action changed one field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<FieldChange>,
    /// Who performed the action.
    pub performed_by: UserId,
    /// Wall-clock time of the action.
    pub timestamp: TimestampMs,
    /// Origin address of the call, when the transport supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

// =============================================================================
// SIGNALS
// =============================================================================

/// A detected safety signal linking a product/adverse-event pair to cases.
///
/// Signals carry no workflow ledger of their own; their status changes are
/// recorded in the audit trail only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalRecord {
    /// Short display name of the signal.
    pub signal_name: String,
    /// Narrative description.
    pub description: String,
    /// The suspect product.
    pub product_name: String,
    /// The adverse event of the association.
    pub adverse_event: String,
    /// How the signal was detected.
    pub detection_method: DetectionMethod,
    /// Strength of the association.
    pub strength: SignalStrength,
    /// Evaluation status.
    pub status: SignalStatus,
    /// Cases supporting this signal.
    pub related_cases: Vec<CaseId>,
    /// Who created the signal.
    pub created_by: UserId,
    /// Current assignee, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<UserId>,
}

// =============================================================================
// USERS
// =============================================================================

/// Role, capability set, and activity state for one user identity.
///
/// At most one profile exists per user. `permissions` is computed from the
/// role table once, at creation, and stored; capability checks read the
/// stored set and never recompute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// The identity this profile belongs to.
    pub user_id: UserId,
    /// Assigned role.
    pub role: Role,
    /// Organizational department, free-form.
    pub department: String,
    /// Capability set granted at creation time.
    pub permissions: Vec<Permission>,
    /// Whether the profile is active.
    pub is_active: bool,
    /// Last recorded login time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<TimestampMs>,
}

impl UserProfile {
    /// Whether the stored capability set contains `permission`.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

/// Directory entry for a user identity, owned by the identity collaborator.
///
/// Used only to resolve display names when projecting cases, signals, and
/// workflow entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Display name, when the identity provider supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact address, used as the display fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserAccount {
    /// Display name resolution: `name`, falling back to `email`.
    pub fn display_name(&self) -> Option<String> {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.email.as_deref())
            .map(str::to_owned)
    }
}
