//! Operation inputs and list filters.

use serde::{Deserialize, Serialize};
use vigil_types::{
    CaseId, CaseRecord, CaseStatus, DetectionMethod, Outcome, PatientGender, Priority,
    RegulatoryStatus, ReporterType, SignalRecord, SignalStatus, SignalStrength, TimestampMs,
    UserId,
};

/// Fields supplied by the caller when creating a case.
///
/// Status, case number, regulatory flags, and the creator fields are not
/// caller-supplied; the service derives them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaseInput {
    pub priority: Priority,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_gender: Option<PatientGender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_weight: Option<f64>,

    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indication: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,

    pub adverse_event: String,
    pub event_description: String,
    pub event_date: TimestampMs,
    pub report_date: TimestampMs,
    pub seriousness: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,

    pub reporter_type: ReporterType,
    pub reporter_country: String,
}

impl CreateCaseInput {
    /// Build the stored record: `draft` status, zero-initialized regulatory
    /// flags, creator set as both `createdBy` and `lastModifiedBy`.
    pub fn into_record(self, case_number: String, created_by: UserId) -> CaseRecord {
        CaseRecord {
            case_number,
            status: CaseStatus::Draft,
            priority: self.priority,
            patient_age: self.patient_age,
            patient_gender: self.patient_gender,
            patient_weight: self.patient_weight,
            product_name: self.product_name,
            batch_number: self.batch_number,
            indication: self.indication,
            dosage: self.dosage,
            adverse_event: self.adverse_event,
            event_description: self.event_description,
            event_date: self.event_date,
            report_date: self.report_date,
            seriousness: self.seriousness,
            outcome: self.outcome,
            reporter_type: self.reporter_type,
            reporter_country: self.reporter_country,
            regulatory_status: RegulatoryStatus::default(),
            assigned_to: None,
            created_by,
            last_modified_by: created_by,
        }
    }
}

/// Fields supplied by the caller when recording a detected signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSignalInput {
    pub signal_name: String,
    pub description: String,
    pub product_name: String,
    pub adverse_event: String,
    pub detection_method: DetectionMethod,
    pub strength: SignalStrength,
    #[serde(default)]
    pub related_cases: Vec<CaseId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<UserId>,
}

impl CreateSignalInput {
    /// Build the stored record: `detected` status, creator set.
    pub fn into_record(self, created_by: UserId) -> SignalRecord {
        SignalRecord {
            signal_name: self.signal_name,
            description: self.description,
            product_name: self.product_name,
            adverse_event: self.adverse_event,
            detection_method: self.detection_method,
            strength: self.strength,
            status: SignalStatus::Detected,
            related_cases: self.related_cases,
            created_by,
            assigned_to: self.assigned_to,
        }
    }
}

/// Case list filter. When several predicates are supplied only the first in
/// precedence order (`status > priority > assignedTo`) is applied; the rest
/// are ignored. A documented limitation, preserved deliberately.
#[derive(Debug, Clone, Default)]
pub struct CaseListFilter {
    pub status: Option<CaseStatus>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<UserId>,
}

/// Signal list filter. Precedence: `status > strength > productName`.
#[derive(Debug, Clone, Default)]
pub struct SignalListFilter {
    pub status: Option<SignalStatus>,
    pub strength: Option<SignalStrength>,
    pub product_name: Option<String>,
}
