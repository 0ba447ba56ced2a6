//! # Vigil Shared Types
//!
//! Entity records, typed row ids, and wire-contract enums shared by the
//! store, the engine, and the test suite.
//!
//! ## Clusters
//!
//! - **Ids**: `CaseId`, `SignalId`, `UserId`, `ProfileId`
//! - **Cases**: `CaseRecord`, `RegulatoryStatus`, `CaseStatus`, `Priority`
//! - **Ledgers**: `WorkflowEntry`, `AuditLogEntry`, `FieldChange`
//! - **Signals**: `SignalRecord`, `SignalStatus`, `SignalStrength`
//! - **Users**: `UserProfile`, `UserAccount`, `Role`, `Permission`
//!
//! ## Wire Contract
//!
//! Serialized field names and enum values are a compatibility contract with
//! the upstream consumers of this registry and must not drift:
//!
//! - struct fields serialize in `camelCase` (`caseNumber`, `assignedTo`)
//! - status/role/priority enums serialize in `snake_case` (`under_review`)
//! - audit action tags serialize in `SCREAMING_SNAKE_CASE` (`UPDATE_STATUS`)
//! - absent optional fields are omitted, not `null`

pub mod enums;
pub mod ids;
pub mod records;

pub use enums::{
    AuditAction, AuditEntityType, CaseStatus, DetectionMethod, Outcome, PatientGender, Permission,
    Priority, ReporterType, Role, SignalStatus, SignalStrength,
};
pub use ids::{CaseId, ProfileId, SignalId, UserId};
pub use records::{
    AuditLogEntry, AuthoritySubmission, CaseRecord, FieldChange, RegulatoryStatus, SignalRecord,
    TimestampMs, UserAccount, UserProfile, WorkflowEntry,
};
