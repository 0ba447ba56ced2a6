//! # Vigil Engine
//!
//! The case workflow and audit engine over the typed store.
//!
//! ## Architecture
//!
//! Hexagonal layout:
//!
//! - `domain/` — pure logic: case-number allocation, the role→permission
//!   table, the status transition policy, stats recounts, projections, and
//!   the error taxonomy.
//! - `ports/` — `CaseApi`/`SignalApi`/`UserApi` inbound traits;
//!   `IdentityProvider` and `TimeSource` outbound traits.
//! - `service/` — the three facades over one shared [`RegistryContext`];
//!   every mutation is one store write guard committing the entity patch,
//!   the workflow append (when status or assignment changed), and the audit
//!   append together.
//! - `adapters/` — in-memory identity provider, system and manual clocks.
//!
//! ## Control Flow
//!
//! Caller action → identity gate → permission check (where required) →
//! domain operation → one workflow entry (if status/assignment changed) +
//! one audit entry (for any mutation) → projection joined with resolved
//! display names.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use config::RegistryConfig;
pub use domain::errors::RegistryError;
pub use domain::projections::{
    CaseDetail, CaseHit, CaseStats, CaseSummary, CurrentUser, SignalStats, SignalSummary, UserView,
    WorkflowEntryView,
};
pub use domain::requests::{CaseListFilter, CreateCaseInput, CreateSignalInput, SignalListFilter};
pub use domain::transitions::TransitionPolicy;
pub use ports::inbound::{CaseApi, SignalApi, UserApi};
pub use ports::outbound::{CallerContext, IdentityProvider, TimeSource};
pub use service::{CaseService, Registry, RegistryContext, SignalService, UserService};
