//! # Vigil Store
//!
//! The typed storage engine under the registry: one table struct per entity,
//! each with its predeclared secondary indexes, plus append-only ledger
//! tables, a token-prefix search index, and named transactional counters.
//!
//! ## Table Layout
//!
//! | Table | Kind | Indexes |
//! |-------|------|---------|
//! | `cases` | mutable rows | case number (unique), status, priority, assignee, product, search(adverseEvent) |
//! | `caseWorkflow` | append-only | case id |
//! | `auditLog` | append-only | (entity type, entity id) |
//! | `signals` | mutable rows | status, strength, product |
//! | `userProfiles` | mutable rows | user id (unique) |
//! | directory | key-value | — |
//!
//! ## Transaction Boundary
//!
//! The whole database sits behind one `parking_lot::RwLock`. A write guard
//! is the transaction: every logical operation acquires exactly one guard,
//! completes all fallible validation before its first table write, and then
//! applies its writes back-to-back. Writers are exclusive, so two updates to
//! the same row are linearized and a multi-table commit is never observed
//! half-applied. Readers share the lock freely.
//!
//! ## Ordering
//!
//! Rows are never deleted (case lifecycle and both ledgers are append-or-
//! patch only), so a row's slot in its table is its creation order. Every
//! insert is stamped through [`CreationClock`], which makes creation times
//! strictly increasing store-wide even when the wall clock ties within a
//! millisecond — insertion order stays recoverable from the stamps alone.

pub mod counters;
pub mod database;
pub mod document;
pub mod errors;
pub mod search;
pub mod tables;

pub use counters::CounterTable;
pub use database::{Database, DbInner, StoreReadGuard, StoreWriteGuard};
pub use document::{CreationClock, Doc, EntrySeq};
pub use errors::StoreError;
pub use search::SearchIndex;
pub use tables::audit::AuditTable;
pub use tables::cases::{CaseSearchFilter, CaseTable};
pub use tables::signals::SignalTable;
pub use tables::users::{ProfileTable, UserDirectory};
pub use tables::workflow::WorkflowTable;
