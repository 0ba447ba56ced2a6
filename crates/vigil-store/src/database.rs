//! The database: every table behind one lock.
//!
//! A write guard is the transaction boundary. Every logical operation
//! acquires exactly one guard, completes all fallible validation before its
//! first table write, and then applies its writes back-to-back, so a
//! multi-table commit (entity patch + workflow append + audit append) is
//! never observed half-applied. Writers are exclusive; readers share.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use vigil_types::TimestampMs;

use crate::counters::CounterTable;
use crate::document::CreationClock;
use crate::tables::audit::AuditTable;
use crate::tables::cases::CaseTable;
use crate::tables::signals::SignalTable;
use crate::tables::users::{ProfileTable, UserDirectory};
use crate::tables::workflow::WorkflowTable;

/// All tables, the counters, and the creation clock.
#[derive(Debug, Default)]
pub struct DbInner {
    /// Case rows and indexes.
    pub cases: CaseTable,
    /// Append-only workflow ledger.
    pub workflow: WorkflowTable,
    /// Append-only audit ledger.
    pub audit: AuditTable,
    /// Signal rows and indexes.
    pub signals: SignalTable,
    /// User profiles (unique per identity).
    pub profiles: ProfileTable,
    /// Display rows for user identities.
    pub directory: UserDirectory,
    /// Named transactional counters.
    pub counters: CounterTable,
    clock: CreationClock,
}

impl DbInner {
    /// Next creation stamp: follows `now` but is strictly increasing
    /// store-wide, so insertion order is always recoverable.
    pub fn stamp(&mut self, now: TimestampMs) -> TimestampMs {
        self.clock.next(now)
    }
}

/// Shared read access to the tables.
pub type StoreReadGuard<'a> = RwLockReadGuard<'a, DbInner>;

/// Exclusive write access — the transaction boundary.
pub type StoreWriteGuard<'a> = RwLockWriteGuard<'a, DbInner>;

/// The store: [`DbInner`] behind a `parking_lot::RwLock`.
#[derive(Debug, Default)]
pub struct Database {
    inner: RwLock<DbInner>,
}

impl Database {
    /// New empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire shared read access.
    pub fn read(&self) -> StoreReadGuard<'_> {
        self.inner.read()
    }

    /// Acquire exclusive write access. Hold one guard per logical
    /// operation; validate before the first table write.
    pub fn write(&self) -> StoreWriteGuard<'_> {
        self.inner.write()
    }
}
