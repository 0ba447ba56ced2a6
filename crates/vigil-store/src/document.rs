//! Document metadata shared by all tables.

use serde::Serialize;
use vigil_types::TimestampMs;

/// Sequence identity of an append-only ledger entry.
///
/// Ledger rows have no external id; their position in the ledger is their
/// identity, assigned at append time and never reused.
pub type EntrySeq = u64;

/// A stored row: table-specific id, store-assigned creation stamp, record.
///
/// Serializes as the record's own fields with `id` and `creationTime`
/// alongside them, which is the shape list projections build on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Doc<I, T> {
    /// Row identity.
    pub id: I,
    /// Store-assigned creation stamp (strictly increasing store-wide).
    pub creation_time: TimestampMs,
    /// The persisted record.
    #[serde(flatten)]
    pub record: T,
}

impl<I, T> Doc<I, T> {
    /// Bundle a record with its identity and creation stamp.
    pub fn new(id: I, creation_time: TimestampMs, record: T) -> Self {
        Self {
            id,
            creation_time,
            record,
        }
    }
}

/// Issues strictly increasing creation stamps.
///
/// Stamps follow the wall clock but never repeat or regress: two inserts in
/// the same millisecond get consecutive stamps, so creation order is total
/// and recoverable from the stamps alone.
#[derive(Debug, Default)]
pub struct CreationClock {
    last: TimestampMs,
}

impl CreationClock {
    /// New clock; the first stamp will be at least 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Next stamp: `max(now, last + 1)`.
    pub fn next(&mut self, now: TimestampMs) -> TimestampMs {
        self.last = now.max(self.last + 1);
        self.last
    }
}
