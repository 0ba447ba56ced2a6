//! Case-number allocation.
//!
//! External case numbers read `PV-<timestamp_ms>-<seq>` with the sequence
//! zero-padded to four digits (growing naturally past 9999). The sequence
//! comes from a store-transactional counter incremented inside the same
//! write guard as the insert, so concurrent creations in the same instant
//! still get distinct numbers.

use vigil_store::DbInner;
use vigil_types::TimestampMs;

/// Fixed display prefix.
pub const CASE_NUMBER_PREFIX: &str = "PV";

/// Name of the transactional counter backing the sequence.
pub const CASE_NUMBER_COUNTER: &str = "caseNumbers";

/// Render a case number from its parts.
pub fn format_case_number(timestamp: TimestampMs, seq: u64) -> String {
    format!("{CASE_NUMBER_PREFIX}-{timestamp}-{seq:04}")
}

/// Allocate a fresh, unused case number inside the current write
/// transaction.
///
/// The counter is strictly increasing, so the collision check loop can only
/// retry past numbers that already exist and always terminates.
pub fn allocate_case_number(db: &mut DbInner, timestamp: TimestampMs) -> String {
    loop {
        let seq = db.counters.increment(CASE_NUMBER_COUNTER);
        let number = format_case_number(timestamp, seq);
        if !db.cases.contains_number(&number) {
            return number;
        }
    }
}
