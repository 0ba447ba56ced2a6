//! Time-source adapters.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use vigil_types::TimestampMs;

use crate::ports::outbound::TimeSource;

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_ms(&self) -> TimestampMs {
        Utc::now().timestamp_millis()
    }
}

/// A hand-advanced clock for tests: time stands still until told otherwise.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    now: AtomicI64,
}

impl ManualTimeSource {
    /// Clock frozen at `now`.
    pub fn starting_at(now: TimestampMs) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
    }

    /// Jump to an absolute time.
    pub fn set(&self, now: TimestampMs) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Advance by `delta` milliseconds.
    pub fn advance(&self, delta: TimestampMs) {
        self.now.fetch_add(delta, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now_ms(&self) -> TimestampMs {
        self.now.load(Ordering::SeqCst)
    }
}
