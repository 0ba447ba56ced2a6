//! Aggregate statistics.
//!
//! Computed by a full scan and recount on every call — no maintained
//! counters. Acceptable at the data volumes this registry targets; a
//! documented scaling limit.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use vigil_store::Doc;
use vigil_types::{
    CaseId, CaseRecord, CaseStatus, Priority, SignalId, SignalRecord, SignalStatus,
    SignalStrength, TimestampMs,
};

/// Per-status case counts. Keys serialize as the status wire values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CaseStatusBreakdown {
    pub draft: usize,
    pub submitted: usize,
    pub under_review: usize,
    pub approved: usize,
    pub rejected: usize,
    pub closed: usize,
}

impl CaseStatusBreakdown {
    fn bump(&mut self, status: CaseStatus) {
        match status {
            CaseStatus::Draft => self.draft += 1,
            CaseStatus::Submitted => self.submitted += 1,
            CaseStatus::UnderReview => self.under_review += 1,
            CaseStatus::Approved => self.approved += 1,
            CaseStatus::Rejected => self.rejected += 1,
            CaseStatus::Closed => self.closed += 1,
        }
    }
}

/// Per-priority case counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PriorityBreakdown {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub urgent: usize,
}

impl PriorityBreakdown {
    fn bump(&mut self, priority: Priority) {
        match priority {
            Priority::Low => self.low += 1,
            Priority::Medium => self.medium += 1,
            Priority::High => self.high += 1,
            Priority::Urgent => self.urgent += 1,
        }
    }
}

/// Aggregate case statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStats {
    pub total: usize,
    pub by_status: CaseStatusBreakdown,
    pub by_priority: PriorityBreakdown,
    /// Cases flagged as serious.
    pub serious: usize,
    /// Cases created in the current UTC calendar month.
    pub this_month: usize,
}

impl CaseStats {
    /// Recount over every case row. `now` anchors the current-month bucket.
    pub fn recount<'a>(
        cases: impl Iterator<Item = &'a Doc<CaseId, CaseRecord>>,
        now: TimestampMs,
    ) -> Self {
        let mut stats = Self::default();
        for doc in cases {
            stats.total += 1;
            stats.by_status.bump(doc.record.status);
            stats.by_priority.bump(doc.record.priority);
            if doc.record.seriousness {
                stats.serious += 1;
            }
            if same_utc_month(doc.creation_time, now) {
                stats.this_month += 1;
            }
        }
        stats
    }
}

/// Per-status signal counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SignalStatusBreakdown {
    pub detected: usize,
    pub under_evaluation: usize,
    pub confirmed: usize,
    pub refuted: usize,
    pub closed: usize,
}

impl SignalStatusBreakdown {
    fn bump(&mut self, status: SignalStatus) {
        match status {
            SignalStatus::Detected => self.detected += 1,
            SignalStatus::UnderEvaluation => self.under_evaluation += 1,
            SignalStatus::Confirmed => self.confirmed += 1,
            SignalStatus::Refuted => self.refuted += 1,
            SignalStatus::Closed => self.closed += 1,
        }
    }
}

/// Per-strength signal counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StrengthBreakdown {
    pub weak: usize,
    pub moderate: usize,
    pub strong: usize,
}

impl StrengthBreakdown {
    fn bump(&mut self, strength: SignalStrength) {
        match strength {
            SignalStrength::Weak => self.weak += 1,
            SignalStrength::Moderate => self.moderate += 1,
            SignalStrength::Strong => self.strong += 1,
        }
    }
}

/// Aggregate signal statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalStats {
    pub total: usize,
    pub by_status: SignalStatusBreakdown,
    pub by_strength: StrengthBreakdown,
}

impl SignalStats {
    /// Recount over every signal row.
    pub fn recount<'a>(signals: impl Iterator<Item = &'a Doc<SignalId, SignalRecord>>) -> Self {
        let mut stats = Self::default();
        for doc in signals {
            stats.total += 1;
            stats.by_status.bump(doc.record.status);
            stats.by_strength.bump(doc.record.strength);
        }
        stats
    }
}

/// Whether two millisecond stamps fall in the same UTC calendar month.
fn same_utc_month(a: TimestampMs, b: TimestampMs) -> bool {
    match (utc(a), utc(b)) {
        (Some(a), Some(b)) => a.year() == b.year() && a.month() == b.month(),
        _ => false,
    }
}

fn utc(ms: TimestampMs) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(ms)
}
