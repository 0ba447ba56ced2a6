//! The `caseWorkflow` ledger.
//!
//! Append-only: entries are assigned a sequence number at append time and
//! never touched again. One secondary index maps a case to its entries.

use std::collections::HashMap;

use vigil_types::{CaseId, TimestampMs, WorkflowEntry};

use crate::document::{Doc, EntrySeq};

/// Workflow entries and the per-case index.
#[derive(Debug, Default)]
pub struct WorkflowTable {
    entries: Vec<Doc<EntrySeq, WorkflowEntry>>,
    by_case: HashMap<CaseId, Vec<usize>>,
}

impl WorkflowTable {
    /// New empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry and return its sequence number.
    pub fn append(&mut self, entry: WorkflowEntry, creation_time: TimestampMs) -> EntrySeq {
        let slot = self.entries.len();
        let seq = slot as EntrySeq;
        self.by_case.entry(entry.case_id).or_default().push(slot);
        self.entries.push(Doc::new(seq, creation_time, entry));
        seq
    }

    /// Entries for one case, newest first.
    ///
    /// Creation stamps are strictly increasing, so newest-first by slot is
    /// also timestamp-descending with insertion order breaking ties.
    pub fn for_case(&self, case_id: &CaseId) -> Vec<&Doc<EntrySeq, WorkflowEntry>> {
        self.by_case
            .get(case_id)
            .map(|slots| slots.iter().rev().map(|&slot| &self.entries[slot]).collect())
            .unwrap_or_default()
    }

    /// Iterate every entry in append order.
    pub fn iter(&self) -> impl Iterator<Item = &Doc<EntrySeq, WorkflowEntry>> {
        self.entries.iter()
    }
}
