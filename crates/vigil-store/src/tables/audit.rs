//! The `auditLog` ledger.
//!
//! Append-only and independent of workflow semantics: one entry per
//! mutating call, across every entity type. Indexed by (entity type,
//! entity id) for per-entity trails.

use std::collections::HashMap;

use vigil_types::{AuditEntityType, AuditLogEntry, TimestampMs};

use crate::document::{Doc, EntrySeq};

/// Audit entries and the per-entity index.
#[derive(Debug, Default)]
pub struct AuditTable {
    entries: Vec<Doc<EntrySeq, AuditLogEntry>>,
    by_entity: HashMap<(AuditEntityType, String), Vec<usize>>,
}

impl AuditTable {
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
    pub fn append(&mut self, entry: AuditLogEntry, creation_time: TimestampMs) -> EntrySeq {
        let slot = self.entries.len();
        let seq = slot as EntrySeq;
        self.by_entity
            .entry((entry.entity_type, entry.entity_id.clone()))
            .or_default()
            .push(slot);
        self.entries.push(Doc::new(seq, creation_time, entry));
        seq
    }

    /// Trail for one entity, newest first.
    pub fn for_entity(
        &self,
        entity_type: AuditEntityType,
        entity_id: &str,
    ) -> Vec<&Doc<EntrySeq, AuditLogEntry>> {
        self.by_entity
            .get(&(entity_type, entity_id.to_owned()))
            .map(|slots| slots.iter().rev().map(|&slot| &self.entries[slot]).collect())
            .unwrap_or_default()
    }

    /// Iterate every entry in append order.
    pub fn iter(&self) -> impl Iterator<Item = &Doc<EntrySeq, AuditLogEntry>> {
        self.entries.iter()
    }
}
