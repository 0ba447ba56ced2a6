//! The `signals` table.
//!
//! Mutable rows with three predeclared secondary indexes (status, strength,
//! product). Signals carry no ledger of their own; their status patches are
//! recorded by the caller in the audit trail.

use std::collections::{BTreeSet, HashMap};

use vigil_types::{SignalId, SignalRecord, SignalStatus, SignalStrength};

use crate::document::Doc;
use crate::errors::StoreError;

/// Signal rows and their indexes.
#[derive(Debug, Default)]
pub struct SignalTable {
    rows: Vec<Doc<SignalId, SignalRecord>>,
    by_id: HashMap<SignalId, usize>,
    by_status: HashMap<SignalStatus, BTreeSet<usize>>,
    by_strength: HashMap<SignalStrength, BTreeSet<usize>>,
    by_product: HashMap<String, BTreeSet<usize>>,
}

impl SignalTable {
    /// New empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Insert a new row, maintaining every index.
    pub fn insert(&mut self, doc: Doc<SignalId, SignalRecord>) -> Result<(), StoreError> {
        if self.by_id.contains_key(&doc.id) {
            return Err(StoreError::DuplicateSignalId(doc.id));
        }

        let slot = self.rows.len();
        self.by_id.insert(doc.id, slot);
        self.by_status.entry(doc.record.status).or_default().insert(slot);
        self.by_strength
            .entry(doc.record.strength)
            .or_default()
            .insert(slot);
        self.by_product
            .entry(doc.record.product_name.clone())
            .or_default()
            .insert(slot);
        self.rows.push(doc);
        Ok(())
    }

    /// Row by id.
    pub fn get(&self, id: &SignalId) -> Option<&Doc<SignalId, SignalRecord>> {
        self.by_id.get(id).map(|&slot| &self.rows[slot])
    }

    /// Patch the row's status, keeping the status index current. Returns the
    /// status before the patch, or `None` if the signal does not exist.
    pub fn patch_status(&mut self, id: &SignalId, new_status: SignalStatus) -> Option<SignalStatus> {
        let slot = *self.by_id.get(id)?;
        let old_status = self.rows[slot].record.status;

        if let Some(set) = self.by_status.get_mut(&old_status) {
            set.remove(&slot);
        }
        self.by_status.entry(new_status).or_default().insert(slot);

        self.rows[slot].record.status = new_status;
        Some(old_status)
    }

    /// All rows, newest first.
    pub fn scan_all(&self) -> Vec<&Doc<SignalId, SignalRecord>> {
        self.rows.iter().rev().collect()
    }

    /// Rows with this status, newest first.
    pub fn scan_by_status(&self, status: SignalStatus) -> Vec<&Doc<SignalId, SignalRecord>> {
        self.collect_slots(self.by_status.get(&status))
    }

    /// Rows with this strength, newest first.
    pub fn scan_by_strength(&self, strength: SignalStrength) -> Vec<&Doc<SignalId, SignalRecord>> {
        self.collect_slots(self.by_strength.get(&strength))
    }

    /// Rows for this product, newest first.
    pub fn scan_by_product(&self, product_name: &str) -> Vec<&Doc<SignalId, SignalRecord>> {
        self.collect_slots(self.by_product.get(product_name))
    }

    /// Iterate every row in creation order (stats recounts).
    pub fn iter(&self) -> impl Iterator<Item = &Doc<SignalId, SignalRecord>> {
        self.rows.iter()
    }

    fn collect_slots(&self, slots: Option<&BTreeSet<usize>>) -> Vec<&Doc<SignalId, SignalRecord>> {
        slots
            .map(|set| set.iter().rev().map(|&slot| &self.rows[slot]).collect())
            .unwrap_or_default()
    }
}
