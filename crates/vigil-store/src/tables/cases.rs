//! The `cases` table.
//!
//! Mutable rows with five predeclared secondary indexes (unique case number,
//! status, priority, assignee, product) and a token-prefix search index over
//! the `adverseEvent` field. Rows are patched in place and never deleted, so
//! a row's slot doubles as its creation order.

use std::collections::{BTreeSet, HashMap};

use vigil_types::{CaseId, CaseRecord, CaseStatus, Priority, TimestampMs, UserId};

use crate::document::Doc;
use crate::errors::StoreError;
use crate::search::SearchIndex;

/// Equality filters composable into a full-text search pass.
///
/// Unlike list filtering, search applies *all* supplied filters, not just
/// the first in precedence order.
#[derive(Debug, Clone, Default)]
pub struct CaseSearchFilter {
    /// Keep only hits with this status.
    pub status: Option<CaseStatus>,
    /// Keep only hits with this priority.
    pub priority: Option<Priority>,
    /// Keep only hits with this product name (exact match).
    pub product_name: Option<String>,
}

/// Case rows and their indexes.
#[derive(Debug, Default)]
pub struct CaseTable {
    rows: Vec<Doc<CaseId, CaseRecord>>,
    by_id: HashMap<CaseId, usize>,
    by_number: HashMap<String, usize>,
    by_status: HashMap<CaseStatus, BTreeSet<usize>>,
    by_priority: HashMap<Priority, BTreeSet<usize>>,
    by_assignee: HashMap<UserId, BTreeSet<usize>>,
    by_product: HashMap<String, BTreeSet<usize>>,
    search: SearchIndex,
}

impl CaseTable {
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

    /// Whether a case with this external number exists.
    pub fn contains_number(&self, case_number: &str) -> bool {
        self.by_number.contains_key(case_number)
    }

    /// Insert a new row, maintaining every index.
    ///
    /// Fails without writing anything if the id or case number is taken.
    pub fn insert(&mut self, doc: Doc<CaseId, CaseRecord>) -> Result<(), StoreError> {
        if self.by_id.contains_key(&doc.id) {
            return Err(StoreError::DuplicateCaseId(doc.id));
        }
        if self.by_number.contains_key(&doc.record.case_number) {
            return Err(StoreError::DuplicateCaseNumber(
                doc.record.case_number.clone(),
            ));
        }

        let slot = self.rows.len();
        self.by_id.insert(doc.id, slot);
        self.by_number.insert(doc.record.case_number.clone(), slot);
        self.by_status.entry(doc.record.status).or_default().insert(slot);
        self.by_priority
            .entry(doc.record.priority)
            .or_default()
            .insert(slot);
        if let Some(assignee) = doc.record.assigned_to {
            self.by_assignee.entry(assignee).or_default().insert(slot);
        }
        self.by_product
            .entry(doc.record.product_name.clone())
            .or_default()
            .insert(slot);
        self.search.index(slot, &doc.record.adverse_event);
        self.rows.push(doc);
        Ok(())
    }

    /// Row by id.
    pub fn get(&self, id: &CaseId) -> Option<&Doc<CaseId, CaseRecord>> {
        self.by_id.get(id).map(|&slot| &self.rows[slot])
    }

    /// Patch the row's status and `lastModifiedBy`, keeping the status index
    /// current. Returns the status before the patch, or `None` if the case
    /// does not exist.
    pub fn patch_status(
        &mut self,
        id: &CaseId,
        new_status: CaseStatus,
        modified_by: UserId,
    ) -> Option<CaseStatus> {
        let slot = *self.by_id.get(id)?;
        let old_status = self.rows[slot].record.status;

        if let Some(set) = self.by_status.get_mut(&old_status) {
            set.remove(&slot);
        }
        self.by_status.entry(new_status).or_default().insert(slot);

        let record = &mut self.rows[slot].record;
        record.status = new_status;
        record.last_modified_by = modified_by;
        Some(old_status)
    }

    /// Patch the row's assignee and `lastModifiedBy`, keeping the assignee
    /// index current. Returns the assignee before the patch, or `None` if
    /// the case does not exist.
    pub fn patch_assignee(
        &mut self,
        id: &CaseId,
        assignee: UserId,
        modified_by: UserId,
    ) -> Option<Option<UserId>> {
        let slot = *self.by_id.get(id)?;
        let old_assignee = self.rows[slot].record.assigned_to;

        if let Some(old) = old_assignee {
            if let Some(set) = self.by_assignee.get_mut(&old) {
                set.remove(&slot);
            }
        }
        self.by_assignee.entry(assignee).or_default().insert(slot);

        let record = &mut self.rows[slot].record;
        record.assigned_to = Some(assignee);
        record.last_modified_by = modified_by;
        Some(old_assignee)
    }

    /// All rows, newest first.
    pub fn scan_all(&self) -> Vec<&Doc<CaseId, CaseRecord>> {
        self.rows.iter().rev().collect()
    }

    /// Rows with this status, newest first.
    pub fn scan_by_status(&self, status: CaseStatus) -> Vec<&Doc<CaseId, CaseRecord>> {
        self.collect_slots(self.by_status.get(&status))
    }

    /// Rows with this priority, newest first.
    pub fn scan_by_priority(&self, priority: Priority) -> Vec<&Doc<CaseId, CaseRecord>> {
        self.collect_slots(self.by_priority.get(&priority))
    }

    /// Rows assigned to this user, newest first.
    pub fn scan_by_assignee(&self, assignee: &UserId) -> Vec<&Doc<CaseId, CaseRecord>> {
        self.collect_slots(self.by_assignee.get(assignee))
    }

    /// Rows for this product, newest first.
    pub fn scan_by_product(&self, product_name: &str) -> Vec<&Doc<CaseId, CaseRecord>> {
        self.collect_slots(self.by_product.get(product_name))
    }

    /// Full-text search over `adverseEvent` with the supplied equality
    /// filters applied to every hit. Newest first.
    pub fn search(&self, term: &str, filter: &CaseSearchFilter) -> Vec<&Doc<CaseId, CaseRecord>> {
        self.search
            .matching_slots(term)
            .into_iter()
            .rev()
            .map(|slot| &self.rows[slot])
            .filter(|doc| filter.status.is_none_or(|s| doc.record.status == s))
            .filter(|doc| filter.priority.is_none_or(|p| doc.record.priority == p))
            .filter(|doc| {
                filter
                    .product_name
                    .as_deref()
                    .is_none_or(|p| doc.record.product_name == p)
            })
            .collect()
    }

    /// Iterate every row in creation order (stats recounts).
    pub fn iter(&self) -> impl Iterator<Item = &Doc<CaseId, CaseRecord>> {
        self.rows.iter()
    }

    fn collect_slots(&self, slots: Option<&BTreeSet<usize>>) -> Vec<&Doc<CaseId, CaseRecord>> {
        slots
            .map(|set| set.iter().rev().map(|&slot| &self.rows[slot]).collect())
            .unwrap_or_default()
    }
}
