//! The case facade: lifecycle mutations and retrieval.

use std::sync::Arc;

use tracing::{debug, info};
use vigil_store::{CaseSearchFilter, Doc};
use vigil_types::{
    AuditAction, AuditEntityType, AuditLogEntry, CaseId, CaseStatus, FieldChange, UserId,
    WorkflowEntry,
};

use crate::domain::errors::RegistryError;
use crate::domain::numbering;
use crate::domain::projections::{CaseDetail, CaseHit, CaseStats, CaseSummary, WorkflowEntryView};
use crate::domain::requests::{CaseListFilter, CreateCaseInput};
use crate::ports::inbound::CaseApi;
use crate::ports::outbound::{CallerContext, IdentityProvider, TimeSource};
use crate::service::RegistryContext;

/// Implements [`CaseApi`] over the shared context.
pub struct CaseService<I: IdentityProvider, T: TimeSource> {
    ctx: Arc<RegistryContext<I, T>>,
}

impl<I: IdentityProvider, T: TimeSource> CaseService<I, T> {
    pub(crate) fn new(ctx: Arc<RegistryContext<I, T>>) -> Self {
        Self { ctx }
    }
}

impl<I: IdentityProvider, T: TimeSource> Clone for CaseService<I, T> {
    fn clone(&self) -> Self {
        Self {
            ctx: Arc::clone(&self.ctx),
        }
    }
}

impl<I: IdentityProvider, T: TimeSource> CaseApi for CaseService<I, T> {
    fn create_case(
        &self,
        ctx: &CallerContext,
        input: CreateCaseInput,
    ) -> Result<CaseId, RegistryError> {
        let caller = self.ctx.require_caller(ctx)?;
        let now = self.ctx.time.now_ms();

        let mut db = self.ctx.db.write();
        let case_number = numbering::allocate_case_number(&mut db, now);
        let id = CaseId::new();
        let record = input.into_record(case_number.clone(), caller);
        let status = record.status;

        let stamp = db.stamp(now);
        db.cases.insert(Doc::new(id, stamp, record))?;

        let stamp = db.stamp(now);
        db.workflow.append(
            WorkflowEntry {
                case_id: id,
                from_status: None,
                to_status: status,
                action: "Case created".to_owned(),
                comments: None,
                performed_by: caller,
                timestamp: now,
            },
            stamp,
        );

        let stamp = db.stamp(now);
        db.audit.append(
            AuditLogEntry {
                entity_type: AuditEntityType::Case,
                entity_id: id.to_string(),
                action: AuditAction::Create,
                changes: None,
                performed_by: caller,
                timestamp: now,
                ip_address: ctx.ip_address.clone(),
            },
            stamp,
        );
        drop(db);

        info!(case_id = %id, case_number = %case_number, "case created");
        Ok(id)
    }

    fn get_cases(
        &self,
        ctx: &CallerContext,
        filter: &CaseListFilter,
        limit: Option<usize>,
    ) -> Result<Vec<CaseSummary>, RegistryError> {
        self.ctx.require_caller(ctx)?;
        let limit = limit.unwrap_or(self.ctx.config.default_case_limit);

        let db = self.ctx.db.read();
        // Single-predicate index selection: status > priority > assignee.
        let docs = if let Some(status) = filter.status {
            db.cases.scan_by_status(status)
        } else if let Some(priority) = filter.priority {
            db.cases.scan_by_priority(priority)
        } else if let Some(assignee) = filter.assigned_to {
            db.cases.scan_by_assignee(&assignee)
        } else {
            db.cases.scan_all()
        };

        debug!(matched = docs.len(), limit, "case list");
        Ok(docs
            .into_iter()
            .take(limit)
            .map(|doc| CaseSummary::project(doc, &db.directory))
            .collect())
    }

    fn get_case(&self, ctx: &CallerContext, id: &CaseId) -> Result<CaseDetail, RegistryError> {
        self.ctx.require_caller(ctx)?;

        let db = self.ctx.db.read();
        let doc = db
            .cases
            .get(id)
            .ok_or(RegistryError::CaseNotFound { id: *id })?;

        let workflow = db
            .workflow
            .for_case(id)
            .into_iter()
            .map(|entry| WorkflowEntryView::project(entry, &db.directory))
            .collect();

        Ok(CaseDetail {
            case: CaseSummary::project(doc, &db.directory),
            workflow,
        })
    }

    fn update_case_status(
        &self,
        ctx: &CallerContext,
        id: &CaseId,
        new_status: CaseStatus,
        comments: Option<String>,
    ) -> Result<(), RegistryError> {
        let caller = self.ctx.require_caller(ctx)?;
        let now = self.ctx.time.now_ms();

        let mut db = self.ctx.db.write();
        let old_status = db
            .cases
            .get(id)
            .ok_or(RegistryError::CaseNotFound { id: *id })?
            .record
            .status;
        if !self.ctx.config.transition_policy.allows(old_status, new_status) {
            return Err(RegistryError::InvalidTransition {
                from: old_status,
                to: new_status,
            });
        }

        db.cases.patch_status(id, new_status, caller);

        let stamp = db.stamp(now);
        db.workflow.append(
            WorkflowEntry {
                case_id: *id,
                from_status: Some(old_status),
                to_status: new_status,
                action: format!("Status changed from {old_status} to {new_status}"),
                comments,
                performed_by: caller,
                timestamp: now,
            },
            stamp,
        );

        let stamp = db.stamp(now);
        db.audit.append(
            AuditLogEntry {
                entity_type: AuditEntityType::Case,
                entity_id: id.to_string(),
                action: AuditAction::UpdateStatus,
                changes: Some(FieldChange {
                    field: "status".to_owned(),
                    old_value: Some(old_status.to_string()),
                    new_value: Some(new_status.to_string()),
                }),
                performed_by: caller,
                timestamp: now,
                ip_address: ctx.ip_address.clone(),
            },
            stamp,
        );
        drop(db);

        info!(case_id = %id, from = %old_status, to = %new_status, "case status updated");
        Ok(())
    }

    fn assign_case(
        &self,
        ctx: &CallerContext,
        id: &CaseId,
        user_id: UserId,
    ) -> Result<(), RegistryError> {
        let caller = self.ctx.require_caller(ctx)?;
        let now = self.ctx.time.now_ms();

        let mut db = self.ctx.db.write();
        let current_status = db
            .cases
            .get(id)
            .ok_or(RegistryError::CaseNotFound { id: *id })?
            .record
            .status;
        if !db.directory.contains(&user_id) {
            return Err(RegistryError::UserNotFound { id: user_id });
        }
        let assignee_name = db
            .directory
            .display_name(&user_id)
            .unwrap_or_else(|| user_id.to_string());

        let old_assignee = db
            .cases
            .patch_assignee(id, user_id, caller)
            .flatten();

        let stamp = db.stamp(now);
        db.workflow.append(
            WorkflowEntry {
                case_id: *id,
                from_status: Some(current_status),
                to_status: current_status,
                action: format!("Case assigned to {assignee_name}"),
                comments: None,
                performed_by: caller,
                timestamp: now,
            },
            stamp,
        );

        let stamp = db.stamp(now);
        db.audit.append(
            AuditLogEntry {
                entity_type: AuditEntityType::Case,
                entity_id: id.to_string(),
                action: AuditAction::Assign,
                changes: Some(FieldChange {
                    field: "assignedTo".to_owned(),
                    old_value: Some(
                        old_assignee.map(|u| u.to_string()).unwrap_or_default(),
                    ),
                    new_value: Some(user_id.to_string()),
                }),
                performed_by: caller,
                timestamp: now,
                ip_address: ctx.ip_address.clone(),
            },
            stamp,
        );
        drop(db);

        info!(case_id = %id, assignee = %user_id, "case assigned");
        Ok(())
    }

    fn search_cases(
        &self,
        ctx: &CallerContext,
        term: &str,
        filter: &CaseSearchFilter,
    ) -> Result<Vec<CaseHit>, RegistryError> {
        self.ctx.require_caller(ctx)?;

        let db = self.ctx.db.read();
        let hits = db.cases.search(term, filter);
        debug!(term, matched = hits.len(), "case search");
        Ok(hits
            .into_iter()
            .take(self.ctx.config.search_result_limit)
            .cloned()
            .collect())
    }

    fn get_case_stats(&self, ctx: &CallerContext) -> Result<CaseStats, RegistryError> {
        self.ctx.require_caller(ctx)?;
        let now = self.ctx.time.now_ms();

        let db = self.ctx.db.read();
        Ok(CaseStats::recount(db.cases.iter(), now))
    }
}
