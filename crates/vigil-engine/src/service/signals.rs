//! The signal facade: recording and evaluating safety signals.
//!
//! Signals have no workflow ledger; every mutation still lands in the audit
//! trail. Audit entries for signals carry `entityType = "case"` with the
//! signal id in `entityId` — the entity-type enum is closed at three
//! members and downstream consumers rely on that shape.

use std::sync::Arc;

use tracing::{debug, info};
use vigil_store::Doc;
use vigil_types::{
    AuditAction, AuditEntityType, AuditLogEntry, FieldChange, SignalId, SignalStatus,
};

use crate::domain::errors::RegistryError;
use crate::domain::projections::{SignalStats, SignalSummary};
use crate::domain::requests::{CreateSignalInput, SignalListFilter};
use crate::ports::inbound::SignalApi;
use crate::ports::outbound::{CallerContext, IdentityProvider, TimeSource};
use crate::service::RegistryContext;

/// Implements [`SignalApi`] over the shared context.
pub struct SignalService<I: IdentityProvider, T: TimeSource> {
    ctx: Arc<RegistryContext<I, T>>,
}

impl<I: IdentityProvider, T: TimeSource> SignalService<I, T> {
    pub(crate) fn new(ctx: Arc<RegistryContext<I, T>>) -> Self {
        Self { ctx }
    }
}

impl<I: IdentityProvider, T: TimeSource> Clone for SignalService<I, T> {
    fn clone(&self) -> Self {
        Self {
            ctx: Arc::clone(&self.ctx),
        }
    }
}

impl<I: IdentityProvider, T: TimeSource> SignalApi for SignalService<I, T> {
    fn create_signal(
        &self,
        ctx: &CallerContext,
        input: CreateSignalInput,
    ) -> Result<SignalId, RegistryError> {
        let caller = self.ctx.require_caller(ctx)?;
        let now = self.ctx.time.now_ms();

        let mut db = self.ctx.db.write();
        let id = SignalId::new();
        let record = input.into_record(caller);
        let name = record.signal_name.clone();

        let stamp = db.stamp(now);
        db.signals.insert(Doc::new(id, stamp, record))?;

        let stamp = db.stamp(now);
        db.audit.append(
            AuditLogEntry {
                entity_type: AuditEntityType::Case,
                entity_id: id.to_string(),
                action: AuditAction::CreateSignal,
                changes: None,
                performed_by: caller,
                timestamp: now,
                ip_address: ctx.ip_address.clone(),
            },
            stamp,
        );
        drop(db);

        info!(signal_id = %id, signal_name = %name, "signal created");
        Ok(id)
    }

    fn get_signals(
        &self,
        ctx: &CallerContext,
        filter: &SignalListFilter,
    ) -> Result<Vec<SignalSummary>, RegistryError> {
        self.ctx.require_caller(ctx)?;

        let db = self.ctx.db.read();
        // Single-predicate index selection: status > strength > product.
        let docs = if let Some(status) = filter.status {
            db.signals.scan_by_status(status)
        } else if let Some(strength) = filter.strength {
            db.signals.scan_by_strength(strength)
        } else if let Some(product) = filter.product_name.as_deref() {
            db.signals.scan_by_product(product)
        } else {
            db.signals.scan_all()
        };

        debug!(matched = docs.len(), "signal list");
        Ok(docs
            .into_iter()
            .map(|doc| SignalSummary::project(doc, &db.directory))
            .collect())
    }

    fn update_signal_status(
        &self,
        ctx: &CallerContext,
        id: &SignalId,
        new_status: SignalStatus,
    ) -> Result<(), RegistryError> {
        let caller = self.ctx.require_caller(ctx)?;
        let now = self.ctx.time.now_ms();

        let mut db = self.ctx.db.write();
        let old_status = db
            .signals
            .patch_status(id, new_status)
            .ok_or(RegistryError::SignalNotFound { id: *id })?;

        let stamp = db.stamp(now);
        db.audit.append(
            AuditLogEntry {
                entity_type: AuditEntityType::Case,
                entity_id: id.to_string(),
                action: AuditAction::UpdateSignalStatus,
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

        info!(signal_id = %id, from = %old_status, to = %new_status, "signal status updated");
        Ok(())
    }

    fn get_signal_stats(&self, ctx: &CallerContext) -> Result<SignalStats, RegistryError> {
        self.ctx.require_caller(ctx)?;
        let db = self.ctx.db.read();
        Ok(SignalStats::recount(db.signals.iter()))
    }
}
