//! The user facade: profiles, capability checks, identity-adjacent paths.
//!
//! Two identity-bootstrapping operations deliberately do not error on an
//! unresolved caller: `get_current_user` returns `None` and
//! `update_last_login` no-ops, because UI shells call both before knowing
//! whether anyone is signed in. Everything else starts at the identity gate.

use std::sync::Arc;

use tracing::{info, warn};
use vigil_store::Doc;
use vigil_types::{
    AuditAction, AuditEntityType, AuditLogEntry, Permission, ProfileId, Role, UserProfile,
};

use crate::domain::errors::RegistryError;
use crate::domain::permissions::permissions_for;
use crate::domain::projections::{CurrentUser, UserView};
use crate::ports::inbound::UserApi;
use crate::ports::outbound::{CallerContext, IdentityProvider, TimeSource};
use crate::service::RegistryContext;

/// Implements [`UserApi`] over the shared context.
pub struct UserService<I: IdentityProvider, T: TimeSource> {
    ctx: Arc<RegistryContext<I, T>>,
}

impl<I: IdentityProvider, T: TimeSource> UserService<I, T> {
    pub(crate) fn new(ctx: Arc<RegistryContext<I, T>>) -> Self {
        Self { ctx }
    }
}

impl<I: IdentityProvider, T: TimeSource> Clone for UserService<I, T> {
    fn clone(&self) -> Self {
        Self {
            ctx: Arc::clone(&self.ctx),
        }
    }
}

impl<I: IdentityProvider, T: TimeSource> UserApi for UserService<I, T> {
    fn get_current_user(&self, ctx: &CallerContext) -> Option<CurrentUser> {
        let user_id = self.ctx.identity.resolve(ctx)?;

        let db = self.ctx.db.read();
        let account = db.directory.get(&user_id);
        let profile = db
            .profiles
            .get_by_user(&user_id)
            .map(|doc| &doc.record);
        Some(CurrentUser::project(user_id, account, profile))
    }

    fn create_user_profile(
        &self,
        ctx: &CallerContext,
        role: Role,
        department: String,
    ) -> Result<ProfileId, RegistryError> {
        let caller = self.ctx.require_caller(ctx)?;
        let now = self.ctx.time.now_ms();

        // The permission set is fixed here, once; checks read the stored
        // set from now on.
        let permissions = permissions_for(role);

        let mut db = self.ctx.db.write();
        let id = ProfileId::new();
        let stamp = db.stamp(now);
        db.profiles
            .insert(Doc::new(
                id,
                stamp,
                UserProfile {
                    user_id: caller,
                    role,
                    department,
                    permissions,
                    is_active: true,
                    last_login: None,
                },
            ))
            .map_err(|_| RegistryError::ProfileExists { user_id: caller })?;

        let stamp = db.stamp(now);
        db.audit.append(
            AuditLogEntry {
                entity_type: AuditEntityType::User,
                entity_id: caller.to_string(),
                action: AuditAction::CreateProfile,
                changes: None,
                performed_by: caller,
                timestamp: now,
                ip_address: ctx.ip_address.clone(),
            },
            stamp,
        );
        drop(db);

        info!(user_id = %caller, role = %role, "user profile created");
        Ok(id)
    }

    fn update_last_login(&self, ctx: &CallerContext) {
        let Some(user_id) = self.ctx.identity.resolve(ctx) else {
            return;
        };
        let now = self.ctx.time.now_ms();
        self.ctx.db.write().profiles.patch_last_login(&user_id, now);
    }

    fn get_all_users(&self, ctx: &CallerContext) -> Result<Vec<UserView>, RegistryError> {
        let caller = self.ctx.require_caller(ctx)?;

        let db = self.ctx.db.read();
        let authorized = db
            .profiles
            .get_by_user(&caller)
            .is_some_and(|doc| doc.record.has_permission(Permission::ManageUsers));
        if !authorized {
            warn!(user_id = %caller, "user listing denied: missing manage_users");
            return Err(RegistryError::Forbidden {
                required: Permission::ManageUsers,
            });
        }

        Ok(db
            .profiles
            .scan_all()
            .into_iter()
            .map(|doc| UserView::project(doc, &db.directory))
            .collect())
    }
}
