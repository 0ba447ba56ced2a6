//! The service layer: three facades over one shared context.
//!
//! Every mutation acquires exactly one store write guard, completes all
//! fallible validation before its first table write, and commits the entity
//! mutation, the workflow append (when status or assignment changed), and
//! the audit append back-to-back under that guard. Queries take a read
//! guard and join rows with resolved display names.

mod cases;
mod signals;
mod users;

use std::sync::Arc;

use vigil_store::Database;
use vigil_types::UserId;

use crate::config::RegistryConfig;
use crate::domain::errors::RegistryError;
use crate::ports::outbound::{CallerContext, IdentityProvider, TimeSource};

pub use cases::CaseService;
pub use signals::SignalService;
pub use users::UserService;

/// Shared state behind the three facades: the store, the injected
/// collaborator ports, and the configuration.
pub struct RegistryContext<I: IdentityProvider, T: TimeSource> {
    pub(crate) db: Arc<Database>,
    pub(crate) identity: I,
    pub(crate) time: T,
    pub(crate) config: RegistryConfig,
}

impl<I: IdentityProvider, T: TimeSource> RegistryContext<I, T> {
    /// The identity gate: resolve the caller or fail `Unauthenticated`
    /// before any data access.
    pub(crate) fn require_caller(&self, ctx: &CallerContext) -> Result<UserId, RegistryError> {
        self.identity
            .resolve(ctx)
            .ok_or(RegistryError::Unauthenticated)
    }
}

/// The assembled registry: owns the context, hands out facades.
pub struct Registry<I: IdentityProvider, T: TimeSource> {
    ctx: Arc<RegistryContext<I, T>>,
}

impl<I: IdentityProvider, T: TimeSource> Registry<I, T> {
    /// Wire the registry together.
    pub fn new(db: Arc<Database>, identity: I, time: T, config: RegistryConfig) -> Self {
        Self {
            ctx: Arc::new(RegistryContext {
                db,
                identity,
                time,
                config,
            }),
        }
    }

    /// The case facade.
    pub fn cases(&self) -> CaseService<I, T> {
        CaseService::new(Arc::clone(&self.ctx))
    }

    /// The signal facade.
    pub fn signals(&self) -> SignalService<I, T> {
        SignalService::new(Arc::clone(&self.ctx))
    }

    /// The user facade.
    pub fn users(&self) -> UserService<I, T> {
        UserService::new(Arc::clone(&self.ctx))
    }

    /// The underlying store (runtime seeding and tests).
    pub fn database(&self) -> &Arc<Database> {
        &self.ctx.db
    }
}
