//! In-memory identity provider.
//!
//! Maps opaque credential tokens to user identities. Stands in for the real
//! identity collaborator in the runtime wiring and the test suite; the
//! engine only ever sees the `IdentityProvider` port.

use std::collections::HashMap;

use parking_lot::RwLock;
use vigil_types::UserId;

use crate::ports::outbound::{CallerContext, IdentityProvider};

/// Token→identity map behind a lock.
#[derive(Debug, Default)]
pub struct InMemoryIdentityProvider {
    tokens: RwLock<HashMap<String, UserId>>,
}

impl InMemoryIdentityProvider {
    /// New empty provider; every caller is anonymous until registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a credential for a user identity.
    pub fn register(&self, token: impl Into<String>, user_id: UserId) {
        self.tokens.write().insert(token.into(), user_id);
    }

    /// Revoke a credential.
    pub fn revoke(&self, token: &str) {
        self.tokens.write().remove(token);
    }
}

impl IdentityProvider for InMemoryIdentityProvider {
    fn resolve(&self, ctx: &CallerContext) -> Option<UserId> {
        let token = ctx.auth_token.as_deref()?;
        self.tokens.read().get(token).copied()
    }
}
