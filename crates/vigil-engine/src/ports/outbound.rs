//! Outbound ports (driven): what the engine requires from the host.

use vigil_types::{TimestampMs, UserId};

/// Transport-level context accompanying every call.
///
/// Carries whatever the transport knows about the caller: an opaque
/// credential for the identity collaborator to resolve, and the origin
/// address recorded on audit entries.
#[derive(Debug, Clone, Default)]
pub struct CallerContext {
    /// Opaque credential; `None` for anonymous callers.
    pub auth_token: Option<String>,
    /// Origin address, when the transport supplied one.
    pub ip_address: Option<String>,
}

impl CallerContext {
    /// Context with no credential.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context carrying a credential.
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            auth_token: Some(token.into()),
            ip_address: None,
        }
    }

    /// Attach an origin address.
    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }
}

/// The identity collaborator: resolves a caller context to a stable user
/// identity, or to nothing.
///
/// Production: whatever identity provider the host wires in.
/// Testing: `InMemoryIdentityProvider` (adapters).
pub trait IdentityProvider: Send + Sync {
    /// Resolve the caller, if the credential is valid.
    fn resolve(&self, ctx: &CallerContext) -> Option<UserId>;
}

/// Wall-clock source, injectable for tests.
///
/// Production: `SystemTimeSource`. Testing: `ManualTimeSource`.
pub trait TimeSource: Send + Sync {
    /// Current time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> TimestampMs;
}

// Shared handles work as ports, so a harness can keep driving an adapter
// (registering credentials, advancing a manual clock) after the registry
// has taken ownership of its copy.

impl<P: IdentityProvider + ?Sized> IdentityProvider for std::sync::Arc<P> {
    fn resolve(&self, ctx: &CallerContext) -> Option<UserId> {
        (**self).resolve(ctx)
    }
}

impl<T: TimeSource + ?Sized> TimeSource for std::sync::Arc<T> {
    fn now_ms(&self) -> TimestampMs {
        (**self).now_ms()
    }
}
