//! Outbound-port adapters.

pub mod identity;
pub mod time;

pub use identity::InMemoryIdentityProvider;
pub use time::{ManualTimeSource, SystemTimeSource};
