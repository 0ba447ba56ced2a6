//! Cross-crate integration tests, one module per property cluster.

pub mod authorization;
pub mod ledgers;
pub mod queries;
pub mod stats;
