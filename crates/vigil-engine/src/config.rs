//! Engine configuration.

use crate::domain::transitions::TransitionPolicy;

/// Tunables for the registry services.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Whether off-path status transitions are rejected.
    pub transition_policy: TransitionPolicy,
    /// Default cap on case list results when the caller passes no limit.
    pub default_case_limit: usize,
    /// Cap on full-text search results.
    pub search_result_limit: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            transition_policy: TransitionPolicy::Permissive,
            default_case_limit: 50,
            search_result_limit: 20,
        }
    }
}
