//! Named transactional counters.
//!
//! Backs case-number allocation: incrementing inside the write guard that
//! also performs the insert closes the count-then-insert race that a
//! scan-and-count scheme would have under concurrent creation.

use std::collections::HashMap;

/// Monotonic named counters.
#[derive(Debug, Default)]
pub struct CounterTable {
    values: HashMap<String, u64>,
}

impl CounterTable {
    /// New empty table; every counter starts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment `name` and return the new value (first call returns 1).
    pub fn increment(&mut self, name: &str) -> u64 {
        let value = self.values.entry(name.to_owned()).or_insert(0);
        *value += 1;
        *value
    }

    /// Current value of `name` without incrementing (0 if never touched).
    pub fn peek(&self, name: &str) -> u64 {
        self.values.get(name).copied().unwrap_or(0)
    }
}
