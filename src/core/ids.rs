//! Sequential work-item identifiers (`order_001`, `t_014`, ...).

use serde::{Deserialize, Serialize};

/// Monotonic id counter owned by a generator.
///
/// Ids are `<prefix>_<n>` with `n` zero-padded to three digits and
/// starting at 1. Past 999 the number simply grows wider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCounter {
    prefix: String,
    issued: u32,
}

impl IdCounter {
    /// Create a counter that has issued nothing yet.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            issued: 0,
        }
    }

    /// Issue the next id.
    pub fn next_id(&mut self) -> String {
        self.issued = self.issued.saturating_add(1);
        format!("{}_{:03}", self.prefix, self.issued)
    }

    /// Number of ids issued since the last reset.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.issued
    }

    /// Return to zero; the next id is `<prefix>_001` again.
    pub fn reset(&mut self) {
        self.issued = 0;
    }
}
