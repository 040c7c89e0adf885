use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Knobs for [`crate::round_potentials`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoundingOptions {
    /// Upper bound on decrement rounds. Must be positive.
    pub max_iterations: usize,
    /// Consecutive identical rounds tolerated before giving up. Defaults to
    /// `max_iterations` when unset.
    pub stall_limit: Option<usize>,
}

impl Default for RoundingOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            stall_limit: None,
        }
    }
}

impl RoundingOptions {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_stall_limit(mut self, stall_limit: usize) -> Self {
        self.stall_limit = Some(stall_limit);
        self
    }

    pub fn effective_stall_limit(&self) -> usize {
        self.stall_limit.unwrap_or(self.max_iterations)
    }
}
