//! Fixpoint statistics for diagnostics and sizing.

use serde::{Deserialize, Serialize};

/// Statistics collected while computing a winning set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Fixpoint iterations, one per `W ∩ cpre(W)` step.
    pub iterations: u32,

    /// Calls to the controllable-predecessor operator.
    pub cpre_calls: u32,

    /// Size of the target the fixpoint started from.
    pub initial_size: usize,

    /// Size of the resulting winning set.
    pub final_size: usize,

    /// Total time spent solving (microseconds).
    pub time_us: u64,
}

impl SolveStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Locations removed from the target by the fixpoint.
    #[must_use]
    pub fn pruned(&self) -> usize {
        self.initial_size.saturating_sub(self.final_size)
    }

    /// Average time per iteration in microseconds.
    #[must_use]
    pub fn avg_iteration_us(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.time_us as f64 / self.iterations as f64
        }
    }
}
