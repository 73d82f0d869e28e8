use std::time::Duration;

use numerus_core::Deadline;
use numerus_solvers::{equation, quadrature};

/// Limits applied to every call made through an [`Engine`](crate::Engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Wall-clock budget for one call.
    pub budget: Duration,
    /// Iteration limit for the root finders.
    pub max_iters: usize,
    /// Pass limit for adaptive quadrature.
    pub max_passes: usize,
}

impl Settings {
    /// Starts the deadline for one call.
    #[must_use]
    pub fn deadline(&self) -> Deadline {
        Deadline::after(self.budget)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            budget: Deadline::DEFAULT_BUDGET,
            max_iters: equation::Config::DEFAULT_MAX_ITERS,
            max_passes: quadrature::Config::DEFAULT_MAX_PASSES,
        }
    }
}
