/// Indicates how a root-finding solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Met the solver's stopping criterion.
    Converged,
    /// The deadline expired before the stopping criterion was met.
    DeadlineExpired,
    /// Reached the iteration limit.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root-finding solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Estimate of the root.
    pub x: f64,
    /// Function value at `x`.
    pub residual: f64,
    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new(status: Status, x: f64, residual: f64, iters: usize) -> Self {
        Self {
            status,
            x,
            residual,
            iters,
        }
    }

    /// Returns true if the solver met its stopping criterion.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
