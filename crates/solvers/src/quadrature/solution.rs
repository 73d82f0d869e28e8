/// Indicates how the quadrature solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Successive estimates agreed within the relative tolerance.
    Converged,
    /// The rule does not refine and its single pass completed.
    SinglePass,
    /// The deadline expired; the estimate is from the last completed pass.
    DeadlineExpired,
    /// The pass limit (or the largest representable partition) was reached.
    MaxPasses,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an adaptive quadrature run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the solver finished.
    pub status: Status,
    /// Estimate of the integral.
    pub value: f64,
    /// Number of subintervals used for `value`.
    pub partitions: usize,
    /// Number of completed passes.
    pub passes: usize,
    /// Relative change between the last two passes, if there were two.
    pub relative_error: Option<f64>,
}

impl Solution {
    /// Returns true if the estimate met the requested tolerance, or the rule
    /// is a fixed single-pass rule.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.status, Status::Converged | Status::SinglePass)
    }
}
