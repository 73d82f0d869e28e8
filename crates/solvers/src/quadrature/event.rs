/// Event emitted by the quadrature solver after each completed pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Pass counter (1-based).
    pub pass: usize,
    /// Number of subintervals used by this pass.
    pub partitions: usize,
    /// Estimate produced by this pass.
    pub estimate: f64,
    /// Relative change from the previous pass, absent for the first pass.
    pub relative_error: Option<f64>,
}
