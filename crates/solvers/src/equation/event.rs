/// Iteration event emitted by the root-finding solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Point evaluated in this iteration.
    pub x: f64,
    /// Function value at `x`.
    pub residual: f64,
    /// Search bracket before this iteration shrinks it, for bracketed solvers.
    pub bracket: Option<[f64; 2]>,
}
