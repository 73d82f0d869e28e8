/// Control actions supported by the quadrature solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop refining and return the estimate of the pass just observed.
    StopEarly,
}
