/// A real-valued function of one real variable that may fail to evaluate.
///
/// Solvers only ever see this contract, so any evaluator that can map an
/// `f64` to an `f64` (a compiled formula, a closure wrapper, a lookup table)
/// can be integrated or searched for roots.
///
/// Implementations must be pure: calling `call` twice with the same `x`
/// must return the same result.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F: Function + ?Sized> Function for &F {
    type Error = F::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).call(x)
    }
}
