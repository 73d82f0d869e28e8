use numerus_core::Function;

use super::Error;

/// Calls `function` at `x` and checks that the residual is finite.
pub(super) fn evaluate<F: Function>(function: &F, x: f64) -> Result<f64, Error<F::Error>> {
    let residual = function
        .call(x)
        .map_err(|source| Error::Function { x, source })?;

    if !residual.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual });
    }
    Ok(residual)
}
