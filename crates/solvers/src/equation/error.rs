use thiserror::Error;

use super::BracketError;

/// Errors that can occur during root finding.
///
/// `E` is the error type of the function whose root is sought.
#[derive(Debug, Error)]
pub enum Error<E> {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: E,
    },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    #[error("derivative evaluation failed at x = {x}")]
    Derivative {
        x: f64,
        #[source]
        source: E,
    },

    #[error("non-finite derivative {value} at x = {x}")]
    NonFiniteDerivative { x: f64, value: f64 },

    #[error("derivative is zero at x = {x}")]
    ZeroDerivative { x: f64 },

    #[error("secant through x = {x_a} and x = {x_b} has zero slope")]
    ZeroSecantSlope { x_a: f64, x_b: f64 },

    #[error("iteration produced non-finite x = {x}")]
    NonFiniteIterate { x: f64 },
}
