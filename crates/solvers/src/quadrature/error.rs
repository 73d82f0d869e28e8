use thiserror::Error;

use super::InvalidPartition;

/// Errors that can occur during adaptive quadrature.
///
/// `E` is the error type of the integrated function.
#[derive(Debug, Error)]
pub enum Error<E> {
    #[error("invalid partition: {0}")]
    InvalidPartition(#[from] InvalidPartition),

    #[error("function evaluation failed at x = {x}")]
    Function {
        x: f64,
        #[source]
        source: E,
    },

    #[error("non-finite sample {value} at x = {x}")]
    NonFiniteSample { x: f64, value: f64 },
}
