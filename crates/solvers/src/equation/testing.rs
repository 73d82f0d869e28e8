//! Function fixtures shared by the root-finding tests.

use std::convert::Infallible;

use numerus_core::Function;
use thiserror::Error;

/// Wraps a plain `fn(f64) -> f64`.
pub(super) struct Plain(pub(super) fn(f64) -> f64);

impl Function for Plain {
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.0)(x))
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("no value above {limit}")]
pub(super) struct OutOfRange {
    pub(super) limit: f64,
}

/// `x - 1` up to `limit`, failing beyond it.
pub(super) struct FailsAbove {
    pub(super) limit: f64,
}

impl Function for FailsAbove {
    type Error = OutOfRange;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        if x > self.limit {
            Err(OutOfRange { limit: self.limit })
        } else {
            Ok(x - 1.0)
        }
    }
}
