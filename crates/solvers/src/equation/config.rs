use numerus_core::Precision;
use thiserror::Error;

/// Configuration shared by the root-finding solvers.
///
/// The tolerance is an absolute bound: on the residual for false position and
/// secant, on the final bracket width for bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a root-finding config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Config {
    /// Iteration limit used when none is configured.
    pub const DEFAULT_MAX_ITERS: usize = 10_000;

    /// Creates a config with an absolute tolerance and an iteration limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite, or if
    /// `max_iters` is zero.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(Self {
            tolerance,
            max_iters,
        })
    }

    /// Creates a config whose tolerance is `10^-k`.
    #[must_use]
    pub fn from_precision(precision: Precision) -> Self {
        Self {
            tolerance: precision.tolerance(),
            max_iters: Self::DEFAULT_MAX_ITERS,
        }
    }

    /// Returns a copy of this config with a different iteration limit.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MaxIters` if `max_iters` is zero.
    pub fn with_max_iters(self, max_iters: usize) -> Result<Self, ConfigError> {
        Self::new(self.tolerance, max_iters)
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iters: Self::DEFAULT_MAX_ITERS,
        }
    }
}
