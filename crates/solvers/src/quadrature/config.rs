use numerus_core::Precision;
use thiserror::Error;

/// Configuration for adaptive quadrature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_passes: usize,
}

/// Errors that can occur when validating a quadrature config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative")]
    Tolerance,

    #[error("max_passes must be at least 1")]
    MaxPasses,
}

impl Config {
    /// Number of passes allowed when none is configured.
    pub const DEFAULT_MAX_PASSES: usize = 64;

    /// Creates a config with a relative tolerance and a pass limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite, or if
    /// `max_passes` is zero.
    pub fn new(tolerance: f64, max_passes: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_passes == 0 {
            return Err(ConfigError::MaxPasses);
        }
        Ok(Self {
            tolerance,
            max_passes,
        })
    }

    /// Creates a config whose relative tolerance is `10^-k`.
    #[must_use]
    pub fn from_precision(precision: Precision) -> Self {
        Self {
            tolerance: precision.tolerance(),
            max_passes: Self::DEFAULT_MAX_PASSES,
        }
    }

    /// Returns a copy of this config with a different pass limit.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MaxPasses` if `max_passes` is zero.
    pub fn with_max_passes(self, max_passes: usize) -> Result<Self, ConfigError> {
        Self::new(self.tolerance, max_passes)
    }

    /// Returns the relative error below which refinement stops.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of passes, including the first.
    #[must_use]
    pub fn max_passes(&self) -> usize {
        self.max_passes
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_passes: Self::DEFAULT_MAX_PASSES,
        }
    }
}
