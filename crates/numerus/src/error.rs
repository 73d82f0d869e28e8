use std::fmt;

use numerus_core::IntervalError;
use numerus_formula::{CompileError, EvaluationError};
use numerus_solvers::{
    equation::{self, BracketError},
    quadrature::{self, InvalidPartition},
};
use thiserror::Error;

use crate::Method;

/// Errors returned by [`integrate`](crate::integrate) and
/// [`find_root`](crate::find_root).
///
/// Use [`Error::kind`] to classify a failure without matching every variant.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not compile formula")]
    Compile(#[source] CompileError),

    #[error("could not compile derivative")]
    CompileDerivative(#[source] CompileError),

    #[error("formula could not be evaluated at x = {x}")]
    Evaluation {
        x: f64,
        #[source]
        source: EvaluationError,
    },

    #[error("derivative could not be evaluated at x = {x}")]
    DerivativeEvaluation {
        x: f64,
        #[source]
        source: EvaluationError,
    },

    #[error("non-finite value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },

    #[error("derivative is zero at x = {x}")]
    ZeroDerivative { x: f64 },

    #[error("secant through x = {x_a} and x = {x_b} has zero slope")]
    ZeroSecantSlope { x_a: f64, x_b: f64 },

    #[error("iteration produced non-finite x = {x}")]
    NonFiniteIterate { x: f64 },

    #[error("f(a) and f(b) do not have opposite signs on [{a}, {b}]")]
    Sign { a: f64, b: f64 },

    #[error("invalid partition: {0}")]
    InvalidPartition(#[from] InvalidPartition),

    #[error("invalid interval: {0}")]
    InvalidInterval(#[from] IntervalError),

    #[error("interval [{a}, {b}] has zero width")]
    ZeroWidthInterval { a: f64, b: f64 },

    #[error("{method} requires a derivative")]
    MissingDerivative { method: Method },

    #[error("invalid quadrature settings: {0}")]
    QuadratureSettings(#[from] quadrature::ConfigError),

    #[error("invalid root-finding settings: {0}")]
    RootSettings(#[from] equation::ConfigError),

    #[error("{method} did not converge after {iterations} iterations (last estimate {estimate})")]
    NotConverged {
        method: Method,
        iterations: usize,
        estimate: f64,
    },
}

/// Broad classes of [`Error`], suitable for mapping onto transport-level
/// status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// Malformed formula text or variable name.
    Compile,
    /// The formula, its derivative or an iterate could not be evaluated.
    Evaluation,
    /// The interval does not bracket a sign change.
    Sign,
    /// An internal partition count was rejected by its rule.
    InvalidPartition,
    /// Bad interval, settings or missing derivative.
    InvalidInput,
    /// An open method ran out of iterations or time.
    NotConverged,
}

impl Error {
    /// Returns the class of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Compile(_) | Self::CompileDerivative(_) => ErrorKind::Compile,
            Self::Evaluation { .. }
            | Self::DerivativeEvaluation { .. }
            | Self::NonFinite { .. }
            | Self::ZeroDerivative { .. }
            | Self::ZeroSecantSlope { .. }
            | Self::NonFiniteIterate { .. } => ErrorKind::Evaluation,
            Self::Sign { .. } => ErrorKind::Sign,
            Self::InvalidPartition(_) => ErrorKind::InvalidPartition,
            Self::InvalidInterval(_)
            | Self::ZeroWidthInterval { .. }
            | Self::MissingDerivative { .. }
            | Self::QuadratureSettings(_)
            | Self::RootSettings(_) => ErrorKind::InvalidInput,
            Self::NotConverged { .. } => ErrorKind::NotConverged,
        }
    }

    /// Translates a quadrature failure.
    pub(crate) fn from_quadrature(err: quadrature::Error<EvaluationError>) -> Self {
        match err {
            quadrature::Error::InvalidPartition(err) => Self::InvalidPartition(err),
            quadrature::Error::Function { x, source } => Self::Evaluation { x, source },
            quadrature::Error::NonFiniteSample { x, value } => Self::NonFinite { x, value },
        }
    }

    /// Translates a root-finding failure on the interval `[a, b]`.
    pub(crate) fn from_equation(err: equation::Error<EvaluationError>, a: f64, b: f64) -> Self {
        match err {
            equation::Error::InvalidBracket(BracketError::NoSignChange) => Self::Sign { a, b },
            equation::Error::InvalidBracket(BracketError::ZeroWidth) => {
                Self::ZeroWidthInterval { a, b }
            }
            equation::Error::InvalidBracket(BracketError::NonFinite) => {
                let value = if a.is_finite() { b } else { a };
                Self::InvalidInterval(IntervalError::NonFinite { value })
            }
            equation::Error::Function { x, source } => Self::Evaluation { x, source },
            equation::Error::Derivative { x, source } => Self::DerivativeEvaluation { x, source },
            equation::Error::NonFiniteResidual { x, residual } => Self::NonFinite {
                x,
                value: residual,
            },
            equation::Error::NonFiniteDerivative { x, value } => Self::NonFinite { x, value },
            equation::Error::ZeroDerivative { x } => Self::ZeroDerivative { x },
            equation::Error::ZeroSecantSlope { x_a, x_b } => Self::ZeroSecantSlope { x_a, x_b },
            equation::Error::NonFiniteIterate { x } => Self::NonFiniteIterate { x },
        }
    }
}

impl ErrorKind {
    /// Returns a stable snake_case name for the class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Evaluation => "evaluation",
            Self::Sign => "sign",
            Self::InvalidPartition => "invalid_partition",
            Self::InvalidInput => "invalid_input",
            Self::NotConverged => "not_converged",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
