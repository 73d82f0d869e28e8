use thiserror::Error;

/// Errors that can occur when forming a [`Bracket`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
    /// The function has the same sign at both endpoints.
    #[error("f(a) and f(b) do not have opposite signs")]
    NoSignChange,
}

/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Residual is positive (or zero).
    Positive,
    /// Residual is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Ordered finite endpoints, not yet evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(endpoints: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = endpoints;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    pub(super) fn left(&self) -> f64 {
        self.left
    }

    pub(super) fn right(&self) -> f64 {
        self.right
    }
}

/// An interval known to contain a sign change of the function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
    left_residual: f64,
    right_residual: f64,
}

impl Bracket {
    /// Creates a bracket from evaluated bounds.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` if the residuals share a sign.
    pub(super) fn new(
        bounds: Bounds,
        left_residual: f64,
        right_residual: f64,
    ) -> Result<Self, BracketError> {
        if Sign::of(left_residual) == Sign::of(right_residual) {
            return Err(BracketError::NoSignChange);
        }

        Ok(Self {
            left: bounds.left,
            right: bounds.right,
            left_residual,
            right_residual,
        })
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns where the chord through both endpoints crosses zero.
    ///
    /// The residuals have opposite signs, so the denominator is never zero.
    #[must_use]
    pub fn chord_root(&self) -> f64 {
        let (a, b) = (self.left, self.right);
        let (fa, fb) = (self.left_residual, self.right_residual);
        (a * fb - b * fa) / (fb - fa)
    }

    /// Replaces the endpoint whose residual sign matches `residual`.
    pub(super) fn shrink(&mut self, x: f64, residual: f64) {
        if Sign::of(self.left_residual) == Sign::of(residual) {
            self.left = x;
            self.left_residual = residual;
        } else {
            self.right = x;
            self.right_residual = residual;
        }
    }
}
