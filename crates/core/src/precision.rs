/// A requested number of precision digits `k`.
///
/// The digit count maps to the threshold `10^-k`. Quadrature reads it as a
/// relative error bound between successive estimates; the root finders read
/// it as an absolute bound on residuals or bracket width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Precision(u32);

impl Precision {
    /// Creates a precision of `digits` decimal digits.
    #[must_use]
    pub const fn new(digits: u32) -> Self {
        Self(digits)
    }

    /// Returns the digit count `k`.
    #[must_use]
    pub const fn digits(self) -> u32 {
        self.0
    }

    /// Returns the threshold `10^-k`.
    ///
    /// Digit counts past the range of `f64` yield `0.0`.
    #[must_use]
    pub fn tolerance(self) -> f64 {
        let exponent = i32::try_from(self.0).unwrap_or(i32::MAX);
        10_f64.powi(-exponent)
    }
}

impl From<u32> for Precision {
    fn from(digits: u32) -> Self {
        Self::new(digits)
    }
}
