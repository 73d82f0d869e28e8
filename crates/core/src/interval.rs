use thiserror::Error;

/// Errors that can occur when creating an [`Interval`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum IntervalError {
    /// An endpoint is NaN or infinite.
    #[error("interval endpoint is not finite: {value}")]
    NonFinite { value: f64 },
}

/// A pair of finite endpoints `a` and `b`.
///
/// The endpoints are kept in the order given: an interval with `b < a`
/// describes an integral taken in the negative direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    a: f64,
    b: f64,
}

impl Interval {
    /// Creates an interval from its endpoints.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::NonFinite` if either endpoint is NaN or infinite.
    pub fn new(a: f64, b: f64) -> Result<Self, IntervalError> {
        for value in [a, b] {
            if !value.is_finite() {
                return Err(IntervalError::NonFinite { value });
            }
        }
        Ok(Self { a, b })
    }

    /// Returns the lower limit `a`.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the upper limit `b`.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the signed width `b - a`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    /// Returns the endpoints as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    /// Returns node `i` of a uniform partition into `n` subintervals.
    ///
    /// Node `n` is exactly `b`, so rounding in the step never moves the
    /// final sample off the interval.
    #[must_use]
    pub fn node(&self, i: usize, n: usize) -> f64 {
        if i == n {
            return self.b;
        }
        #[allow(clippy::cast_precision_loss)]
        let (i, n) = (i as f64, n as f64);
        self.a + i * (self.width() / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn keeps_endpoint_order() {
        let interval = Interval::new(4.0, 1.0).expect("finite endpoints");
        assert_relative_eq!(interval.a(), 4.0);
        assert_relative_eq!(interval.b(), 1.0);
        assert_relative_eq!(interval.width(), -3.0);
    }

    #[test]
    fn rejects_non_finite_endpoints() {
        assert!(matches!(
            Interval::new(f64::NAN, 1.0),
            Err(IntervalError::NonFinite { .. })
        ));
        assert!(matches!(
            Interval::new(0.0, f64::NEG_INFINITY),
            Err(IntervalError::NonFinite { .. })
        ));
    }

    #[test]
    fn nodes_span_the_interval() {
        let interval = Interval::new(1.0, 4.0).expect("finite endpoints");
        assert_relative_eq!(interval.node(0, 3), 1.0);
        assert_relative_eq!(interval.node(1, 3), 2.0);
        assert_relative_eq!(interval.node(2, 3), 3.0);
        assert_eq!(interval.node(3, 3), 4.0);
    }

    #[test]
    fn last_node_is_exactly_b() {
        let interval = Interval::new(0.0, 0.3).expect("finite endpoints");
        assert_eq!(interval.node(7, 7), 0.3);
    }
}
