/// A formula to integrate or search for a root, with its variable and interval.
///
/// For bracketed root finders and quadrature, `[a, b]` is the search or
/// integration interval. The open root finders ignore it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    pub body: String,
    pub variable: String,
    pub a: f64,
    pub b: f64,
}

impl Problem {
    /// Creates a problem over `[a, b]`.
    pub fn new(body: impl Into<String>, variable: impl Into<String>, a: f64, b: f64) -> Self {
        Self {
            body: body.into(),
            variable: variable.into(),
            a,
            b,
        }
    }
}
