use std::{fmt, str::FromStr};

use thiserror::Error;

/// A root-finding method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Method {
    /// Repeated halving of `[a, b]`.
    Bisection,
    /// Regula falsi on `[a, b]`.
    FalsePosition,
    /// Newton–Raphson from `x₀ = 1`, using a supplied derivative.
    NewtonRaphson,
    /// Two-point secant from `(0, 1)`.
    Secant,
}

/// Errors that can occur when parsing a [`Method`] from its name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown root-finding method `{0}`")]
pub struct UnknownMethod(pub String);

impl Method {
    /// Every method, in declaration order.
    pub const ALL: [Method; 4] = [
        Method::Bisection,
        Method::FalsePosition,
        Method::NewtonRaphson,
        Method::Secant,
    ];

    /// Returns the canonical name of the method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bisection => "bisection",
            Self::FalsePosition => "false_position",
            Self::NewtonRaphson => "newton_raphson",
            Self::Secant => "secant",
        }
    }

    /// Returns true if the method searches inside `[a, b]` and requires a
    /// sign change there.
    #[must_use]
    pub fn is_bracketed(self) -> bool {
        matches!(self, Self::Bisection | Self::FalsePosition)
    }

    /// Returns true if the method needs a derivative formula.
    #[must_use]
    pub fn needs_derivative(self) -> bool {
        self == Self::NewtonRaphson
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    /// Parses a method name, ignoring case, spaces, `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "bisection" => Ok(Self::Bisection),
            "falseposition" | "regulafalsi" => Ok(Self::FalsePosition),
            "newtonraphson" | "newton" => Ok(Self::NewtonRaphson),
            "secant" => Ok(Self::Secant),
            _ => Err(UnknownMethod(s.to_owned())),
        }
    }
}
