use std::{fmt, str::FromStr};

use thiserror::Error;

/// A composite Newton–Cotes rule.
///
/// Each rule splits `[a, b]` into `n` subintervals of width `h = (b - a) / n`
/// and sums weighted samples at the `n + 1` nodes. A rule groups subintervals
/// into panels, so `n` must be a multiple of its panel width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rule {
    /// Composite trapezoidal rule, refined over `n = 1, 2, 4, 8, …`.
    Trapezoidal,
    /// Composite Simpson 1/3 rule, refined over `n = 2, 4, 8, 16, …`.
    Simpson13,
    /// Composite Simpson 3/8 rule, refined over `n = 3, 6, 18, 54, …`.
    Simpson38,
    /// Fourth-order Newton–Cotes (Boole) rule, one pass with `n = 4`.
    #[cfg_attr(feature = "serde", serde(rename = "newton_cotes4", alias = "boole"))]
    Boole,
}

/// A partition count that does not fit a rule's panel width.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{rule} cannot use {partitions} subintervals")]
pub struct InvalidPartition {
    pub rule: Rule,
    pub partitions: usize,
}

/// Errors that can occur when parsing a [`Rule`] from its name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown quadrature rule `{0}`")]
pub struct UnknownRule(pub String);

impl Rule {
    /// Every rule, in declaration order.
    pub const ALL: [Rule; 4] = [
        Rule::Trapezoidal,
        Rule::Simpson13,
        Rule::Simpson38,
        Rule::Boole,
    ];

    /// Returns the canonical name of the rule.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Trapezoidal => "trapezoidal",
            Self::Simpson13 => "simpson13",
            Self::Simpson38 => "simpson38",
            Self::Boole => "newton_cotes4",
        }
    }

    /// Returns the number of subintervals in one panel.
    #[must_use]
    pub fn panel_width(self) -> usize {
        match self {
            Self::Trapezoidal => 1,
            Self::Simpson13 => 2,
            Self::Simpson38 => 3,
            Self::Boole => 4,
        }
    }

    /// Returns the highest polynomial degree the rule integrates exactly.
    #[must_use]
    pub fn exact_degree(self) -> u32 {
        match self {
            Self::Trapezoidal => 1,
            Self::Simpson13 | Self::Simpson38 => 3,
            Self::Boole => 5,
        }
    }

    /// Returns true if the rule refines its estimate over several passes.
    #[must_use]
    pub fn refines(self) -> bool {
        !matches!(self, Self::Boole)
    }

    /// Returns the partition count of the first pass.
    #[must_use]
    pub fn initial_partitions(self) -> usize {
        self.panel_width()
    }

    /// Returns the partition count of the pass after one with `n` subintervals.
    ///
    /// Returns `None` for rules that do not refine, or when the next count
    /// would overflow.
    #[must_use]
    pub fn next_partitions(self, n: usize) -> Option<usize> {
        match self {
            Self::Trapezoidal | Self::Simpson13 => n.checked_mul(2),
            Self::Simpson38 if n == 3 => Some(6),
            Self::Simpson38 => n.checked_mul(3),
            Self::Boole => None,
        }
    }

    /// Returns the sequence of partition counts this rule refines over.
    #[must_use]
    pub fn partitions(self) -> Partitions {
        Partitions {
            rule: self,
            next: Some(self.initial_partitions()),
        }
    }

    /// Checks that `n` is a positive multiple of the panel width.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPartition` if the rule cannot use `n` subintervals.
    pub fn check(self, n: usize) -> Result<(), InvalidPartition> {
        if n == 0 || n % self.panel_width() != 0 {
            return Err(InvalidPartition {
                rule: self,
                partitions: n,
            });
        }
        Ok(())
    }

    /// Returns the weight of node `i` in a partition of `n` subintervals.
    pub(super) fn weight(self, i: usize, n: usize) -> f64 {
        let boundary = i == 0 || i == n;
        match self {
            Self::Trapezoidal if boundary => 1.0,
            Self::Trapezoidal => 2.0,
            Self::Simpson13 if boundary => 1.0,
            Self::Simpson13 if i % 2 == 1 => 4.0,
            Self::Simpson13 => 2.0,
            Self::Simpson38 if boundary => 1.0,
            Self::Simpson38 if i % 3 == 0 => 2.0,
            Self::Simpson38 => 3.0,
            Self::Boole if boundary => 7.0,
            Self::Boole => match i % 4 {
                0 => 14.0,
                2 => 12.0,
                _ => 32.0,
            },
        }
    }

    /// Returns the factor applied to the weighted sum for step size `h`.
    pub(super) fn scale(self, h: f64) -> f64 {
        match self {
            Self::Trapezoidal => h / 2.0,
            Self::Simpson13 => h / 3.0,
            Self::Simpson38 => 3.0 * h / 8.0,
            Self::Boole => 2.0 * h / 45.0,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = UnknownRule;

    /// Parses a rule name, ignoring case, spaces, `-`, `_` and `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_' | '/'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "trapezoidal" | "trapezoid" => Ok(Self::Trapezoidal),
            "simpson13" | "simpson" => Ok(Self::Simpson13),
            "simpson38" => Ok(Self::Simpson38),
            "newtoncotes4" | "boole" => Ok(Self::Boole),
            _ => Err(UnknownRule(s.to_owned())),
        }
    }
}

/// The partition counts a rule refines over, in order.
///
/// The sequence ends for rules that do not refine, or when the next count
/// would overflow `usize`.
#[derive(Debug, Clone)]
pub struct Partitions {
    rule: Rule,
    next: Option<usize>,
}

impl Iterator for Partitions {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next?;
        self.next = self.rule.next_partitions(current);
        Some(current)
    }
}
