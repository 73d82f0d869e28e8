use std::{f64::consts, fmt};

/// Constants visible to every formula, regardless of its variable.
pub(crate) const CONSTANTS: [(&str, f64); 2] = [("e", consts::E), ("pi", consts::PI)];

/// The functions a formula may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Sin,
    Cos,
    Tan,
    Abs,
    Log2,
    Log10,
    Ln,
}

impl Builtin {
    /// Every builtin, in declaration order.
    pub const ALL: [Builtin; 7] = [
        Builtin::Sin,
        Builtin::Cos,
        Builtin::Tan,
        Builtin::Abs,
        Builtin::Log2,
        Builtin::Log10,
        Builtin::Ln,
    ];

    /// Looks up a builtin by the name used in formula text.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let builtin = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "abs" => Self::Abs,
            "log2" => Self::Log2,
            "log10" | "log" => Self::Log10,
            "ln" | "logn" => Self::Ln,
            _ => return None,
        };
        Some(builtin)
    }

    /// Returns the canonical name of the builtin.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Abs => "abs",
            Self::Log2 => "log2",
            Self::Log10 => "log10",
            Self::Ln => "ln",
        }
    }

    /// Applies the builtin to `x`.
    ///
    /// Returns `None` when `x` lies outside the function's domain.
    #[must_use]
    pub fn apply(self, x: f64) -> Option<f64> {
        match self {
            Self::Sin => Some(x.sin()),
            Self::Cos => Some(x.cos()),
            Self::Tan => Some(x.tan()),
            Self::Abs => Some(x.abs()),
            Self::Log2 | Self::Log10 | Self::Ln if x <= 0.0 => None,
            Self::Log2 => Some(x.log2()),
            Self::Log10 => Some(x.log10()),
            Self::Ln => Some(x.ln()),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true if `name` is a constant or a builtin (including aliases).
pub(crate) fn is_reserved(name: &str) -> bool {
    CONSTANTS.iter().any(|(constant, _)| *constant == name) || Builtin::from_name(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn names_round_trip() {
        for builtin in Builtin::ALL {
            assert_eq!(Builtin::from_name(builtin.name()), Some(builtin));
        }
    }

    #[test]
    fn aliases_resolve_to_logarithms() {
        assert_eq!(Builtin::from_name("log"), Some(Builtin::Log10));
        assert_eq!(Builtin::from_name("logn"), Some(Builtin::Ln));
        assert_eq!(Builtin::from_name("sqrt"), None);
    }

    #[test]
    fn logarithms_reject_non_positive_arguments() {
        for builtin in [Builtin::Log2, Builtin::Log10, Builtin::Ln] {
            assert_eq!(builtin.apply(0.0), None);
            assert_eq!(builtin.apply(-1.0), None);
        }
        assert_relative_eq!(Builtin::Log2.apply(8.0).unwrap(), 3.0);
        assert_relative_eq!(Builtin::Log10.apply(1000.0).unwrap(), 3.0);
        assert_relative_eq!(Builtin::Ln.apply(consts::E).unwrap(), 1.0);
    }

    #[test]
    fn trigonometry_accepts_any_finite_argument() {
        assert_relative_eq!(Builtin::Sin.apply(consts::FRAC_PI_2).unwrap(), 1.0);
        assert_relative_eq!(Builtin::Cos.apply(consts::PI).unwrap(), -1.0);
        assert_relative_eq!(Builtin::Tan.apply(consts::FRAC_PI_4).unwrap(), 1.0);
        assert_relative_eq!(Builtin::Abs.apply(-2.5).unwrap(), 2.5);
    }

    #[test]
    fn constants_and_builtins_are_reserved() {
        assert!(is_reserved("e"));
        assert!(is_reserved("pi"));
        assert!(is_reserved("logn"));
        assert!(!is_reserved("x"));
    }
}
