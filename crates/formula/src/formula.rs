use std::{cell::Cell, fmt, str::FromStr};

use meval::Expr;
use numerus_core::Function;

use crate::{
    CompileError, EvaluationError,
    builtin::is_reserved,
    scope::{DomainFault, Scope},
};

/// Formula text bound to one free variable, compiled for repeated evaluation.
///
/// A formula is immutable once compiled. Evaluation holds no state between
/// calls, so the same formula can be evaluated from several threads at once
/// and always returns the same result for the same input.
#[derive(Debug, Clone)]
pub struct Formula {
    body: String,
    variable: String,
    expr: Expr,
}

impl Formula {
    /// Compiles `body` as a function of `variable`.
    ///
    /// Identifiers are resolved at evaluation time, so a formula mentioning an
    /// unknown name compiles but fails to evaluate.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is empty or not a valid formula, if
    /// `variable` is not an identifier, or if it names a constant or builtin.
    pub fn compile(body: &str, variable: &str) -> Result<Self, CompileError> {
        if body.trim().is_empty() {
            return Err(CompileError::Empty);
        }
        if !is_identifier(variable) {
            return Err(CompileError::InvalidVariable {
                name: variable.to_owned(),
            });
        }
        if is_reserved(variable) {
            return Err(CompileError::ReservedVariable {
                name: variable.to_owned(),
            });
        }

        let expr = Expr::from_str(&body.replace("**", "^")).map_err(|source| {
            CompileError::Syntax {
                body: body.to_owned(),
                source,
            }
        })?;

        Ok(Self {
            body: body.to_owned(),
            variable: variable.to_owned(),
            expr,
        })
    }

    /// Returns the formula text as given to [`Formula::compile`].
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the name of the free variable.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Evaluates the formula with its variable bound to `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the formula references an undefined name, calls a
    /// builtin with the wrong number of arguments or outside its domain, or
    /// produces a non-finite value.
    pub fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        let fault = Cell::new(None);
        let value = self
            .expr
            .eval_with_context(Scope::new(&self.variable, x, &fault))
            .map_err(EvaluationError::from_engine)?;

        if let Some(DomainFault { builtin, argument }) = fault.get() {
            return Err(EvaluationError::Domain { builtin, argument });
        }
        if !value.is_finite() {
            return Err(EvaluationError::NonFinite {
                variable: self.variable.clone(),
                x,
                value,
            });
        }
        Ok(value)
    }
}

impl Function for Formula {
    type Error = EvaluationError;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        self.evaluate(x)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f({}) = {}", self.variable, self.body)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::Builtin;

    fn compile(body: &str) -> Formula {
        Formula::compile(body, "x").expect("valid formula")
    }

    #[test]
    fn evaluates_polynomials() {
        let formula = compile("x^2 - 2*x + 1");
        assert_relative_eq!(formula.evaluate(3.0).unwrap(), 4.0);
        assert_relative_eq!(formula.evaluate(1.0).unwrap(), 0.0);
    }

    #[test]
    fn accepts_double_star_exponent() {
        let formula = compile("x**2");
        assert_relative_eq!(formula.evaluate(4.0).unwrap(), 16.0);
    }

    #[test]
    fn exposes_constants_and_builtins() {
        let formula = compile("sin(pi/2) + cos(0) + ln(e) + log2(8) + log10(100) + abs(-1)");
        assert_relative_eq!(formula.evaluate(0.0).unwrap(), 9.0, epsilon = 1e-12);

        let aliases = compile("log(1000) + logn(e^2)");
        assert_relative_eq!(aliases.evaluate(0.0).unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn binds_custom_variable_names() {
        let formula = Formula::compile("t * tan(t)", "t").expect("valid formula");
        assert_eq!(formula.variable(), "t");
        assert_relative_eq!(formula.evaluate(0.0).unwrap(), 0.0);
    }

    #[test]
    fn repeated_evaluation_is_deterministic() {
        let formula = compile("sin(x)^3 / (1 + x^2)");
        let first = formula.evaluate(0.7).unwrap();
        let second = formula.evaluate(0.7).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(matches!(
            Formula::compile("x^^2", "x"),
            Err(CompileError::Syntax { .. })
        ));
        assert!(matches!(
            Formula::compile("(x + 1", "x"),
            Err(CompileError::Syntax { .. })
        ));
        assert!(matches!(
            Formula::compile("  ", "x"),
            Err(CompileError::Empty)
        ));
    }

    #[test]
    fn rejects_bad_variable_names() {
        assert!(matches!(
            Formula::compile("x", ""),
            Err(CompileError::InvalidVariable { .. })
        ));
        assert!(matches!(
            Formula::compile("x", "2x"),
            Err(CompileError::InvalidVariable { .. })
        ));
        assert!(matches!(
            Formula::compile("pi", "pi"),
            Err(CompileError::ReservedVariable { .. })
        ));
        assert!(matches!(
            Formula::compile("sin", "sin"),
            Err(CompileError::ReservedVariable { .. })
        ));
    }

    #[test]
    fn undefined_names_fail_at_evaluation() {
        let formula = compile("x + y");
        assert_eq!(
            formula.evaluate(1.0),
            Err(EvaluationError::UnknownVariable {
                name: "y".to_owned()
            })
        );

        let formula = compile("sqrt(x)");
        assert_eq!(
            formula.evaluate(4.0),
            Err(EvaluationError::UnknownFunction {
                name: "sqrt".to_owned()
            })
        );
    }

    #[test]
    fn wrong_arity_fails() {
        let formula = compile("sin(x, 2)");
        assert!(matches!(
            formula.evaluate(1.0),
            Err(EvaluationError::Arity { .. })
        ));
    }

    #[test]
    fn domain_violations_fail() {
        let formula = compile("ln(x)");
        assert_eq!(
            formula.evaluate(-2.0),
            Err(EvaluationError::Domain {
                builtin: Builtin::Ln,
                argument: -2.0
            })
        );
        assert!(matches!(
            formula.evaluate(0.0),
            Err(EvaluationError::Domain { .. })
        ));
    }

    #[test]
    fn non_finite_results_fail() {
        let formula = compile("1/x");
        assert!(matches!(
            formula.evaluate(0.0),
            Err(EvaluationError::NonFinite { .. })
        ));
    }

    #[test]
    fn implements_function() {
        let formula = compile("3*x");
        assert_relative_eq!(formula.call(2.0).unwrap(), 6.0);
    }

    #[test]
    fn formulas_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Formula>();

        let formula = compile("x^2");
        let results: Vec<f64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let formula = &formula;
                    scope.spawn(move || formula.evaluate(f64::from(i)).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(results, vec![0.0, 1.0, 4.0, 9.0]);
    }

    #[test]
    fn displays_as_function_of_variable() {
        let formula = Formula::compile("t^2", "t").expect("valid formula");
        assert_eq!(formula.to_string(), "f(t) = t^2");
    }
}
