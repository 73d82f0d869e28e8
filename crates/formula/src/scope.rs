use std::cell::Cell;

use meval::{ContextProvider, FuncEvalError};

use crate::builtin::{Builtin, CONSTANTS};

/// A builtin that was called outside its domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DomainFault {
    pub(crate) builtin: Builtin,
    pub(crate) argument: f64,
}

/// Name bindings for a single evaluation.
///
/// The expression engine only reports arity and lookup failures from
/// builtins, so domain violations are recorded in `fault` and the call
/// yields NaN.
pub(crate) struct Scope<'a> {
    variable: &'a str,
    value: f64,
    fault: &'a Cell<Option<DomainFault>>,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(variable: &'a str, value: f64, fault: &'a Cell<Option<DomainFault>>) -> Self {
        Self {
            variable,
            value,
            fault,
        }
    }
}

impl ContextProvider for Scope<'_> {
    fn get_var(&self, name: &str) -> Option<f64> {
        if let Some((_, value)) = CONSTANTS.iter().find(|(constant, _)| *constant == name) {
            return Some(*value);
        }
        (name == self.variable).then_some(self.value)
    }

    fn eval_func(&self, name: &str, args: &[f64]) -> Result<f64, FuncEvalError> {
        let builtin = Builtin::from_name(name).ok_or(FuncEvalError::UnknownFunction)?;
        let argument = match args {
            [argument] => *argument,
            [] => return Err(FuncEvalError::TooFewArguments),
            _ => return Err(FuncEvalError::TooManyArguments),
        };

        Ok(builtin.apply(argument).unwrap_or_else(|| {
            if self.fault.get().is_none() {
                self.fault.set(Some(DomainFault { builtin, argument }));
            }
            f64::NAN
        }))
    }
}
