use thiserror::Error;

use crate::Builtin;

/// Errors that can occur when compiling formula text.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("formula is empty")]
    Empty,

    #[error("invalid formula `{body}`")]
    Syntax {
        body: String,
        #[source]
        source: meval::Error,
    },

    #[error("invalid variable name `{name}`")]
    InvalidVariable { name: String },

    #[error("variable name `{name}` is reserved for a constant or builtin")]
    ReservedVariable { name: String },
}

/// Errors that can occur when evaluating a compiled formula.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("undefined variable `{name}`")]
    UnknownVariable { name: String },

    #[error("undefined function `{name}`")]
    UnknownFunction { name: String },

    #[error("function `{name}` takes exactly one argument")]
    Arity { name: String },

    #[error("{builtin}({argument}) is outside the function's domain")]
    Domain { builtin: Builtin, argument: f64 },

    #[error("formula evaluates to a non-finite value {value} at {variable} = {x}")]
    NonFinite {
        variable: String,
        x: f64,
        value: f64,
    },

    #[error("formula could not be evaluated: {reason}")]
    Malformed { reason: String },
}

impl EvaluationError {
    /// Translates an evaluation failure reported by the expression engine.
    pub(crate) fn from_engine(err: meval::Error) -> Self {
        match err {
            meval::Error::UnknownVariable(name) => Self::UnknownVariable { name },
            meval::Error::Function(name, meval::FuncEvalError::UnknownFunction) => {
                Self::UnknownFunction { name }
            }
            meval::Error::Function(name, _) => Self::Arity { name },
            other => Self::Malformed {
                reason: other.to_string(),
            },
        }
    }
}
