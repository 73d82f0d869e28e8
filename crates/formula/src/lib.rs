//! Formula evaluation for numerus.
//!
//! A [`Formula`] is formula text bound to one free variable, parsed once and
//! evaluated many times:
//!
//! ```
//! use numerus_formula::Formula;
//!
//! let formula = Formula::compile("x^2 - 2", "x")?;
//! assert_eq!(formula.evaluate(3.0)?, 7.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Every evaluation sees the constants `e` and `pi` and the builtins `sin`,
//! `cos`, `tan`, `abs`, `log2`, `log10` and `ln` (with `log` and `logn`
//! accepted as aliases of `log10` and `ln`). `**` is accepted as an alias of
//! `^` for exponentiation.
//!
//! [`Formula`] implements [`numerus_core::Function`], which is the only
//! interface the solvers depend on.

mod builtin;
mod error;
mod formula;
mod scope;

pub use builtin::Builtin;
pub use error::{CompileError, EvaluationError};
pub use formula::Formula;
