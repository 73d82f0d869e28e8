//! Numerical solvers for numerus.
//!
//! Every solver works on a [`numerus_core::Function`] and never on formula
//! text, so any conforming evaluator can be plugged in.
//!
//! - [`quadrature`]: adaptive composite integration over an interval
//! - [`equation`]: bracketed and open root finders for `f(x) = 0`
//!
//! Both families share the same control surface: a validated `Config`, a
//! [`numerus_core::Deadline`] polled at the top of every pass or iteration,
//! and an [`numerus_core::Observer`] that sees each step and may stop it.

pub mod equation;
pub mod quadrature;
