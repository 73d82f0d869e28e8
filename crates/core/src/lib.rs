//! Core traits and types for numerus.
//!
//! This crate defines the shared abstractions that the solvers and the
//! formula evaluator build on:
//!
//! - [`Function`]: a callable that maps a real value to a real value, or fails
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`Deadline`]: a cooperative wall-clock bound polled by iterative solvers
//! - [`Precision`]: a digit count that defines a `10^-k` tolerance
//! - [`Interval`]: a pair of finite real endpoints

mod deadline;
mod function;
mod interval;
mod observer;
mod precision;

pub use deadline::Deadline;
pub use function::Function;
pub use interval::{Interval, IntervalError};
pub use observer::Observer;
pub use precision::Precision;
