//! Root finding for single-variable functions.
//!
//! Every solver here drives `f(x)` toward zero through the
//! [`Function`](numerus_core::Function) contract and shares one vocabulary:
//! a validated [`Config`], a per-iteration [`Event`], an [`Action`] observers
//! may return, and a [`Solution`] tagged with a [`Status`].
//!
//! # Solvers
//!
//! - [`bisection`]: halves a bracket a precomputed number of times
//! - [`false_position`]: shrinks a bracket through the secant of its endpoints
//! - [`newton_raphson`]: open iteration using a caller-supplied derivative
//! - [`secant`]: open iteration over a sliding pair of points
//!
//! # Deadline
//!
//! Each solver polls its [`Deadline`](numerus_core::Deadline) before every
//! iteration after the first. Bracketed solvers report the current estimate
//! with [`Status::DeadlineExpired`]; open solvers do the same, but their
//! estimate carries no bracketing guarantee.

mod action;
mod bracket;
mod config;
mod error;
mod evaluate;
mod event;
mod solution;

#[cfg(test)]
mod testing;

pub mod bisection;
pub mod false_position;
pub mod newton_raphson;
pub mod secant;

pub use action::Action;
pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use evaluate::evaluate;
