//! Adaptive composite quadrature.
//!
//! # Algorithm
//!
//! One refinement driver serves every [`Rule`]. It computes an estimate at
//! the rule's first partition count, then repeatedly advances to the next
//! count in the rule's sequence and recomputes, until the relative change
//! `|R_new - R_old| / |R_new|` drops below the configured tolerance:
//!
//! | Rule | Partition counts |
//! |---|---|
//! | [`Rule::Trapezoidal`] | 1, 2, 4, 8, … |
//! | [`Rule::Simpson13`] | 2, 4, 8, 16, … |
//! | [`Rule::Simpson38`] | 3, 6, 18, 54, … |
//! | [`Rule::Boole`] | 4 (single pass, never refined) |
//!
//! Two identical successive estimates count as converged, which covers
//! integrals that are exactly zero.
//!
//! # Deadline
//!
//! The [`Deadline`] is polled before each refinement pass and periodically
//! during it. Once it expires the solver returns the last *completed*
//! estimate with [`Status::DeadlineExpired`]; this is a best-effort result,
//! not an error. The first pass always runs to completion.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per completed pass, including the first.
//! Observers can return [`Action::StopEarly`] to stop with that pass's
//! estimate.

mod action;
mod config;
mod error;
mod event;
mod pass;
mod rule;
mod solution;
mod state;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use rule::{InvalidPartition, Partitions, Rule, UnknownRule};
pub use solution::{Solution, Status};

use numerus_core::{Deadline, Function, Interval, Observer};

use pass::Pass;
use state::State;

/// Integrates `function` over `interval` with the given composite rule.
///
/// Observers see each completed pass.
/// See the [module docs](self) for the refinement and deadline policy.
///
/// # Errors
///
/// Returns an error if the function fails or yields a non-finite value at any
/// sample, or if a pass is asked to use a partition count the rule rejects.
pub fn integrate<F, Obs>(
    function: &F,
    rule: Rule,
    interval: Interval,
    config: &Config,
    deadline: &Deadline,
    mut observer: Obs,
) -> Result<Solution, Error<F::Error>>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let partitions = rule.initial_partitions();
    let estimate = Pass::new(rule, interval, partitions)?.complete(function)?;
    let mut state = State::first(estimate, partitions);

    if let Some(Action::StopEarly) = observer.observe(&state.event()) {
        return Ok(state.into_solution(Status::StoppedByObserver));
    }
    if !rule.refines() {
        return Ok(state.into_solution(Status::SinglePass));
    }

    loop {
        if state.passes() >= config.max_passes() {
            return Ok(state.into_solution(Status::MaxPasses));
        }
        if deadline.is_expired() {
            return Ok(state.into_solution(Status::DeadlineExpired));
        }

        let Some(next) = rule.next_partitions(state.partitions()) else {
            return Ok(state.into_solution(Status::MaxPasses));
        };
        let Some(refined) = Pass::new(rule, interval, next)?.complete_before(function, deadline)?
        else {
            return Ok(state.into_solution(Status::DeadlineExpired));
        };
        let error = state.refine(refined, next);

        if let Some(Action::StopEarly) = observer.observe(&state.event()) {
            return Ok(state.into_solution(Status::StoppedByObserver));
        }
        if error < config.tolerance() {
            return Ok(state.into_solution(Status::Converged));
        }
    }
}

/// Integrates without observation.
///
/// # Errors
///
/// Returns an error if the function fails or yields a non-finite value at any
/// sample, or if a pass is asked to use a partition count the rule rejects.
pub fn integrate_unobserved<F: Function>(
    function: &F,
    rule: Rule,
    interval: Interval,
    config: &Config,
    deadline: &Deadline,
) -> Result<Solution, Error<F::Error>> {
    integrate(function, rule, interval, config, deadline, ())
}
