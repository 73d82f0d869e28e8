//! False position (regula falsi) over a sign-changing bracket.
//!
//! Each iteration evaluates where the chord through the bracket endpoints
//! crosses zero,
//!
//! ```text
//! x_k = (a·f(b) − b·f(a)) / (f(b) − f(a))
//! ```
//!
//! and replaces the endpoint whose residual has the same sign as `f(x_k)`.
//! Iteration stops once `|f(x_k)|` falls below the tolerance.

use numerus_core::{Deadline, Function, Observer};

use super::{
    Action, Bracket, Config, Error, Event, Solution, Status, bracket::Bounds, evaluate,
};

/// Finds a root inside `endpoints` by false position.
///
/// An endpoint with an exactly zero residual is returned immediately.
/// Observers see each chord-root evaluation along with the bracket it came from.
///
/// # Errors
///
/// Returns an error if the endpoints are non-finite, equal, or do not bracket
/// a sign change, or if the function fails or returns a non-finite value.
pub fn solve<F, Obs>(
    function: &F,
    endpoints: [f64; 2],
    config: &Config,
    deadline: &Deadline,
    mut observer: Obs,
) -> Result<Solution, Error<F::Error>>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let bounds = Bounds::new(endpoints)?;

    let left_residual = evaluate(function, bounds.left())?;
    if left_residual == 0.0 {
        return Ok(Solution::new(Status::Converged, bounds.left(), 0.0, 0));
    }
    let right_residual = evaluate(function, bounds.right())?;
    if right_residual == 0.0 {
        return Ok(Solution::new(Status::Converged, bounds.right(), 0.0, 0));
    }

    let mut bracket = Bracket::new(bounds, left_residual, right_residual)?;

    let mut iter = 0;
    loop {
        iter += 1;

        let x = bracket.chord_root();
        let residual = evaluate(function, x)?;

        let event = Event {
            iter,
            x,
            residual,
            bracket: Some(bracket.as_array()),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, x, residual, iter));
        }

        if residual == 0.0 || residual.abs() < config.tolerance() {
            return Ok(Solution::new(Status::Converged, x, residual, iter));
        }
        if iter >= config.max_iters() {
            return Ok(Solution::new(Status::MaxIters, x, residual, iter));
        }
        if deadline.is_expired() {
            return Ok(Solution::new(Status::DeadlineExpired, x, residual, iter));
        }

        bracket.shrink(x, residual);
    }
}

/// Runs false position without observation.
///
/// # Errors
///
/// Returns an error if the endpoints are non-finite, equal, or do not bracket
/// a sign change, or if the function fails or returns a non-finite value.
pub fn solve_unobserved<F: Function>(
    function: &F,
    endpoints: [f64; 2],
    config: &Config,
    deadline: &Deadline,
) -> Result<Solution, Error<F::Error>> {
    solve(function, endpoints, config, deadline, ())
}
