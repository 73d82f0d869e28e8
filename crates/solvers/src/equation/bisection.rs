//! Bisection over a sign-changing bracket.
//!
//! The number of halvings is fixed before iterating, from the ordered bracket
//! width `w` and the tolerance `t`:
//!
//! ```text
//! n = ceil((log10(w) - log10(t)) / log10(2))
//! ```
//!
//! After `n` halvings the reported midpoint lies within `t` of a root. When
//! `n <= 0` the bracket is already narrow enough and its midpoint is returned
//! without iterating. `n` is capped by the config's iteration limit, in which
//! case the solution is marked [`Status::MaxIters`].

use numerus_core::{Deadline, Function, Observer};

use super::{
    Action, Bracket, Config, Error, Event, Solution, Status, bracket::Bounds, evaluate,
};

/// Finds a root inside `endpoints` by repeated halving.
///
/// An endpoint with an exactly zero residual is returned immediately, as is a
/// midpoint that lands exactly on a root.
/// Observers see each midpoint evaluation along with the bracket it halves.
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

    let (iters, status) = match halvings(bracket.width(), config.tolerance()) {
        Some(0) => {
            let x = bracket.midpoint();
            return Ok(Solution::new(Status::Converged, x, evaluate(function, x)?, 0));
        }
        Some(n) if n <= config.max_iters() => (n, Status::Converged),
        _ => (config.max_iters(), Status::MaxIters),
    };

    let mut iter = 0;
    loop {
        iter += 1;

        let x = bracket.midpoint();
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

        if residual == 0.0 {
            return Ok(Solution::new(Status::Converged, x, residual, iter));
        }
        if iter == iters {
            return Ok(Solution::new(status, x, residual, iter));
        }
        if deadline.is_expired() {
            return Ok(Solution::new(Status::DeadlineExpired, x, residual, iter));
        }

        bracket.shrink(x, residual);
    }
}

/// Runs bisection without observation.
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

/// Number of halvings that shrink `width` below `tolerance`.
///
/// Returns `None` when the count is unbounded or unrepresentable, as with a
/// zero tolerance.
fn halvings(width: f64, tolerance: f64) -> Option<usize> {
    let n = ((width.log10() - tolerance.log10()) / 2_f64.log10()).ceil();

    if n.is_nan() || n <= 0.0 {
        return Some(0);
    }

    #[allow(clippy::cast_precision_loss)]
    if n >= usize::MAX as f64 {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(n as usize)
}
