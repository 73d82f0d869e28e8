//! Two-point secant iteration.
//!
//! Given a pair `(x_a, x_b)`, each iteration evaluates where the secant line
//! through `(x_a, f(x_a))` and `(x_b, f(x_b))` crosses zero,
//!
//! ```text
//! x_r = (x_a·f(x_b) − x_b·f(x_a)) / (f(x_b) − f(x_a))
//! ```
//!
//! and stops once `|f(x_r)|` falls below the tolerance. Otherwise the window
//! slides forward: `x_a ← x_b`, `x_b ← x_r`.
//!
//! Unlike false position, no sign change is maintained, so the iterates can
//! leave the starting pair and may not converge at all.

use numerus_core::{Deadline, Function, Observer};

use super::{Action, Config, Error, Event, Solution, Status, evaluate};

/// Finds a root of `function` starting from the pair `initial`.
///
/// Observers see each new secant root and its residual.
///
/// # Errors
///
/// Returns an error if the function fails or returns a non-finite value, if
/// the two points of the window have equal residuals, or if an iterate leaves
/// the finite range.
pub fn solve<F, Obs>(
    function: &F,
    initial: [f64; 2],
    config: &Config,
    deadline: &Deadline,
    mut observer: Obs,
) -> Result<Solution, Error<F::Error>>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let [mut x_a, mut x_b] = initial;
    for x in initial {
        if !x.is_finite() {
            return Err(Error::NonFiniteIterate { x });
        }
    }

    let mut f_a = evaluate(function, x_a)?;
    let mut f_b = evaluate(function, x_b)?;

    let mut iter = 0;
    loop {
        iter += 1;

        #[allow(clippy::float_cmp)]
        if f_a == f_b {
            return Err(Error::ZeroSecantSlope { x_a, x_b });
        }

        let x = (x_a * f_b - x_b * f_a) / (f_b - f_a);
        if !x.is_finite() {
            return Err(Error::NonFiniteIterate { x });
        }
        let residual = evaluate(function, x)?;

        let event = Event {
            iter,
            x,
            residual,
            bracket: None,
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

        (x_a, f_a) = (x_b, f_b);
        (x_b, f_b) = (x, residual);
    }
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Returns an error if the function fails or returns a non-finite value, if
/// the two points of the window have equal residuals, or if an iterate leaves
/// the finite range.
pub fn solve_unobserved<F: Function>(
    function: &F,
    initial: [f64; 2],
    config: &Config,
    deadline: &Deadline,
) -> Result<Solution, Error<F::Error>> {
    solve(function, initial, config, deadline, ())
}
