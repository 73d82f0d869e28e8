//! Newton–Raphson iteration with a caller-supplied derivative.
//!
//! Starting from an initial guess, each iteration steps to
//! `x_{n+1} = x_n − f(x_n) / f'(x_n)` and stops once the step no longer moves
//! the iterate: either `x_{n+1} == x_n` exactly, or the iterate bounces between
//! two neighbouring floats. An exactly zero residual also stops immediately.
//!
//! Newton–Raphson is an open method: nothing bounds its iterates, so the
//! deadline and the iteration limit are the only guards against divergence.

use numerus_core::{Deadline, Function, Observer};

use super::{Action, Config, Error, Event, Solution, Status, evaluate};

/// Largest gap, in units of relative machine epsilon, treated as a float-level
/// oscillation rather than a genuine cycle.
const OSCILLATION_ULPS: f64 = 4.0;

/// Finds a root of `function` starting from `initial`.
///
/// The tolerance in `config` is unused; only the iteration limit applies.
/// Observers see each iterate before the derivative is evaluated there.
///
/// # Errors
///
/// Returns an error if either function fails or returns a non-finite value,
/// if the derivative is zero at an iterate, or if a step leaves the finite
/// range.
pub fn solve<F, D, Obs>(
    function: &F,
    derivative: &D,
    initial: f64,
    config: &Config,
    deadline: &Deadline,
    mut observer: Obs,
) -> Result<Solution, Error<F::Error>>
where
    F: Function,
    D: Function<Error = F::Error>,
    Obs: Observer<Event, Action>,
{
    if !initial.is_finite() {
        return Err(Error::NonFiniteIterate { x: initial });
    }

    let mut x = initial;
    let mut previous = None;
    let mut iter = 0;
    loop {
        iter += 1;

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

        if residual == 0.0 {
            return Ok(Solution::new(Status::Converged, x, residual, iter));
        }

        let slope = derivative
            .call(x)
            .map_err(|source| Error::Derivative { x, source })?;
        if !slope.is_finite() {
            return Err(Error::NonFiniteDerivative { x, value: slope });
        }
        if slope == 0.0 {
            return Err(Error::ZeroDerivative { x });
        }

        let next = x - residual / slope;
        if !next.is_finite() {
            return Err(Error::NonFiniteIterate { x: next });
        }

        if is_stationary(next, x, previous) {
            return Ok(Solution::new(Status::Converged, x, residual, iter));
        }
        if iter >= config.max_iters() {
            return Ok(Solution::new(Status::MaxIters, x, residual, iter));
        }
        if deadline.is_expired() {
            return Ok(Solution::new(Status::DeadlineExpired, x, residual, iter));
        }

        previous = Some(x);
        x = next;
    }
}

/// Runs Newton–Raphson without observation.
///
/// # Errors
///
/// Returns an error if either function fails or returns a non-finite value,
/// if the derivative is zero at an iterate, or if a step leaves the finite
/// range.
pub fn solve_unobserved<F, D>(
    function: &F,
    derivative: &D,
    initial: f64,
    config: &Config,
    deadline: &Deadline,
) -> Result<Solution, Error<F::Error>>
where
    F: Function,
    D: Function<Error = F::Error>,
{
    solve(function, derivative, initial, config, deadline, ())
}

/// Returns true if the step from `x` to `next` no longer makes progress.
#[allow(clippy::float_cmp)]
fn is_stationary(next: f64, x: f64, previous: Option<f64>) -> bool {
    if next == x {
        return true;
    }
    previous == Some(next) && (next - x).abs() <= OSCILLATION_ULPS * f64::EPSILON * x.abs()
}
