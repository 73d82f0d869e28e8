use numerus_core::{Interval, Precision};
use numerus_formula::Formula;
use numerus_solvers::{
    equation::{self, bisection, false_position, newton_raphson, secant},
    quadrature::{self, Rule},
};
use tracing::{debug, instrument, warn};

use crate::{Error, Method, Problem, Settings};

/// Initial guess for Newton–Raphson.
const NEWTON_START: f64 = 1.0;

/// Initial pair for the secant method.
const SECANT_START: [f64; 2] = [0.0, 1.0];

/// Runs integrations and root searches under a fixed set of [`Settings`].
///
/// Each call compiles its formulas, starts its own deadline and keeps no state
/// afterwards, so one engine can serve any number of calls, from any thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    settings: Settings,
}

impl Engine {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Integrates `problem.body` over `[problem.a, problem.b]` until
    /// successive estimates agree to a relative `10^-digits`.
    ///
    /// Running out of time or passes is not an error: the last completed
    /// estimate is returned and a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the formula does not compile, an endpoint is not
    /// finite, the settings are invalid, or the formula cannot be evaluated at
    /// some sample.
    #[instrument(level = "debug", skip(self, problem), fields(body = %problem.body, a = problem.a, b = problem.b))]
    pub fn integrate(&self, rule: Rule, problem: &Problem, digits: u32) -> Result<f64, Error> {
        let deadline = self.settings.deadline();

        let formula = Formula::compile(&problem.body, &problem.variable).map_err(Error::Compile)?;
        let interval = Interval::new(problem.a, problem.b)?;
        let config = quadrature::Config::from_precision(Precision::new(digits))
            .with_max_passes(self.settings.max_passes)?;

        let solution =
            quadrature::integrate_unobserved(&formula, rule, interval, &config, &deadline)
                .map_err(Error::from_quadrature)?;

        match solution.status {
            quadrature::Status::Converged | quadrature::Status::SinglePass => {}
            status => warn!(
                ?status,
                passes = solution.passes,
                relative_error = solution.relative_error,
                "returning unconverged estimate"
            ),
        }
        debug!(
            value = solution.value,
            passes = solution.passes,
            partitions = solution.partitions,
            "integrated"
        );

        Ok(solution.value)
    }

    /// Finds a root of `problem.body` with the chosen method.
    ///
    /// Bisection and false position search `[problem.a, problem.b]`; running
    /// out of time or iterations returns their current estimate with a
    /// warning. Newton–Raphson starts from `x₀ = 1` and needs `derivative`;
    /// the secant method starts from `(0, 1)`. Both ignore the interval.
    ///
    /// # Errors
    ///
    /// Returns an error if a formula does not compile, the interval does not
    /// bracket a sign change (bracketed methods), a formula cannot be
    /// evaluated, the iteration breaks down, or an open method does not
    /// converge in time.
    #[instrument(level = "debug", skip(self, problem, derivative), fields(body = %problem.body, a = problem.a, b = problem.b))]
    pub fn find_root(
        &self,
        method: Method,
        problem: &Problem,
        derivative: Option<&str>,
        digits: u32,
    ) -> Result<f64, Error> {
        let deadline = self.settings.deadline();

        let formula = Formula::compile(&problem.body, &problem.variable).map_err(Error::Compile)?;
        let config = equation::Config::from_precision(Precision::new(digits))
            .with_max_iters(self.settings.max_iters)?;
        let bracket = [problem.a, problem.b];

        let result = match method {
            Method::Bisection => bisection::solve_unobserved(&formula, bracket, &config, &deadline),
            Method::FalsePosition => {
                false_position::solve_unobserved(&formula, bracket, &config, &deadline)
            }
            Method::NewtonRaphson => {
                let body = derivative.ok_or(Error::MissingDerivative { method })?;
                let derivative =
                    Formula::compile(body, &problem.variable).map_err(Error::CompileDerivative)?;
                newton_raphson::solve_unobserved(
                    &formula,
                    &derivative,
                    NEWTON_START,
                    &config,
                    &deadline,
                )
            }
            Method::Secant => secant::solve_unobserved(&formula, SECANT_START, &config, &deadline),
        };
        let solution = result.map_err(|err| Error::from_equation(err, problem.a, problem.b))?;

        match solution.status {
            equation::Status::Converged => {}
            status if method.is_bracketed() => warn!(
                ?status,
                iters = solution.iters,
                residual = solution.residual,
                "returning unconverged estimate"
            ),
            status => {
                debug!(?status, iters = solution.iters, "open method did not converge");
                return Err(Error::NotConverged {
                    method,
                    iterations: solution.iters,
                    estimate: solution.x,
                });
            }
        }
        debug!(
            x = solution.x,
            residual = solution.residual,
            iters = solution.iters,
            "found root"
        );

        Ok(solution.x)
    }
}
