//! Definite integrals and roots of single-variable formulas.
//!
//! ```
//! use numerus::{Method, Rule, find_root, integrate};
//!
//! let area = integrate(Rule::Simpson13, "x^2", "x", 1.0, 4.0, 6)?;
//! assert!((area - 21.0).abs() < 1e-6);
//!
//! let root = find_root(Method::Bisection, "x^2 - 2", "x", None, 0.0, 2.0, 6)?;
//! assert!((root - 2_f64.sqrt()).abs() < 1e-6);
//! # Ok::<(), numerus::Error>(())
//! ```
//!
//! Both functions run under [`Settings::default`]: a five second budget,
//! 10 000 root-finding iterations and 64 quadrature passes. Use an [`Engine`]
//! to change those limits.
//!
//! # Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`Problem`], [`Settings`],
//!   [`Rule`], [`Method`] and [`ErrorKind`].

mod engine;
mod error;
mod method;
mod problem;
mod settings;

pub use engine::Engine;
pub use error::{Error, ErrorKind};
pub use method::{Method, UnknownMethod};
pub use numerus_solvers::quadrature::{Rule, UnknownRule};
pub use problem::Problem;
pub use settings::Settings;

/// Integrates `body` over `[a, b]` with the given rule, to a relative
/// precision of `10^-digits`.
///
/// # Errors
///
/// See [`Engine::integrate`].
pub fn integrate(
    rule: Rule,
    body: &str,
    variable: &str,
    a: f64,
    b: f64,
    digits: u32,
) -> Result<f64, Error> {
    Engine::default().integrate(rule, &Problem::new(body, variable, a, b), digits)
}

/// Finds a root of `body` with the given method, to a precision of
/// `10^-digits`.
///
/// `derivative` is required by [`Method::NewtonRaphson`] and ignored otherwise.
///
/// # Errors
///
/// See [`Engine::find_root`].
pub fn find_root(
    method: Method,
    body: &str,
    variable: &str,
    derivative: Option<&str>,
    a: f64,
    b: f64,
    digits: u32,
) -> Result<f64, Error> {
    Engine::default().find_root(
        method,
        &Problem::new(body, variable, a, b),
        derivative,
        digits,
    )
}
