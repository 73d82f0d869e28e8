use std::{cell::RefCell, convert::Infallible};

use approx::assert_relative_eq;
use thiserror::Error;

use numerus_core::{Deadline, Function, Interval, Precision};

use super::{
    Action, Config, Error, Event, Rule, Status, integrate, integrate_unobserved,
};

/// f(x) = x².
struct Square;

impl Function for Square {
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(x * x)
    }
}

/// f(x) = x³, odd about zero.
struct Cube;

impl Function for Cube {
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(x * x * x)
    }
}

/// f(x) = sin(x), which no rule integrates exactly.
struct Sine;

impl Function for Sine {
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(x.sin())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("undefined above {limit}")]
struct Undefined {
    limit: f64,
}

/// Fails for every x above `limit`.
struct FailsAbove {
    limit: f64,
}

impl Function for FailsAbove {
    type Error = Undefined;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        if x > self.limit {
            Err(Undefined { limit: self.limit })
        } else {
            Ok(1.0)
        }
    }
}

/// Returns NaN at zero.
struct HoleAtZero;

impl Function for HoleAtZero {
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(if x == 0.0 { f64::NAN } else { 1.0 / x })
    }
}

fn interval(a: f64, b: f64) -> Interval {
    Interval::new(a, b).expect("finite endpoints")
}

fn config(digits: u32) -> Config {
    Config::from_precision(Precision::new(digits))
}

/// Runs with a never-expiring deadline and records every event.
fn record<F: Function>(function: &F, rule: Rule, a: f64, b: f64, digits: u32) -> Vec<Event> {
    let events = RefCell::new(Vec::new());
    let observer = |event: &Event| {
        events.borrow_mut().push(*event);
        None
    };
    integrate(
        function,
        rule,
        interval(a, b),
        &config(digits),
        &Deadline::never(),
        observer,
    )
    .expect("should integrate");
    events.into_inner()
}

#[test]
fn square_converges_to_21_with_every_refining_rule() {
    for rule in [Rule::Trapezoidal, Rule::Simpson13, Rule::Simpson38] {
        let solution = integrate_unobserved(
            &Square,
            rule,
            interval(1.0, 4.0),
            &config(5),
            &Deadline::never(),
        )
        .expect("should integrate");

        assert_eq!(solution.status, Status::Converged, "{rule}");
        assert!((solution.value - 21.0).abs() < 1e-4, "{rule}: {}", solution.value);
        assert!(solution.relative_error.expect("refined") < 1e-5);
    }
}

#[test]
fn trapezoidal_relative_errors_do_not_increase() {
    let events = record(&Square, Rule::Trapezoidal, 1.0, 4.0, 5);
    let errors: Vec<f64> = events.iter().filter_map(|e| e.relative_error).collect();

    assert!(errors.len() > 2);
    for pair in errors.windows(2) {
        assert!(pair[1] <= pair[0], "errors increased: {errors:?}");
    }
    assert!(*errors.last().unwrap() < 1e-5);
}

#[test]
fn simpson13_only_uses_even_partitions() {
    let events = record(&Sine, Rule::Simpson13, 0.0, 3.0, 12);
    assert!(events.len() > 3);
    assert!(events.iter().all(|e| e.partitions % 2 == 0));
}

#[test]
fn simpson38_only_uses_partitions_divisible_by_three() {
    let events = record(&Sine, Rule::Simpson38, 0.0, 3.0, 12);
    assert!(events.len() > 3);
    assert!(events.iter().all(|e| e.partitions % 3 == 0));

    let partitions: Vec<usize> = events.iter().map(|e| e.partitions).collect();
    assert_eq!(&partitions[..3], &[3, 6, 18]);
}

#[test]
fn sine_integral_matches_closed_form() {
    // ∫₀^π sin(x) dx = 2
    for rule in [Rule::Trapezoidal, Rule::Simpson13, Rule::Simpson38] {
        let solution = integrate_unobserved(
            &Sine,
            rule,
            interval(0.0, std::f64::consts::PI),
            &config(8),
            &Deadline::never(),
        )
        .expect("should integrate");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.value, 2.0, max_relative = 1e-7);
    }
}

#[test]
fn boole_runs_a_single_pass() {
    let events = record(&Square, Rule::Boole, 1.0, 4.0, 12);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].partitions, 4);

    let solution = integrate_unobserved(
        &Square,
        Rule::Boole,
        interval(1.0, 4.0),
        &config(12),
        &Deadline::never(),
    )
    .expect("should integrate");

    assert_eq!(solution.status, Status::SinglePass);
    assert_eq!(solution.passes, 1);
    assert_eq!(solution.relative_error, None);
    assert_relative_eq!(solution.value, 21.0, epsilon = 1e-12);
}

#[test]
fn expired_deadline_returns_first_estimate() {
    let solution = integrate_unobserved(
        &Square,
        Rule::Trapezoidal,
        interval(1.0, 4.0),
        &config(5),
        &Deadline::expired(),
    )
    .expect("deadline is not an error");

    // One trapezoid over [1, 4]: (1 + 16) * 3 / 2
    assert_eq!(solution.status, Status::DeadlineExpired);
    assert_eq!(solution.passes, 1);
    assert_eq!(solution.partitions, 1);
    assert_relative_eq!(solution.value, 25.5);
}

#[test]
fn exact_zero_integral_converges() {
    let solution = integrate_unobserved(
        &Cube,
        Rule::Trapezoidal,
        interval(-1.0, 1.0),
        &config(6),
        &Deadline::never(),
    )
    .expect("should integrate");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.passes, 2);
    assert_eq!(solution.value, 0.0);
}

#[test]
fn pass_limit_stops_refinement() {
    let config = Config::new(0.0, 3).expect("valid config");
    let solution = integrate_unobserved(
        &Sine,
        Rule::Simpson13,
        interval(0.0, 1.0),
        &config,
        &Deadline::never(),
    )
    .expect("should integrate");

    assert_eq!(solution.status, Status::MaxPasses);
    assert_eq!(solution.passes, 3);
    assert_eq!(solution.partitions, 8);
}

#[test]
fn observer_can_stop_refinement() {
    let mut seen = 0;
    let observer = |event: &Event| {
        seen += 1;
        (event.pass == 2).then_some(Action::StopEarly)
    };

    let solution = integrate(
        &Sine,
        Rule::Trapezoidal,
        interval(0.0, 1.0),
        &config(12),
        &Deadline::never(),
        observer,
    )
    .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.passes, 2);
    assert_eq!(solution.partitions, 2);
    assert_eq!(seen, 2);
}

#[test]
fn evaluation_failure_aborts() {
    let result = integrate_unobserved(
        &FailsAbove { limit: 2.0 },
        Rule::Simpson13,
        interval(0.0, 4.0),
        &config(6),
        &Deadline::never(),
    );

    match result {
        Err(Error::Function { x, source }) => {
            assert!(x > 2.0);
            assert_eq!(source, Undefined { limit: 2.0 });
        }
        other => panic!("expected function error, got {other:?}"),
    }
}

#[test]
fn non_finite_sample_aborts() {
    let result = integrate_unobserved(
        &HoleAtZero,
        Rule::Trapezoidal,
        interval(-1.0, 1.0),
        &config(6),
        &Deadline::never(),
    );

    assert!(matches!(
        result,
        Err(Error::NonFiniteSample { x, .. }) if x == 0.0
    ));
}
