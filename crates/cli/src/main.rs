use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use numerus::{Engine, Method, Problem, Rule, Settings};
use tracing::{Level, debug};

#[derive(Debug, Parser)]
#[command(
    name = "numerus",
    about = "Integrate and find roots of single-variable formulas",
    version,
    propagate_version = true
)]
struct Cli {
    /// Raise log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Wall-clock budget per call, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 5_000, global = true)]
    budget_ms: u64,

    /// Iteration limit for the root finders
    #[arg(long, value_name = "N", default_value_t = 10_000, global = true)]
    max_iters: usize,

    /// Pass limit for adaptive quadrature
    #[arg(long, value_name = "N", default_value_t = 64, global = true)]
    max_passes: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Integrate a formula over [FROM, TO]
    ///
    /// Example:
    ///   numerus integrate "x^2" --from 1 --to 4 --rule simpson38
    Integrate {
        /// Formula text, e.g. "sin(x) / x"
        formula: String,

        /// Free variable of the formula
        #[arg(long, default_value = "x")]
        variable: String,

        /// trapezoidal, simpson13, simpson38 or newton_cotes4
        #[arg(long, default_value = "simpson13")]
        rule: Rule,

        #[arg(long, allow_negative_numbers = true)]
        from: f64,

        #[arg(long, allow_negative_numbers = true)]
        to: f64,

        /// Requested precision, as a number of decimal digits
        #[arg(short, long, default_value_t = 6)]
        digits: u32,
    },

    /// Find a root of a formula
    ///
    /// Examples:
    ///   numerus root "x^2 - 2" --from 0 --to 2
    ///   numerus root "x^2 - 2" --method newton --derivative "2*x"
    Root {
        /// Formula text, e.g. "x^3 - 2*x + 2"
        formula: String,

        /// Free variable of the formula
        #[arg(long, default_value = "x")]
        variable: String,

        /// bisection, false_position, newton_raphson or secant
        #[arg(long, default_value = "bisection")]
        method: Method,

        /// Derivative formula, required by newton_raphson
        #[arg(long)]
        derivative: Option<String>,

        /// Left end of the bracket (bisection and false_position)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        from: f64,

        /// Right end of the bracket (bisection and false_position)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        to: f64,

        /// Requested precision, as a number of decimal digits
        #[arg(short, long, default_value_t = 6)]
        digits: u32,
    },
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            budget: Duration::from_millis(self.budget_ms),
            max_iters: self.max_iters,
            max_passes: self.max_passes,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<f64> {
    let engine = Engine::new(cli.settings());
    debug!(settings = ?engine.settings(), "starting");

    match cli.command {
        Command::Integrate {
            formula,
            variable,
            rule,
            from,
            to,
            digits,
        } => {
            let problem = Problem::new(formula, variable, from, to);
            engine
                .integrate(rule, &problem, digits)
                .with_context(|| format!("integrating `{}` with {rule}", problem.body))
        }
        Command::Root {
            formula,
            variable,
            method,
            derivative,
            from,
            to,
            digits,
        } => {
            let problem = Problem::new(formula, variable, from, to);
            engine
                .find_root(method, &problem, derivative.as_deref(), digits)
                .with_context(|| format!("finding a root of `{}` with {method}", problem.body))
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let value = run(cli)?;
    println!("{value}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integrate() {
        let cli = Cli::try_parse_from([
            "numerus",
            "integrate",
            "x^2",
            "--from",
            "-1",
            "--to",
            "4",
            "--rule",
            "simpson-3/8",
            "-d",
            "8",
        ])
        .expect("valid arguments");

        match cli.command {
            Command::Integrate {
                rule, from, digits, ..
            } => {
                assert_eq!(rule, Rule::Simpson38);
                assert_eq!(from, -1.0);
                assert_eq!(digits, 8);
            }
            Command::Root { .. } => panic!("expected integrate"),
        }
    }

    #[test]
    fn parses_root_with_global_flags() {
        let cli = Cli::try_parse_from([
            "numerus",
            "root",
            "x^2 - 2",
            "--method",
            "newton",
            "--derivative",
            "2*x",
            "-vv",
            "--budget-ms",
            "250",
        ])
        .expect("valid arguments");

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.settings().budget, Duration::from_millis(250));
        match &cli.command {
            Command::Root {
                method, derivative, ..
            } => {
                assert_eq!(*method, Method::NewtonRaphson);
                assert_eq!(derivative.as_deref(), Some("2*x"));
            }
            Command::Integrate { .. } => panic!("expected root"),
        }
    }

    #[test]
    fn rejects_unknown_rule() {
        let result = Cli::try_parse_from([
            "numerus", "integrate", "x", "--from", "0", "--to", "1", "--rule", "gauss",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn runs_both_commands() {
        let cli = Cli::try_parse_from(["numerus", "integrate", "x", "--from", "0", "--to", "2"])
            .expect("valid arguments");
        assert!((run(cli).expect("should integrate") - 2.0).abs() < 1e-9);

        let cli = Cli::try_parse_from(["numerus", "root", "x - 0.25", "--from", "0", "--to", "1"])
            .expect("valid arguments");
        assert!((run(cli).expect("should solve") - 0.25).abs() < 1e-6);
    }

    #[test]
    fn errors_carry_context() {
        let cli = Cli::try_parse_from(["numerus", "root", "x^2 + 1", "--from", "-1", "--to", "1"])
            .expect("valid arguments");
        let err = run(cli).expect_err("no sign change");
        assert!(err.to_string().contains("finding a root of `x^2 + 1`"));
    }
}
