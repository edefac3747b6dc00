use std::convert::TryFrom;
use std::process;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use factored::{Factorization, Fraction, Parse, Result};

/// Exact fractions over prime factorizations.
///
/// Without a subcommand, computes `1/20 * 10/3 + 1/6`.
#[derive(Parser)]
#[clap(name = "factored", version)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the prime factorization of each value
    Factor {
        /// Non-negative integers
        #[clap(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Evaluate fractions and operators from left to right, such as `1/20 '*' 10/3 + 1/6`
    Eval {
        /// Fractions such as `3`, `-1/2` or `0.25`, separated by one of `+ - * /`
        #[clap(required = true, allow_hyphen_values = true)]
        terms: Vec<String>,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => demo(),
        Some(Commands::Factor { values }) => factor(&values),
        Some(Commands::Eval { terms }) => eval(&terms),
    };

    if let Err(error) = result {
        eprintln!("{}", error);
        process::exit(1);
    }
}

/// Directives from `RUST_LOG` when present, only warnings otherwise.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn demo() -> Result<()> {
    let product = "1/20".parse::<Fraction>()?.multiply(&"10/3".parse::<Fraction>()?);
    let sum = product.add(&"1/6".parse::<Fraction>()?);

    println!("{}", sum);
    Ok(())
}

fn factor(values: &[String]) -> Result<()> {
    for text in values {
        let value = text.parse::<i64>()
            .map_err(|error| Parse::wrap_other(error, format!("Failed to parse \"{}\" as an integer.", text)))?;

        println!("{}", Factorization::try_from(value)?);
    }

    Ok(())
}

fn eval(terms: &[String]) -> Result<()> {
    let (first, rest) = terms.split_first()
        .ok_or_else(|| Parse::new("Nothing to evaluate."))?;

    let mut result = first.parse::<Fraction>()?;
    for pair in rest.chunks(2) {
        let (operator, operand) = match pair {
            [operator, operand] => (operator, operand.parse::<Fraction>()?),
            _ => return Err(Parse::new(format!("Operator \"{}\" is missing an operand.", pair[0])).into()),
        };

        result = apply(operator, &result, &operand)?;
        debug!(%operator, %operand, %result, "applied operator");
    }

    println!("{}", result);
    Ok(())
}

fn apply(operator: &str, left: &Fraction, right: &Fraction) -> Result<Fraction> {
    match operator {
        "+" => left.checked_add(right),
        "-" => left.checked_minus(right),
        "*" => left.checked_multiply(right),
        "/" => left.checked_divide(right),
        other => Err(Parse::new(format!(
            "Unknown operator \"{}\", expected one of + - * /.", other,
        )).into()),
    }
}

#[cfg(test)]
mod test {
    use factored::{Error, Fraction};

    use crate::{apply, log_filter};

    fn fraction(text: &str) -> Fraction {
        text.parse().unwrap()
    }

    #[test]
    fn test_apply() {
        let (left, right) = (fraction("1/2"), fraction("1/3"));
        assert_eq!(apply("+", &left, &right).unwrap(), fraction("5/6"));
        assert_eq!(apply("-", &left, &right).unwrap(), fraction("1/6"));
        assert_eq!(apply("*", &left, &right).unwrap(), fraction("1/6"));
        assert_eq!(apply("/", &left, &right).unwrap(), fraction("3/2"));
        assert!(matches!(apply("/", &left, &fraction("0")), Err(Error::DivisionByZero)));
    }

    #[test]
    fn test_apply_unknown_operator() {
        let (left, right) = (fraction("1/2"), fraction("1/3"));
        assert!(matches!(apply("x", &left, &right), Err(Error::Parse(_))));
        assert!(matches!(apply("^", &left, &right), Err(Error::Parse(_))));
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(log_filter(None).to_string(), "warn");
        assert_eq!(log_filter(Some("debug".to_string())).to_string(), "debug");
        assert_eq!(log_filter(Some("factored=trace".to_string())).to_string(), "factored=trace");
    }
}
