//! `frac`, a calculator for exact fraction arithmetic.
//!
//! With arguments, each one is evaluated as an expression and printed.
//! Without arguments, an interactive REPL starts.

mod config;
mod render;
mod repl;

use std::process::ExitCode;

use frac_num::BigRat;
use frac_parser::ParseError;
use tracing::debug;

use crate::config::FracConfig;

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let config = FracConfig::load();
    debug!(?config, "loaded configuration");

    let exprs: Vec<String> = std::env::args().skip(1).collect();
    if exprs.is_empty() {
        return match repl::run(config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    for expr in &exprs {
        let parsed: Result<BigRat, ParseError> = frac_parser::parse(expr);
        match parsed {
            Ok(value) => render::print_value(&value, &config),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
