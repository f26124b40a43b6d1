//! Interactive read-eval-print loop.

use frac_num::BigRat;
use frac_parser::ParseError;
use num_traits::ToPrimitive;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::config::FracConfig;
use crate::render;

pub fn run(mut config: FracConfig) -> rustyline::Result<()> {
    println!("frac v{} - exact fraction calculator", env!("CARGO_PKG_VERSION"));
    println!("Enter an expression (e.g., '17/21 + 44/35'), or 'help' for commands.");

    let rl_config = rustyline::Config::builder().max_history_size(500)?.build();
    let mut rl = DefaultEditor::with_config(rl_config)?;

    // History file path: ~/.frac_history
    let history_path = dirs::home_dir()
        .map(|p| p.join(".frac_history"))
        .unwrap_or_else(|| std::path::PathBuf::from(".frac_history"));

    // Load history if file exists (errors are silently ignored)
    let _ = rl.load_history(&history_path);

    loop {
        match rl.readline("frac> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;

                if line == "quit" || line == "exit" {
                    println!("Goodbye!");
                    break;
                }

                // Split by semicolon to allow several inputs on one line,
                // e.g. "mixed on; 17/21 + 44/35"
                for statement in line.split(';') {
                    let statement = statement.trim();
                    if statement.is_empty() {
                        continue;
                    }
                    handle_command(statement, &mut config);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    let _ = rl.save_history(&history_path);
    Ok(())
}

fn handle_command(line: &str, config: &mut FracConfig) {
    if line == "help" {
        print_help();
    } else if line == "config" {
        show_config(config);
    } else if line == "defaults" {
        *config = FracConfig::restore();
        println!("Settings restored to defaults.");
    } else if line == "mixed on" || line == "mixed off" {
        config.mixed_output = line.ends_with(" on");
        save(config);
        println!("mixed output: {}", onoff(config.mixed_output));
    } else if line == "decimal on" || line == "decimal off" {
        config.decimal_output = line.ends_with(" on");
        save(config);
        println!("decimal output: {}", onoff(config.decimal_output));
    } else if let Some(rest) = line.strip_prefix("digits ") {
        set_digits(rest.trim(), config);
    } else if let Some(rest) = line.strip_prefix("sqrt ") {
        run_sqrt(rest, config);
    } else if let Some(rest) = line.strip_prefix("terms ") {
        run_terms(rest);
    } else {
        eval(line, config);
    }
}

fn eval(line: &str, config: &FracConfig) {
    let parsed: Result<BigRat, ParseError> = frac_parser::parse(line);
    match parsed {
        Ok(value) => render::print_value(&value, config),
        Err(e) => println!("Error: {}", e),
    }
}

fn run_sqrt(expr: &str, config: &FracConfig) {
    let outcome: Result<BigRat, ParseError> = frac_parser::parse(expr)
        .and_then(|v: BigRat| Ok(v.sqrt_with_limit(config.sqrt_digit_limit)?));
    match outcome {
        Ok(root) => {
            println!("= {}", root);
            if !root.is_integer() {
                if let Some(x) = approx_f64(&root) {
                    println!("~ {}", x);
                }
            }
        }
        Err(e) => println!("Error: {}", e),
    }
}

fn run_terms(expr: &str) {
    let parsed: Result<BigRat, ParseError> = frac_parser::parse(expr);
    match parsed {
        Ok(value) => {
            let terms: Vec<String> = value.terms().map(|t| t.to_string()).collect();
            match terms.split_first() {
                Some((first, rest)) if !rest.is_empty() => {
                    println!("[{}; {}]", first, rest.join(", "));
                }
                Some((first, _)) => println!("[{}]", first),
                None => println!("[]"),
            }
        }
        Err(e) => println!("Error: {}", e),
    }
}

fn set_digits(arg: &str, config: &mut FracConfig) {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => {
            config.sqrt_digit_limit = n;
            save(config);
            println!("sqrt digit limit: {}", n);
        }
        _ => println!("Error: digits expects a positive count"),
    }
}

fn save(config: &FracConfig) {
    if let Err(e) = config.save() {
        println!("Error saving config: {}", e);
    }
}

fn approx_f64(value: &BigRat) -> Option<f64> {
    Some(value.numer().to_f64()? / value.denom().to_f64()?)
}

fn onoff(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn show_config(config: &FracConfig) {
    println!("mixed output:     {}", onoff(config.mixed_output));
    println!("decimal output:   {}", onoff(config.decimal_output));
    println!("sqrt digit limit: {}", config.sqrt_digit_limit);
}

fn print_help() {
    println!("Enter an expression to evaluate it exactly:");
    println!("  17/21 + 44/35");
    println!("  (11/2) * (4.25 + 3.75)");
    println!();
    println!("Commands:");
    println!("  sqrt <expr>     square root (exact when possible, else iterated)");
    println!("  terms <expr>    continued-fraction partial quotients");
    println!("  mixed on|off    also print results as mixed numbers");
    println!("  decimal on|off  also print results as repeating decimals");
    println!("  digits <n>      denominator digit limit for sqrt");
    println!("  config          show current settings");
    println!("  defaults        restore default settings");
    println!("  help            this text");
    println!("  quit            leave");
}
