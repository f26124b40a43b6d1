//! Result rendering for the command line.

use frac_num::{BigRat, NumError};
use num_bigint::BigInt;
use num_traits::Zero;

use crate::config::FracConfig;

/// Prints a result per the output settings.
///
/// The canonical fraction always comes first. Mixed-number and
/// repeating-decimal renderings follow on their own lines when enabled,
/// and are skipped entirely for whole results where all three lines
/// would read the same.
pub fn print_value(value: &BigRat, config: &FracConfig) {
    println!("= {}", value);
    if value.is_integer() {
        return;
    }
    if config.mixed_output {
        println!("= {}", value.as_mixed());
    }
    if config.decimal_output {
        match decimal_string(value) {
            Ok(text) => println!("= {}", text),
            Err(e) => println!("Error: {}", e),
        }
    }
}

/// Formats a value as a positional decimal with the reptend in
/// parentheses: `31/15` renders as `2.0(6)`, `-1/2` as `-0.5`.
pub fn decimal_string(value: &BigRat) -> Result<String, NumError> {
    let (whole, info) = value.decompose()?;
    let mut out = String::new();
    if info.negative && whole.is_zero() {
        // Sign lives in the digit groups, not the zero whole part
        out.push('-');
    }
    out.push_str(&whole.to_string());
    let pre = digit_block(&info.pre, info.pre_leading_zeros);
    let rep = digit_block(&info.reptend, info.leading_zeros);
    if pre.is_empty() && rep.is_empty() {
        return Ok(out);
    }
    out.push('.');
    out.push_str(&pre);
    if !rep.is_empty() {
        out.push('(');
        out.push_str(&rep);
        out.push(')');
    }
    Ok(out)
}

fn digit_block(digits: &BigInt, leading_zeros: usize) -> String {
    let mut block = "0".repeat(leading_zeros);
    if !digits.is_zero() {
        block.push_str(&digits.to_string());
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(num: i64, den: i64) -> BigRat {
        BigRat::new(BigInt::from(num), BigInt::from(den)).unwrap()
    }

    #[test]
    fn renders_mixed_repeating_expansion() {
        assert_eq!(decimal_string(&big(31, 15)).unwrap(), "2.0(6)");
    }

    #[test]
    fn renders_terminating_expansion() {
        assert_eq!(decimal_string(&big(1, 4)).unwrap(), "0.25");
    }

    #[test]
    fn renders_negative_proper_fraction() {
        assert_eq!(decimal_string(&big(-1, 2)).unwrap(), "-0.5");
    }

    #[test]
    fn renders_negative_improper_fraction() {
        assert_eq!(decimal_string(&big(-7, 2)).unwrap(), "-3.5");
    }

    #[test]
    fn renders_pure_reptend_with_leading_zero() {
        assert_eq!(decimal_string(&big(1, 33)).unwrap(), "0.(03)");
    }

    #[test]
    fn renders_whole_value_without_radix_point() {
        assert_eq!(decimal_string(&big(7, 1)).unwrap(), "7");
    }
}
