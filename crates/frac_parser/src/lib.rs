//! Infix expression evaluation producing exact fractions.
//!
//! A hand-written scanner feeds a shunting-yard evaluator; operands are
//! [`frac_num::Rational`] values and every operator maps onto the
//! fallible arithmetic of that crate.
//!
//! ```
//! use frac_num::Rat64;
//!
//! let v: Rat64 = frac_parser::parse("(11/2) * +(4.25+3.75)")?;
//! assert_eq!(*v.numer(), 44);
//! assert_eq!(*v.denom(), 1);
//! # Ok::<(), frac_parser::ParseError>(())
//! ```

pub mod error;
pub mod parser;
mod token;

pub use error::ParseError;
pub use parser::parse;
