//! Error types for expression parsing and evaluation.

use frac_num::NumError;
use thiserror::Error;

/// Errors reported while scanning or evaluating an infix expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character outside the expression grammar, with its byte offset.
    #[error("unexpected character '{ch}' at byte {at}")]
    UnexpectedChar { ch: char, at: usize },

    /// A malformed numeric literal, with its byte offset.
    #[error("invalid numeric literal '{text}' at byte {at}")]
    InvalidLiteral { text: String, at: usize },

    /// More `(` than `)` or the other way around.
    #[error("unbalanced parentheses")]
    UnbalancedParens,

    /// An operator was applied with too few operands on the stack.
    #[error("operator '{0}' is missing an operand")]
    MissingOperand(char),

    /// Nothing to evaluate.
    #[error("empty expression")]
    EmptyExpression,

    /// Evaluation finished with leftover operands.
    #[error("expression leaves more than one value")]
    DanglingOperand,

    /// Arithmetic on the operand stack failed.
    #[error("arithmetic failure: {0}")]
    Arithmetic(#[from] NumError),
}
