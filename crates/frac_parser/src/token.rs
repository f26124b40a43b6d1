//! Character-level scanner for infix expressions.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::ParseError;

/// A scanned token. Numbers carry their parsed source value; the
/// operand type is decided later by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    LParen,
    RParen,
}

pub(crate) struct Scanner<'a> {
    src: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Scanner {
            src,
            chars: src.char_indices().peekable(),
        }
    }

    /// Next token and its byte offset, skipping separators. `None` at
    /// end of input.
    pub(crate) fn next_token(&mut self) -> Option<Result<(usize, Token), ParseError>> {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_ascii_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
        let &(at, c) = self.chars.peek()?;
        let token = match c {
            '0'..='9' | '.' => return Some(self.scan_number(at)),
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '(' => Token::LParen,
            ')' => Token::RParen,
            _ => return Some(Err(ParseError::UnexpectedChar { ch: c, at })),
        };
        self.chars.next();
        Some(Ok((at, token)))
    }

    /// Scans an integer or plain-decimal literal. No scientific
    /// notation; a lone or repeated point is rejected by the float
    /// parser.
    fn scan_number(&mut self, start: usize) -> Result<(usize, Token), ParseError> {
        let mut end = start;
        while let Some(&(i, c)) = self.chars.peek() {
            if c.is_ascii_digit() || c == '.' {
                end = i + c.len_utf8();
                self.chars.next();
            } else {
                break;
            }
        }
        let text = &self.src[start..end];
        let value: f64 = text.parse().map_err(|_| ParseError::InvalidLiteral {
            text: text.to_string(),
            at: start,
        })?;
        Ok((start, Token::Number(value)))
    }
}
