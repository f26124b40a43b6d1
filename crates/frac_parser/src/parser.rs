//! Shunting-yard evaluation of infix expressions.
//!
//! Two explicit stacks: operators (with `(` as a floor marker) and
//! operands, which hold fully evaluated [`Rational`] values. Operators
//! apply as soon as precedence allows, so the expression is folded in a
//! single left-to-right pass without building a syntax tree.

use frac_num::{GcdStrategy, Int, OverflowPolicy, Rational};

use crate::error::ParseError;
use crate::token::{Scanner, Token};

/// Evaluates an infix expression into an exact fraction.
///
/// Literals go through [`Rational::approximate`], so integers and plain
/// decimals both land exactly. Unary `+`/`-` bind tighter than every
/// binary operator; `*`, `/` and `%` bind tighter than `+` and `-`; all
/// binary operators are left-associative.
pub fn parse<T, G, P>(input: &str) -> Result<Rational<T, G, P>, ParseError>
where
    T: Int,
    G: GcdStrategy<T>,
    P: OverflowPolicy<T>,
{
    Evaluator::new(input).run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pos,
    Neg,
    LParen,
}

impl Op {
    fn precedence(self) -> u8 {
        match self {
            Op::LParen => 0,
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div | Op::Rem => 2,
            Op::Pos | Op::Neg => 3,
        }
    }

    fn is_unary(self) -> bool {
        matches!(self, Op::Pos | Op::Neg)
    }

    fn symbol(self) -> char {
        match self {
            Op::Add | Op::Pos => '+',
            Op::Sub | Op::Neg => '-',
            Op::Mul => '*',
            Op::Div => '/',
            Op::Rem => '%',
            Op::LParen => '(',
        }
    }
}

struct Evaluator<'a, T, G, P> {
    scanner: Scanner<'a>,
    ops: Vec<Op>,
    vals: Vec<Rational<T, G, P>>,
    /// Whether the previous significant token completed an operand;
    /// decides unary versus binary for `+` and `-`.
    after_operand: bool,
}

impl<'a, T, G, P> Evaluator<'a, T, G, P>
where
    T: Int,
    G: GcdStrategy<T>,
    P: OverflowPolicy<T>,
{
    fn new(input: &'a str) -> Self {
        Evaluator {
            scanner: Scanner::new(input),
            ops: Vec::new(),
            vals: Vec::new(),
            after_operand: false,
        }
    }

    fn run(mut self) -> Result<Rational<T, G, P>, ParseError> {
        while let Some(token) = self.scanner.next_token() {
            let (_, token) = token?;
            match token {
                Token::Number(x) => {
                    self.vals.push(Rational::approximate(x)?);
                    self.after_operand = true;
                }
                Token::LParen => {
                    self.ops.push(Op::LParen);
                    self.after_operand = false;
                }
                Token::RParen => {
                    self.close_paren()?;
                    self.after_operand = true;
                }
                Token::Plus | Token::Minus if !self.after_operand => {
                    let op = if token == Token::Plus { Op::Pos } else { Op::Neg };
                    self.shift(op)?;
                }
                Token::Plus => self.shift(Op::Add)?,
                Token::Minus => self.shift(Op::Sub)?,
                Token::Star => self.shift(Op::Mul)?,
                Token::Slash => self.shift(Op::Div)?,
                Token::Percent => self.shift(Op::Rem)?,
            }
        }
        while let Some(op) = self.ops.pop() {
            if op == Op::LParen {
                return Err(ParseError::UnbalancedParens);
            }
            self.apply(op)?;
        }
        let result = self.vals.pop().ok_or(ParseError::EmptyExpression)?;
        if !self.vals.is_empty() {
            return Err(ParseError::DanglingOperand);
        }
        Ok(result)
    }

    /// Pushes `op`, first applying stack operators that bind at least
    /// as tight. Unary operators only yield to strictly tighter ones so
    /// that chains like `--x` nest instead of misfiring.
    fn shift(&mut self, op: Op) -> Result<(), ParseError> {
        while let Some(&top) = self.ops.last() {
            let binds = if op.is_unary() {
                top.precedence() > op.precedence()
            } else {
                top.precedence() >= op.precedence()
            };
            if top == Op::LParen || !binds {
                break;
            }
            self.ops.pop();
            self.apply(top)?;
        }
        self.ops.push(op);
        self.after_operand = false;
        Ok(())
    }

    fn close_paren(&mut self) -> Result<(), ParseError> {
        loop {
            match self.ops.pop() {
                Some(Op::LParen) => return Ok(()),
                Some(op) => self.apply(op)?,
                None => return Err(ParseError::UnbalancedParens),
            }
        }
    }

    fn apply(&mut self, op: Op) -> Result<(), ParseError> {
        if op.is_unary() {
            let v = self
                .vals
                .pop()
                .ok_or(ParseError::MissingOperand(op.symbol()))?;
            let v = if op == Op::Neg { v.neg()? } else { v };
            self.vals.push(v);
            return Ok(());
        }
        let rhs = self
            .vals
            .pop()
            .ok_or(ParseError::MissingOperand(op.symbol()))?;
        let lhs = self
            .vals
            .pop()
            .ok_or(ParseError::MissingOperand(op.symbol()))?;
        let out = match op {
            Op::Add => lhs.add(&rhs)?,
            Op::Sub => lhs.sub(&rhs)?,
            Op::Mul => lhs.mul(&rhs)?,
            Op::Div => lhs.div(&rhs)?,
            Op::Rem => lhs.modulo(&rhs)?,
            Op::Pos | Op::Neg | Op::LParen => unreachable!(),
        };
        self.vals.push(out);
        Ok(())
    }
}
