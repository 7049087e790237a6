/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Arithmetic expression parser.
//!
//! Precedence climbing over two levels: a sum is a left-associated chain of
//! products, a product is a left-associated chain of terms. So `2+3*4` is
//! `2 + (3 * 4)` and `a*b*c + d` is `((a * b) * c) + d`.
//!
//! A term is a non-negative integer, a single-letter variable, or a
//! parenthesized expression, each optionally preceded by `-`. Subtraction is
//! addition of a negated term: `x - 2*y` becomes `x + (-2 * y)`.

use crate::ast::{Expression, SourceSpan, Span};
use crate::diagnostics::Failure;
use nom::Slice;

use super::combinator::{Parser, literal, recognize, repeat1, satisfy};
use super::scan::{matching_paren, peek, ws0};

/// Parsed value and remainder, or a located failure.
pub(super) type Parsed<'a, T> = Result<(T, Span<'a>), Failure>;

/// First token of a term.
#[derive(Debug, Clone)]
enum Lexeme<'a> {
    Digits(Span<'a>),
    Letter(char),
    Open,
}

fn lexeme<'a>() -> Parser<'a, Lexeme<'a>> {
    // Each branch is decided by the first character, so committed choice is enough.
    recognize(repeat1(satisfy(|c| c.is_ascii_digit())))
        .map(Lexeme::Digits)
        .or(satisfy(|c| c.is_ascii_alphabetic()).map(Lexeme::Letter))
        .or(literal("(").map(|_| Lexeme::Open))
}

/// Parses a whole clause as one expression.
pub(crate) fn expression_clause(clause: Span<'_>) -> Result<Expression, Failure> {
    let (expression, rest) = sum(clause)?;
    let rest = ws0(rest);
    match peek(rest) {
        None => Ok(expression),
        Some(')') => Err(Failure::structural("unmatched ')'", SourceSpan::point(rest))),
        Some(c) => Err(Failure::syntax(
            format!("unexpected '{c}' after expression"),
            SourceSpan::point(rest),
        )),
    }
}

/// Parses `product (('+' | '-') product)*`.
pub(super) fn sum(input: Span<'_>) -> Parsed<'_, Expression> {
    let (mut left, mut input) = product(input)?;
    loop {
        let at = ws0(input);
        let (right, rest) = match peek(at) {
            Some('+') => product(at.slice(1..))?,
            // The sign stays in place for the next term to absorb.
            Some('-') => product(at)?,
            _ => break,
        };
        left = Expression::add(left, right);
        input = rest;
    }
    Ok((left, input))
}

/// Parses `term (('*' term) | implicit term)*`.
///
/// An implicit product needs a digit or `(` directly after the previous
/// term, with no whitespace between them.
fn product(input: Span<'_>) -> Parsed<'_, Expression> {
    let (mut left, mut input) = term(input)?;
    loop {
        let at = ws0(input);
        let (right, rest) = match peek(at) {
            Some('*') => term(at.slice(1..))?,
            _ if peek(input).is_some_and(|c| c.is_ascii_digit() || c == '(') => term(input)?,
            _ => break,
        };
        left = Expression::mul(left, right);
        input = rest;
    }
    Ok((left, input))
}

/// Parses one optionally negated term.
fn term(input: Span<'_>) -> Parsed<'_, Expression> {
    let start = ws0(input);
    let (negative, body) = match peek(start) {
        Some('-') => (true, ws0(start.slice(1..))),
        _ => (false, start),
    };

    let Some((lexeme, rest)) = lexeme().parse(body) else {
        let message = match peek(body) {
            Some(c) => format!("expected a constant, variable or '(' but found '{c}'"),
            None => "expected a constant, variable or '(' but found end of clause".to_string(),
        };
        return Err(Failure::syntax(message, SourceSpan::point(body)));
    };

    match lexeme {
        Lexeme::Digits(digits) => {
            let value = digits
                .fragment()
                .parse::<i64>()
                .ok()
                .and_then(|v| if negative { v.checked_neg() } else { Some(v) })
                .ok_or_else(|| {
                    Failure::syntax(
                        format!("integer literal '{}' is out of range", digits.fragment()),
                        SourceSpan::covering(digits),
                    )
                })?;
            Ok((Expression::constant(value), rest))
        }
        Lexeme::Letter(name) => Ok((signed(negative, Expression::variable(name)), rest)),
        Lexeme::Open => {
            let close = matching_paren(body)?;
            let inner = expression_clause(body.slice(1..close))?;
            Ok((signed(negative, inner), body.slice(close + 1..)))
        }
    }
}

fn signed(negative: bool, expression: Expression) -> Expression {
    if negative {
        Expression::negated(expression)
    } else {
        expression
    }
}
