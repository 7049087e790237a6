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

//! Constraint parser.
//!
//! Mirrors the expression grammar one level up: comparisons are the terms,
//! `and` plays the role of `*` and `or` the role of `+`, so
//! `a and b or c` groups as `(a and b) or c`.

use crate::ast::{Constraint, Expression, SourceSpan, Span};
use crate::diagnostics::Failure;
use nom::Slice;

use super::combinator::keyword;
use super::expr::{Parsed, sum};
use super::scan::{contains_comparator, matching_paren, peek, trim_end, ws0};

/// Parses a whole clause as one constraint.
pub(crate) fn constraint_clause(clause: Span<'_>) -> Result<Constraint, Failure> {
    if !contains_comparator(clause) {
        return Err(Failure::structural(
            "constraint has no '<' or '>'",
            SourceSpan::covering(trim_end(ws0(clause))),
        ));
    }
    let (constraint, rest) = disjunction(clause)?;
    let rest = ws0(rest);
    match peek(rest) {
        None => Ok(constraint),
        Some(')') => Err(Failure::structural("unmatched ')'", SourceSpan::point(rest))),
        Some(c) => Err(Failure::syntax(
            format!("unexpected '{c}' after constraint"),
            SourceSpan::point(rest),
        )),
    }
}

/// Parses `conjunction ("or" conjunction)*`.
fn disjunction(input: Span<'_>) -> Parsed<'_, Constraint> {
    let or = keyword("or");
    let (mut left, mut input) = conjunction(input)?;
    while let Some((_, after)) = or.parse(ws0(input)) {
        let (right, rest) = conjunction(after)?;
        left = Constraint::or(left, right);
        input = rest;
    }
    Ok((left, input))
}

/// Parses `atom ("and" atom)*`.
fn conjunction(input: Span<'_>) -> Parsed<'_, Constraint> {
    let and = keyword("and");
    let (mut left, mut input) = atom(input)?;
    while let Some((_, after)) = and.parse(ws0(input)) {
        let (right, rest) = atom(after)?;
        left = Constraint::and(left, right);
        input = rest;
    }
    Ok((left, input))
}

/// Parses a parenthesized sub-constraint or a single comparison.
///
/// A leading `(` opens a sub-constraint only when its contents compare
/// something; otherwise it is the start of an arithmetic operand.
fn atom(input: Span<'_>) -> Parsed<'_, Constraint> {
    let start = ws0(input);
    if peek(start) == Some('(') {
        let close = matching_paren(start)?;
        let interior = start.slice(1..close);
        if contains_comparator(interior) {
            let inner = constraint_clause(interior)?;
            return Ok((inner, start.slice(close + 1..)));
        }
    }
    comparison(start)
}

/// Parses `sum ('<' | '>') sum`.
fn comparison(input: Span<'_>) -> Parsed<'_, Constraint> {
    let (left, rest) = sum(input)?;
    let at = ws0(rest);
    let build: fn(Expression, Expression) -> Constraint = match peek(at) {
        Some('<') => Constraint::less_than,
        Some('>') => Constraint::greater_than,
        Some(c) => {
            return Err(Failure::syntax(
                format!("expected '<' or '>' but found '{c}'"),
                SourceSpan::point(at),
            ));
        }
        None => {
            return Err(Failure::syntax(
                "expected '<' or '>' but found end of clause",
                SourceSpan::point(at),
            ));
        }
    };
    let (right, rest) = sum(at.slice(1..))?;
    Ok((build(left, right), rest))
}
