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

//! Problem text parser.
//!
//! The pipeline runs in one direction:
//!
//! 1. [`normalize`] makes implicit products explicit over the whole text.
//! 2. The driver looks for `Solve` and then `such that` at the start of the
//!    remaining text, skipping whitespace between steps.
//! 3. The clause splitter cuts each phase into clauses.
//! 4. Equation clauses are split at `=` and both sides go to the expression
//!    parser; constraint clauses go to the constraint parser.
//!
//! Every stage is built on the [`combinator`] engine and scans plain slices,
//! so parsing is re-entrant and holds no state between calls.
//!
//! Diagnostics point into the normalized text. Normalization only inserts
//! `*`, so line numbers match the input; columns can shift right.

pub mod combinator;
mod constraint;
mod expr;
mod normalize;
mod scan;
mod split;

use crate::ast::{Constraint, Equation, Expression, Problem, SourceSpan, Span};
use crate::diagnostics::{Failure, ParseError};
use log::debug;
use nom::Slice;

pub use normalize::normalize;
pub use split::Terminator;

use self::combinator::keyword;
use self::constraint::constraint_clause;
use self::expr::expression_clause;
use self::scan::{find_top_level, is_blank, trim_end, ws0};
use self::split::split;

/// Keyword opening the equation list.
pub const SOLVE: &str = "Solve";

/// Keyword separating equations from constraints.
pub const SUCH_THAT: &str = "such that";

/// Deepest parenthesis nesting accepted inside one clause.
pub const MAX_NESTING: usize = 128;

const INLINE: &str = "<inline>";

const EQUATION_TERMINATORS: &[Terminator] =
    &[Terminator::Comma, Terminator::Period, Terminator::SuchThat];

const CONSTRAINT_TERMINATORS: &[Terminator] = &[Terminator::Comma, Terminator::Period];

/// Driver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    BeforeSolve,
    Equations,
    Constraints,
}

/// Owned result of [`split_clauses`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseSplit {
    /// Raw clause text in source order.
    pub clauses: Vec<String>,
    /// Text after the terminator that stopped the scan.
    pub remainder: String,
    /// Terminator that stopped the scan, `None` at end of input.
    pub stop: Option<Terminator>,
}

/// Parses a problem description into equations and constraints.
///
/// Text that does not start with `Solve` yields an empty [`Problem`].
pub fn parse_problem(text: &str) -> Result<Problem, ParseError> {
    parse_problem_in_source(text, INLINE)
}

/// Parses a problem description while tagging diagnostics with a source name/path.
pub fn parse_problem_in_source(text: &str, source_name: &str) -> Result<Problem, ParseError> {
    let normalized = normalize(text);
    problem(Span::new(&normalized))
        .map_err(|failure| ParseError::from_failure(failure, source_name, &normalized))
}

/// Parses one arithmetic expression after normalizing it.
pub fn parse_expression(text: &str) -> Result<Expression, ParseError> {
    let normalized = normalize(text);
    expression_clause(Span::new(&normalized))
        .map_err(|failure| ParseError::from_failure(failure, INLINE, &normalized))
}

/// Parses one constraint after normalizing it.
pub fn parse_constraint(text: &str) -> Result<Constraint, ParseError> {
    let normalized = normalize(text);
    constraint_clause(Span::new(&normalized))
        .map_err(|failure| ParseError::from_failure(failure, INLINE, &normalized))
}

/// Splits `text` into top-level clauses at the given terminators.
pub fn split_clauses(text: &str, terminators: &[Terminator]) -> Result<ClauseSplit, ParseError> {
    let found = split(Span::new(text), terminators)
        .map_err(|failure| ParseError::from_failure(failure, INLINE, text))?;
    Ok(ClauseSplit {
        clauses: found
            .clauses
            .iter()
            .map(|clause| clause.fragment().to_string())
            .collect(),
        remainder: found.remainder.fragment().to_string(),
        stop: found.stop,
    })
}

fn problem(input: Span<'_>) -> Result<Problem, Failure> {
    let solve = keyword(SOLVE);
    let such_that = keyword(SUCH_THAT);
    let mut problem = Problem::default();
    let mut phase = Phase::BeforeSolve;
    let mut rest = input;

    loop {
        rest = ws0(rest);
        match phase {
            Phase::BeforeSolve => {
                let Some((_, after)) = solve.parse(rest) else {
                    debug!("no '{SOLVE}' keyword at start of text; problem is empty");
                    break;
                };
                debug!("entering equations");
                phase = Phase::Equations;
                rest = after;
            }
            Phase::Equations => {
                if rest.fragment().is_empty() {
                    break;
                }
                // `such that` may also open a new sentence after a `.`.
                if let Some((_, after)) = such_that.parse(rest) {
                    debug!("entering constraints");
                    phase = Phase::Constraints;
                    rest = after;
                    continue;
                }
                let found = split(rest, EQUATION_TERMINATORS)?;
                for clause in found.clauses {
                    problem.equations.push(equation_clause(clause)?);
                }
                rest = found.remainder;
                if found.stop == Some(Terminator::SuchThat) {
                    debug!("entering constraints");
                    phase = Phase::Constraints;
                }
            }
            Phase::Constraints => {
                if rest.fragment().is_empty() {
                    break;
                }
                let found = split(rest, CONSTRAINT_TERMINATORS)?;
                for clause in found.clauses {
                    problem.constraints.push(clause_or_empty(clause, constraint_clause)?);
                }
                rest = found.remainder;
            }
        }
    }

    debug!(
        "parsed {} equation(s) and {} constraint(s)",
        problem.equations.len(),
        problem.constraints.len()
    );
    Ok(problem)
}

/// Parses `left = right` with the split at the first top-level `=`.
fn equation_clause(clause: Span<'_>) -> Result<Equation, Failure> {
    clause_or_empty(clause, |clause| {
        let Some(eq) = find_top_level(clause, '=')? else {
            return Err(Failure::structural(
                "equation has no '='",
                SourceSpan::covering(trim_end(ws0(clause))),
            ));
        };
        let left = expression_clause(clause.slice(..eq))?;
        let right = expression_clause(clause.slice(eq + 1..))?;
        Ok(Equation::new(left, right))
    })
}

/// Rejects blank clauses (`a=1,,b=2`) before handing the clause to `parse`.
fn clause_or_empty<'a, T>(
    clause: Span<'a>,
    parse: impl FnOnce(Span<'a>) -> Result<T, Failure>,
) -> Result<T, Failure> {
    if is_blank(clause) {
        return Err(Failure::syntax("empty clause", SourceSpan::point(clause)));
    }
    parse(clause)
}
