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

//! Parser for semi-natural-language Diophantine problems.
//!
//! ```text
//! Solve x + 2 = 3, y - x = 1 such that x > 0.
//! ```
//!
//! This crate provides:
//! - A small backtracking parser-combinator engine ([`parser::combinator`]).
//! - An implicit-multiplication normalizer (`2x(y)` -> `2*x*(y)`).
//! - A nesting-aware clause splitter.
//! - Precedence-climbing parsers for arithmetic expressions and
//!   `and`/`or` constraints.
//! - A solver-adapter boundary with a bounded integer search backend.
//! - Rich parse diagnostics with line/column/caret output.
//!
//! # Pipeline
//!
//! 1. Normalize the whole text.
//! 2. Find `Solve`, then split equation clauses up to `such that` or `.`.
//! 3. Split constraint clauses after `such that`.
//! 4. Parse each clause into an [`Equation`] or a [`Constraint`].
//! 5. Hand the resulting [`Problem`] to a [`SolverAdapter`].
//!
//! # Trees
//!
//! Expressions have four node kinds: constants, single-letter variables,
//! addition and multiplication. `x - y` is `x + (-1 * y)`, and `-3` is the
//! constant `-3`. Constraints combine `<` and `>` comparisons with `and`,
//! which binds tighter than `or`.

mod ast;
mod diagnostics;
pub mod model;
pub mod parser;

pub use ast::{Assignment, Constraint, Equation, Expression, Problem, SourceSpan, Span};
pub use diagnostics::{FailureKind, ParseError};
pub use model::{BoundedSearch, Outcome, SearchConfig, SolveError, SolverAdapter};
pub use parser::{
    ClauseSplit, MAX_NESTING, Terminator, normalize, parse_constraint, parse_expression,
    parse_problem, parse_problem_in_source, split_clauses,
};

/// Parses a problem and solves it with [`BoundedSearch`].
///
/// # Errors
///
/// Returns [`SolveError::Parse`] with source line/column and caret highlight
/// when parsing fails, or [`SolveError::SearchLimit`] when the search budget
/// runs out.
pub fn solve_problem(text: &str, config: SearchConfig) -> Result<Outcome, SolveError> {
    let problem = parse_problem(text)?;
    BoundedSearch::new(config).solve_problem(&problem)
}

#[cfg(test)]
mod tests;
