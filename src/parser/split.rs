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

//! Clause splitter.
//!
//! Walks a slice left to right, tracking parenthesis nesting, and cuts it
//! into clauses at top-level commas. A top-level `.` or `such that` ends the
//! scan and leaves the rest of the text as the remainder.

use crate::ast::{SourceSpan, Span};
use crate::diagnostics::Failure;
use log::trace;

use super::SUCH_THAT;
use super::combinator::{Parser, keyword, uncons};
use super::scan::{between, is_blank};

/// Clause boundaries recognized by [`split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// `,` separates clauses and scanning continues.
    Comma,
    /// `.` ends the sentence.
    Period,
    /// `such that` ends the equation list.
    SuchThat,
}

/// Result of one splitter run.
#[derive(Debug, Clone)]
pub(crate) struct Split<'a> {
    /// Raw clause slices in source order.
    pub(crate) clauses: Vec<Span<'a>>,
    /// Text after the terminator that stopped the scan.
    pub(crate) remainder: Span<'a>,
    /// Terminator that stopped the scan, `None` at end of input.
    pub(crate) stop: Option<Terminator>,
}

/// Splits `text` into top-level clauses.
///
/// Clauses are not trimmed. A clause that ends at a comma is always kept,
/// even when blank; a blank final clause (before `.`, `such that`, or end of
/// input) is dropped.
pub(crate) fn split<'a>(text: Span<'a>, terminators: &[Terminator]) -> Result<Split<'a>, Failure> {
    let stops_at = |t: Terminator| terminators.contains(&t);
    let such_that: Parser<'a, Span<'a>> = keyword(SUCH_THAT);

    let mut clauses = Vec::new();
    let mut opens: Vec<Span<'a>> = Vec::new();
    let mut clause_start = text;
    let mut cursor = text;
    let mut previous: Option<char> = None;

    while let Some((c, next)) = uncons(cursor) {
        match c {
            '(' => opens.push(cursor),
            ')' => {
                if opens.pop().is_none() {
                    return Err(Failure::structural("unmatched ')'", SourceSpan::point(cursor)));
                }
            }
            _ if !opens.is_empty() => {}
            ',' if stops_at(Terminator::Comma) => {
                clauses.push(between(clause_start, cursor));
                clause_start = next;
            }
            '.' if stops_at(Terminator::Period) => {
                push_final(&mut clauses, between(clause_start, cursor));
                trace!("split {} clause(s), stopped at '.'", clauses.len());
                return Ok(Split {
                    clauses,
                    remainder: next,
                    stop: Some(Terminator::Period),
                });
            }
            's' if stops_at(Terminator::SuchThat)
                && !previous.is_some_and(|p| p.is_ascii_alphanumeric()) =>
            {
                if let Some((_, after)) = such_that.parse(cursor) {
                    push_final(&mut clauses, between(clause_start, cursor));
                    trace!("split {} clause(s), stopped at 'such that'", clauses.len());
                    return Ok(Split {
                        clauses,
                        remainder: skip_separator(after),
                        stop: Some(Terminator::SuchThat),
                    });
                }
            }
            _ => {}
        }
        previous = Some(c);
        cursor = next;
    }

    if let Some(open) = opens.last() {
        return Err(Failure::structural("unclosed '('", SourceSpan::point(*open)));
    }
    push_final(&mut clauses, clause_start);
    trace!("split {} clause(s), reached end of input", clauses.len());
    Ok(Split {
        clauses,
        remainder: cursor,
        stop: None,
    })
}

fn push_final<'a>(clauses: &mut Vec<Span<'a>>, clause: Span<'a>) {
    if !is_blank(clause) {
        clauses.push(clause);
    }
}

/// Consumes one whitespace separator after a keyword terminator.
fn skip_separator(input: Span<'_>) -> Span<'_> {
    match uncons(input) {
        Some((c, rest)) if c.is_whitespace() => rest,
        _ => input,
    }
}
