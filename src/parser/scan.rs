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

//! Parser trivia and depth-aware slice scans.
//!
//! Every scan is a pure function over one slice; nesting depth is local to
//! the call.

use crate::ast::{SourceSpan, Span};
use crate::diagnostics::Failure;
use nom::Slice;
use nom::character::complete::multispace0;

use super::MAX_NESTING;

/// Skips zero-or-more whitespace/line breaks.
pub(super) fn ws0(input: Span<'_>) -> Span<'_> {
    match multispace0::<_, nom::error::Error<Span<'_>>>(input) {
        Ok((rest, _)) => rest,
        Err(_) => input,
    }
}

/// Returns whether the slice holds nothing but whitespace.
pub(super) fn is_blank(input: Span<'_>) -> bool {
    input.fragment().trim().is_empty()
}

/// Returns the next character without consuming it.
pub(super) fn peek(input: Span<'_>) -> Option<char> {
    input.fragment().chars().next()
}

/// Returns the slice between `start` (inclusive) and `end` (exclusive).
pub(super) fn between<'a>(start: Span<'a>, end: Span<'a>) -> Span<'a> {
    start.slice(..end.location_offset() - start.location_offset())
}

/// Returns the slice with trailing whitespace removed.
pub(super) fn trim_end(input: Span<'_>) -> Span<'_> {
    input.slice(..input.fragment().trim_end().len())
}

/// Finds the `)` matching the `(` that starts `input`.
///
/// Returns the byte index of the closing parenthesis within `input`. Groups
/// nested deeper than [`MAX_NESTING`] are rejected before any recursion
/// into them.
pub(super) fn matching_paren(input: Span<'_>) -> Result<usize, Failure> {
    let mut depth = 0usize;
    for (idx, c) in input.fragment().char_indices() {
        match c {
            '(' => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Err(Failure::structural(
                        format!("nesting too deep (more than {MAX_NESTING} levels)"),
                        SourceSpan::point(input.slice(idx..)),
                    ));
                }
            }
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Ok(idx);
                }
            }
            _ => {}
        }
    }
    Err(Failure::structural(
        "unclosed '('",
        SourceSpan::point(input),
    ))
}

/// Finds the first `needle` outside any parentheses.
///
/// A `)` without a matching `(` is reported as a structural failure.
pub(super) fn find_top_level(input: Span<'_>, needle: char) -> Result<Option<usize>, Failure> {
    let mut depth = 0usize;
    for (idx, c) in input.fragment().char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => {
                return Err(Failure::structural(
                    "unmatched ')'",
                    SourceSpan::point(input.slice(idx..)),
                ));
            }
            ')' => depth -= 1,
            _ if depth == 0 && c == needle => return Ok(Some(idx)),
            _ => {}
        }
    }
    Ok(None)
}

/// Returns whether the slice contains a `<` or `>` at any depth.
pub(super) fn contains_comparator(input: Span<'_>) -> bool {
    input.fragment().contains(['<', '>'])
}
