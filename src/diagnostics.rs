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

//! Parse diagnostics with source snippets and caret pointers.

use crate::ast::SourceSpan;
use std::fmt;
use thiserror::Error;

/// Classification of parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FailureKind {
    /// A rule could not match at the current position.
    #[error("syntax error")]
    Syntax,
    /// Unbalanced parentheses, or a clause missing its `=`, `<` or `>`.
    #[error("structural error")]
    Structural,
}

/// Located failure raised inside the parsing stages.
///
/// It carries no source text; [`ParseError`] attaches the snippet at the
/// public boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Failure {
    pub(crate) kind: FailureKind,
    pub(crate) message: String,
    pub(crate) span: SourceSpan,
}

impl Failure {
    pub(crate) fn syntax(message: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            kind: FailureKind::Syntax,
            message: message.into(),
            span,
        }
    }

    pub(crate) fn structural(message: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            kind: FailureKind::Structural,
            message: message.into(),
            span,
        }
    }
}

/// Parse error returned by every public parsing entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Failure classification.
    pub kind: FailureKind,
    /// Human-readable error message.
    pub message: String,
    /// Source file/path label (`""` when unavailable).
    pub file: String,
    /// Byte offset of the offending position.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
    /// Source line snippet where the error occurred.
    pub snippet: String,
    /// Caret pointer aligned to `snippet`.
    pub pointer: String,
}

impl ParseError {
    /// Creates a source-mapped diagnostic from a [`SourceSpan`] and source label.
    pub fn from_span_in_source(
        kind: FailureKind,
        message: impl Into<String>,
        file: impl Into<String>,
        source: &str,
        span: &SourceSpan,
    ) -> Self {
        let snippet = source
            .lines()
            .nth(span.line.saturating_sub(1))
            .unwrap_or("")
            .to_string();
        // Clamp the caret to the snippet; end-of-input spans point one past the last char.
        let line_len = snippet.chars().count();
        let pointer_column = span.column.saturating_sub(1).min(line_len);
        let requested_len = span.len().max(1);
        let max_len = line_len.saturating_sub(pointer_column).max(1);
        let pointer_len = requested_len.min(max_len);
        let pointer = format!("{}{}", " ".repeat(pointer_column), "^".repeat(pointer_len));

        Self {
            kind,
            message: message.into(),
            file: file.into(),
            offset: span.start,
            line: span.line,
            column: span.column,
            snippet,
            pointer,
        }
    }

    pub(crate) fn from_failure(failure: Failure, file: &str, source: &str) -> Self {
        Self::from_span_in_source(failure.kind, failure.message, file, source, &failure.span)
    }

    /// Returns whether the failure is structural (unbalanced or missing operator).
    pub fn is_structural(&self) -> bool {
        self.kind == FailureKind::Structural
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = if self.file.is_empty() {
            format!("line {}, column {}", self.line, self.column)
        } else {
            format!("{}:{}:{}", self.file, self.line, self.column)
        };

        write!(
            f,
            "{}: {}\n --> {}\n  |\n{:>3} | {}\n  | {}",
            self.kind, self.message, location, self.line, self.snippet, self.pointer
        )
    }
}

impl std::error::Error for ParseError {}
