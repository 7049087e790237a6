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

//! Backtracking parser-combinator engine over located character spans.
//!
//! A [`Parser`] is a closed set of variants interpreted by [`Parser::parse`].
//! Failure is an ordinary `None` result, so callers probe freely: parse,
//! inspect, and discard. Nothing is memoized; backtracking re-parses.
//!
//! [`Parser::or`] is committed choice. The second branch runs against the
//! original input only when the first branch fails outright; a failure in a
//! later sequenced stage never revisits it.

use crate::ast::Span;
use nom::Slice;
use std::rc::Rc;

/// Parsed value and unconsumed remainder, or failure.
pub type ParseResult<'a, T> = Option<(T, Span<'a>)>;

type Step<'a, T> = Rc<dyn Fn(Span<'a>) -> ParseResult<'a, T> + 'a>;

/// Parser over a located text slice.
#[derive(Clone)]
pub enum Parser<'a, T> {
    /// Succeeds with the value, consuming nothing.
    Pure(T),
    /// Always fails.
    Never,
    /// Consumes any single character.
    Item(fn(char) -> T),
    /// Consumes one character accepted by the predicate.
    Predicate(fn(char) -> bool, fn(char) -> T),
    /// Consumes an exact, case-sensitive keyword.
    Literal(&'static str, fn(Span<'a>) -> T),
    /// Runs a parser, then the parser its value selects (bind).
    Sequence(Step<'a, T>),
    /// Ordered, committed choice.
    Alternative(Box<Parser<'a, T>>, Box<Parser<'a, T>>),
    /// Zero-or-more greedy repetition.
    Repeat(Step<'a, T>),
    /// Succeeds without consuming unless the next character is rejected.
    NotFollowedBy(fn(char) -> bool, T),
    /// Runs the inner parser and projects the slice it consumed.
    Recognize(Box<Parser<'a, ()>>, fn(Span<'a>) -> T),
}

impl<'a, T: Clone + 'a> Parser<'a, T> {
    /// Runs the parser against `input`.
    pub fn parse(&self, input: Span<'a>) -> ParseResult<'a, T> {
        match self {
            Parser::Pure(value) => Some((value.clone(), input)),
            Parser::Never => None,
            Parser::Item(project) => uncons(input).map(|(c, rest)| (project(c), rest)),
            Parser::Predicate(accept, project) => {
                let (c, rest) = uncons(input)?;
                accept(c).then(|| (project(c), rest))
            }
            Parser::Literal(keyword, project) => {
                let mut rest = input;
                for expected in keyword.chars() {
                    let (c, next) = uncons(rest)?;
                    if c != expected {
                        return None;
                    }
                    rest = next;
                }
                Some((project(input.slice(..keyword.len())), rest))
            }
            Parser::Sequence(step) | Parser::Repeat(step) => step(input),
            Parser::Alternative(first, second) => {
                first.parse(input).or_else(|| second.parse(input))
            }
            Parser::NotFollowedBy(reject, value) => match uncons(input) {
                Some((c, _)) if reject(c) => None,
                _ => Some((value.clone(), input)),
            },
            Parser::Recognize(inner, project) => {
                let (_, rest) = inner.parse(input)?;
                let used = rest.location_offset() - input.location_offset();
                Some((project(input.slice(..used)), rest))
            }
        }
    }

    /// Returns whether the parser succeeds at the start of `input`.
    pub fn matches(&self, input: Span<'a>) -> bool {
        self.parse(input).is_some()
    }

    /// Sequences `self` with a continuation chosen from its value.
    pub fn bind<U, F>(self, continuation: F) -> Parser<'a, U>
    where
        U: Clone + 'a,
        F: Fn(T) -> Parser<'a, U> + 'a,
    {
        Parser::Sequence(Rc::new(move |input: Span<'a>| {
            let (value, rest) = self.parse(input)?;
            continuation(value).parse(rest)
        }))
    }

    /// Transforms the parsed value.
    pub fn map<U, F>(self, f: F) -> Parser<'a, U>
    where
        U: Clone + 'a,
        F: Fn(T) -> U + 'a,
    {
        self.bind(move |value| Parser::Pure(f(value)))
    }

    /// Runs `self`, discards its value, then runs `next`.
    pub fn then<U: Clone + 'a>(self, next: Parser<'a, U>) -> Parser<'a, U> {
        self.bind(move |_| next.clone())
    }

    /// Tries `self`, falling back to `other` only if `self` fails outright.
    pub fn or(self, other: Parser<'a, T>) -> Parser<'a, T> {
        Parser::Alternative(Box::new(self), Box::new(other))
    }
}

/// Splits the first character off `input`.
pub(crate) fn uncons(input: Span<'_>) -> Option<(char, Span<'_>)> {
    let c = input.fragment().chars().next()?;
    Some((c, input.slice(c.len_utf8()..)))
}

/// Always succeeds with `value`.
pub fn pure<'a, T>(value: T) -> Parser<'a, T> {
    Parser::Pure(value)
}

/// Always fails.
pub fn never<'a, T>() -> Parser<'a, T> {
    Parser::Never
}

/// Consumes any one character.
pub fn item<'a>() -> Parser<'a, char> {
    Parser::Item(|c| c)
}

/// Consumes one character accepted by `accept`.
pub fn satisfy<'a>(accept: fn(char) -> bool) -> Parser<'a, char> {
    Parser::Predicate(accept, |c| c)
}

/// Matches `keyword` exactly and yields the matched slice.
pub fn literal<'a>(keyword: &'static str) -> Parser<'a, Span<'a>> {
    Parser::Literal(keyword, |matched| matched)
}

/// Matches `word` when it is not immediately followed by an alphanumeric character.
pub fn keyword<'a>(word: &'static str) -> Parser<'a, Span<'a>> {
    literal(word).bind(|matched| {
        not_followed_by(|c| c.is_ascii_alphanumeric()).map(move |_| matched)
    })
}

/// Succeeds without consuming when the next character is absent or rejected by `reject`.
pub fn not_followed_by<'a>(reject: fn(char) -> bool) -> Parser<'a, ()> {
    Parser::NotFollowedBy(reject, ())
}

/// Zero-or-more repetitions of `parser`, collected left to right.
///
/// Fails when `parser` succeeds without consuming input, since the
/// repetition could never terminate.
pub fn repeat<'a, T: Clone + 'a>(parser: Parser<'a, T>) -> Parser<'a, Vec<T>> {
    Parser::Repeat(Rc::new(move |input: Span<'a>| {
        let mut items = Vec::new();
        let mut rest = input;
        while let Some((item, next)) = parser.parse(rest) {
            if next.location_offset() == rest.location_offset() {
                return None;
            }
            items.push(item);
            rest = next;
        }
        Some((items, rest))
    }))
}

/// One-or-more repetitions of `parser`.
pub fn repeat1<'a, T: Clone + 'a>(parser: Parser<'a, T>) -> Parser<'a, Vec<T>> {
    let tail = repeat(parser.clone());
    parser.bind(move |head| {
        tail.clone().map(move |rest| {
            let mut items = Vec::with_capacity(rest.len() + 1);
            items.push(head.clone());
            items.extend(rest);
            items
        })
    })
}

/// Runs `parser` and yields the slice it consumed instead of its value.
pub fn recognize<'a, T: Clone + 'a>(parser: Parser<'a, T>) -> Parser<'a, Span<'a>> {
    Parser::Recognize(Box::new(parser.map(|_| ())), |consumed| consumed)
}
