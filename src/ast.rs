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

//! Problem AST with source span helpers.
//!
//! Parsing builds these trees bottom-up: every child is complete before its
//! parent is constructed, and nothing mutates a tree once it is returned.
//! The solver adapter in [`crate::model`] consumes them as-is.

use nom_locate::LocatedSpan;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Parser input span type carrying byte offsets and line/column info.
pub type Span<'a> = LocatedSpan<&'a str>;

/// Integer values bound to single-character variables.
pub type Assignment = BTreeMap<char, i64>;

/// Source range and anchor position for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpan {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based UTF-8 column.
    pub column: usize,
}

impl SourceSpan {
    /// Creates a span covering the whole fragment of `span`.
    pub fn covering(span: Span<'_>) -> Self {
        Self {
            start: span.location_offset(),
            end: span.location_offset() + span.fragment().len(),
            line: span.location_line() as usize,
            column: span.get_utf8_column(),
        }
    }

    /// Creates a one-character span anchored at the start of `span`.
    pub fn point(span: Span<'_>) -> Self {
        let width = span.fragment().chars().next().map_or(0, char::len_utf8);
        Self {
            start: span.location_offset(),
            end: span.location_offset() + width,
            line: span.location_line() as usize,
            column: span.get_utf8_column(),
        }
    }

    /// Returns span length in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns whether the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Arithmetic expression tree.
///
/// Subtraction and unary minus have no node of their own: `a - b` is
/// `a + (-b)` and `-x` is `-1 * x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Signed integer constant.
    Constant(i64),
    /// Single-character variable.
    Variable(char),
    /// `left + right`.
    Addition(Box<Expression>, Box<Expression>),
    /// `left * right`.
    Multiplication(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn constant(value: i64) -> Self {
        Expression::Constant(value)
    }

    pub fn variable(name: char) -> Self {
        Expression::Variable(name)
    }

    pub fn add(left: Expression, right: Expression) -> Self {
        Expression::Addition(Box::new(left), Box::new(right))
    }

    pub fn mul(left: Expression, right: Expression) -> Self {
        Expression::Multiplication(Box::new(left), Box::new(right))
    }

    /// Wraps `inner` as `-1 * inner`.
    pub fn negated(inner: Expression) -> Self {
        Expression::mul(Expression::Constant(-1), inner)
    }

    /// Evaluates the tree with checked integer arithmetic.
    ///
    /// Returns `None` when a variable is unbound or an operation overflows.
    pub fn evaluate(&self, assignment: &Assignment) -> Option<i64> {
        match self {
            Expression::Constant(value) => Some(*value),
            Expression::Variable(name) => assignment.get(name).copied(),
            Expression::Addition(left, right) => left
                .evaluate(assignment)?
                .checked_add(right.evaluate(assignment)?),
            Expression::Multiplication(left, right) => left
                .evaluate(assignment)?
                .checked_mul(right.evaluate(assignment)?),
        }
    }

    /// Collects every variable name referenced by the tree.
    pub fn collect_variables(&self, out: &mut BTreeSet<char>) {
        match self {
            Expression::Constant(_) => {}
            Expression::Variable(name) => {
                out.insert(*name);
            }
            Expression::Addition(left, right) | Expression::Multiplication(left, right) => {
                left.collect_variables(out);
                right.collect_variables(out);
            }
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Binary nodes are always parenthesized so the text re-parses to the same tree.
        match self {
            Expression::Constant(value) => write!(f, "{value}"),
            Expression::Variable(name) => write!(f, "{name}"),
            Expression::Addition(left, right) => write!(f, "({left} + {right})"),
            Expression::Multiplication(left, right) => write!(f, "({left} * {right})"),
        }
    }
}

/// Boolean constraint tree over comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// `left < right`.
    LessThan(Expression, Expression),
    /// `left > right`.
    GreaterThan(Expression, Expression),
    /// `left and right`.
    Conjunction(Box<Constraint>, Box<Constraint>),
    /// `left or right`.
    Disjunction(Box<Constraint>, Box<Constraint>),
}

impl Constraint {
    pub fn less_than(left: Expression, right: Expression) -> Self {
        Constraint::LessThan(left, right)
    }

    pub fn greater_than(left: Expression, right: Expression) -> Self {
        Constraint::GreaterThan(left, right)
    }

    pub fn and(left: Constraint, right: Constraint) -> Self {
        Constraint::Conjunction(Box::new(left), Box::new(right))
    }

    pub fn or(left: Constraint, right: Constraint) -> Self {
        Constraint::Disjunction(Box::new(left), Box::new(right))
    }

    /// Evaluates the constraint under `assignment`.
    ///
    /// Returns `None` when any operand cannot be evaluated.
    pub fn holds(&self, assignment: &Assignment) -> Option<bool> {
        match self {
            Constraint::LessThan(left, right) => {
                Some(left.evaluate(assignment)? < right.evaluate(assignment)?)
            }
            Constraint::GreaterThan(left, right) => {
                Some(left.evaluate(assignment)? > right.evaluate(assignment)?)
            }
            Constraint::Conjunction(left, right) => {
                Some(left.holds(assignment)? && right.holds(assignment)?)
            }
            Constraint::Disjunction(left, right) => {
                Some(left.holds(assignment)? || right.holds(assignment)?)
            }
        }
    }

    /// Collects every variable name referenced by the tree.
    pub fn collect_variables(&self, out: &mut BTreeSet<char>) {
        match self {
            Constraint::LessThan(left, right) | Constraint::GreaterThan(left, right) => {
                left.collect_variables(out);
                right.collect_variables(out);
            }
            Constraint::Conjunction(left, right) | Constraint::Disjunction(left, right) => {
                left.collect_variables(out);
                right.collect_variables(out);
            }
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::LessThan(left, right) => write!(f, "{left} < {right}"),
            Constraint::GreaterThan(left, right) => write!(f, "{left} > {right}"),
            Constraint::Conjunction(left, right) => write!(f, "({left} and {right})"),
            Constraint::Disjunction(left, right) => write!(f, "({left} or {right})"),
        }
    }
}

/// `left = right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    /// Left-hand side.
    pub left: Expression,
    /// Right-hand side.
    pub right: Expression,
}

impl Equation {
    pub fn new(left: Expression, right: Expression) -> Self {
        Self { left, right }
    }

    /// Returns whether both sides evaluate to the same value.
    pub fn holds(&self, assignment: &Assignment) -> Option<bool> {
        Some(self.left.evaluate(assignment)? == self.right.evaluate(assignment)?)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}

/// Full parsed problem, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Problem {
    /// Equations between `Solve` and `such that`.
    pub equations: Vec<Equation>,
    /// Constraints after `such that`.
    pub constraints: Vec<Constraint>,
}

impl Problem {
    /// Returns whether the problem has neither equations nor constraints.
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty() && self.constraints.is_empty()
    }

    /// Returns every variable name used by the problem in sorted order.
    pub fn variables(&self) -> BTreeSet<char> {
        let mut out = BTreeSet::new();
        for equation in &self.equations {
            equation.left.collect_variables(&mut out);
            equation.right.collect_variables(&mut out);
        }
        for constraint in &self.constraints {
            constraint.collect_variables(&mut out);
        }
        out
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "Solve")?;
        for (idx, equation) in self.equations.iter().enumerate() {
            let sep = if idx == 0 { " " } else { ", " };
            write!(f, "{sep}{equation}")?;
        }
        if !self.constraints.is_empty() {
            write!(f, " such that")?;
            for (idx, constraint) in self.constraints.iter().enumerate() {
                let sep = if idx == 0 { " " } else { ", " };
                write!(f, "{sep}{constraint}")?;
            }
        }
        write!(f, ".")
    }
}
