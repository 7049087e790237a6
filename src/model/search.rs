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

//! Bounded integer search adapter.
//!
//! Lowering interns each variable into a slot index. Solving enumerates
//! assignments shell by shell: first every variable at 0, then every
//! assignment whose largest magnitude is 1, then 2, up to the configured
//! bound. A shell of radius `r` is walked directly: the first slot at
//! magnitude `r` is pinned to `r`, then `-r`, while earlier slots stay below
//! `r` and later slots range up to `r`, each walking `0, 1, -1, 2, -2, ...`.
//! Every visited assignment is counted against `max_candidates`, and the
//! first answer found has the smallest possible largest magnitude.
//!
//! `Unsatisfiable` from this adapter means "nothing inside the bound".

use crate::ast::{Assignment, Constraint, Equation, Expression};
use log::{debug, warn};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::{Outcome, SearchConfig, SolveError, SolverAdapter};

/// Arithmetic term over variable slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Constant(i64),
    Variable(usize),
    Add(Box<Term>, Box<Term>),
    Mul(Box<Term>, Box<Term>),
}

impl Term {
    /// Evaluates with checked arithmetic; `None` on overflow.
    fn evaluate(&self, values: &[i64]) -> Option<i64> {
        match self {
            Term::Constant(value) => Some(*value),
            Term::Variable(slot) => values.get(*slot).copied(),
            Term::Add(left, right) => left.evaluate(values)?.checked_add(right.evaluate(values)?),
            Term::Mul(left, right) => left.evaluate(values)?.checked_mul(right.evaluate(values)?),
        }
    }
}

/// Boolean assertion over terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Goal {
    Equal(Term, Term),
    Less(Term, Term),
    Greater(Term, Term),
    All(Box<Goal>, Box<Goal>),
    Any(Box<Goal>, Box<Goal>),
}

impl Goal {
    /// Returns whether the goal holds; an overflowing comparison does not.
    fn holds(&self, values: &[i64]) -> bool {
        let compare = |left: &Term, right: &Term, test: fn(i64, i64) -> bool| {
            match (left.evaluate(values), right.evaluate(values)) {
                (Some(l), Some(r)) => test(l, r),
                _ => false,
            }
        };
        match self {
            Goal::Equal(left, right) => compare(left, right, |l, r| l == r),
            Goal::Less(left, right) => compare(left, right, |l, r| l < r),
            Goal::Greater(left, right) => compare(left, right, |l, r| l > r),
            Goal::All(left, right) => left.holds(values) && right.holds(values),
            Goal::Any(left, right) => left.holds(values) || right.holds(values),
        }
    }
}

/// Exhaustive search over `-bound..=bound` for every variable.
#[derive(Debug, Clone, Default)]
pub struct BoundedSearch {
    config: SearchConfig,
    // Variable names by slot, in order of first lowering.
    variables: Vec<char>,
    slots: BTreeMap<char, usize>,
}

impl BoundedSearch {
    /// Creates an adapter with no interned variables.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            variables: Vec::new(),
            slots: BTreeMap::new(),
        }
    }

    /// Returns interned variable names by slot.
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    fn slot(&mut self, name: char) -> usize {
        if let Some(slot) = self.slots.get(&name) {
            return *slot;
        }
        let slot = self.variables.len();
        self.variables.push(name);
        self.slots.insert(name, slot);
        slot
    }

    /// Counts one assignment against the budget and tests every goal on it.
    fn visit(
        &self,
        goals: &[Goal],
        values: &[i64],
        examined: &mut u64,
        radius: usize,
    ) -> Result<bool, SolveError> {
        if *examined >= self.config.max_candidates {
            warn!(
                "search limit of {} assignments reached at radius {radius}",
                self.config.max_candidates
            );
            return Err(SolveError::SearchLimit {
                examined: *examined,
                bound: self.config.bound,
            });
        }
        *examined += 1;
        Ok(goals.iter().all(|goal| goal.holds(values)))
    }

    fn assignment(&self, values: &[i64]) -> Assignment {
        self.variables
            .iter()
            .copied()
            .zip(values.iter().copied())
            .collect()
    }
}

impl SolverAdapter for BoundedSearch {
    type Term = Term;
    type Goal = Goal;

    fn lower_expression(&mut self, expression: &Expression) -> Term {
        match expression {
            Expression::Constant(value) => Term::Constant(*value),
            Expression::Variable(name) => Term::Variable(self.slot(*name)),
            Expression::Addition(left, right) => Term::Add(
                Box::new(self.lower_expression(left)),
                Box::new(self.lower_expression(right)),
            ),
            Expression::Multiplication(left, right) => Term::Mul(
                Box::new(self.lower_expression(left)),
                Box::new(self.lower_expression(right)),
            ),
        }
    }

    fn lower_equation(&mut self, equation: &Equation) -> Goal {
        Goal::Equal(
            self.lower_expression(&equation.left),
            self.lower_expression(&equation.right),
        )
    }

    fn lower_constraint(&mut self, constraint: &Constraint) -> Goal {
        match constraint {
            Constraint::LessThan(left, right) => {
                Goal::Less(self.lower_expression(left), self.lower_expression(right))
            }
            Constraint::GreaterThan(left, right) => {
                Goal::Greater(self.lower_expression(left), self.lower_expression(right))
            }
            Constraint::Conjunction(left, right) => Goal::All(
                Box::new(self.lower_constraint(left)),
                Box::new(self.lower_constraint(right)),
            ),
            Constraint::Disjunction(left, right) => Goal::Any(
                Box::new(self.lower_constraint(left)),
                Box::new(self.lower_constraint(right)),
            ),
        }
    }

    fn solve(&mut self, goals: &[Goal]) -> Result<Outcome, SolveError> {
        let count = self.variables.len();
        let mut values = vec![0i64; count];
        let mut digits = vec![0usize; count];
        let mut examined = 0u64;

        if self.visit(goals, &values, &mut examined, 0)? {
            return Ok(Outcome::Satisfiable(self.assignment(&values)));
        }
        if count == 0 {
            return Ok(Outcome::Unsatisfiable);
        }

        for radius in 1..=self.config.bound as usize {
            let edge = radius as i64;
            // A shell point belongs to the first slot whose magnitude equals the radius.
            for pinned in 0..count {
                let widths: Vec<usize> = (0..count)
                    .map(|slot| match slot.cmp(&pinned) {
                        Ordering::Less => 2 * radius - 1,
                        Ordering::Equal => 1,
                        Ordering::Greater => 2 * radius + 1,
                    })
                    .collect();
                for pinned_value in [edge, -edge] {
                    digits.fill(0);
                    loop {
                        for (slot, value) in values.iter_mut().enumerate() {
                            *value = if slot == pinned {
                                pinned_value
                            } else {
                                candidate(digits[slot])
                            };
                        }
                        if self.visit(goals, &values, &mut examined, radius)? {
                            debug!("satisfied after {examined} assignment(s) at radius {radius}");
                            return Ok(Outcome::Satisfiable(self.assignment(&values)));
                        }
                        if !advance(&mut digits, &widths) {
                            break;
                        }
                    }
                }
            }
        }

        debug!(
            "no assignment within bound {} after {examined} assignment(s)",
            self.config.bound
        );
        Ok(Outcome::Unsatisfiable)
    }
}

/// Maps a digit to `0, 1, -1, 2, -2, ...`.
fn candidate(digit: usize) -> i64 {
    let magnitude = digit.div_ceil(2) as i64;
    if digit % 2 == 1 { magnitude } else { -magnitude }
}

/// Steps the odometer; returns `false` once every combination was visited.
fn advance(digits: &mut [usize], widths: &[usize]) -> bool {
    for (digit, &width) in digits.iter_mut().zip(widths) {
        *digit += 1;
        if *digit < width {
            return true;
        }
        *digit = 0;
    }
    false
}
