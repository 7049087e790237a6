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

//! Solver-adapter boundary.
//!
//! Parsing stops at [`Problem`]. An adapter lowers each tree into its own
//! term representation and reports either a satisfying assignment or
//! unsatisfiability. [`BoundedSearch`] is the bundled adapter.

mod config;
mod errors;
mod result;
mod search;

use crate::ast::{Constraint, Equation, Expression, Problem};

pub use config::SearchConfig;
pub use errors::SolveError;
pub use result::Outcome;
pub use search::{BoundedSearch, Goal, Term};

/// Lowers problem trees into solver terms and solves them.
pub trait SolverAdapter {
    /// Solver-native arithmetic term.
    type Term;
    /// Solver-native boolean assertion.
    type Goal;

    /// Lowers an arithmetic expression.
    fn lower_expression(&mut self, expression: &Expression) -> Self::Term;

    /// Lowers `left = right` into an assertion.
    fn lower_equation(&mut self, equation: &Equation) -> Self::Goal;

    /// Lowers a constraint into an assertion.
    fn lower_constraint(&mut self, constraint: &Constraint) -> Self::Goal;

    /// Searches for an assignment satisfying every goal.
    fn solve(&mut self, goals: &[Self::Goal]) -> Result<Outcome, SolveError>;

    /// Lowers every equation and constraint, in order, and solves them together.
    fn solve_problem(&mut self, problem: &Problem) -> Result<Outcome, SolveError> {
        let mut goals = Vec::with_capacity(problem.equations.len() + problem.constraints.len());
        for equation in &problem.equations {
            goals.push(self.lower_equation(equation));
        }
        for constraint in &problem.constraints {
            goals.push(self.lower_constraint(constraint));
        }
        self.solve(&goals)
    }
}
