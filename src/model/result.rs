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

//! Solver outcome.

use crate::ast::Assignment;
use std::fmt;

/// Answer reported by a [`SolverAdapter`](super::SolverAdapter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every goal holds under the assignment.
    Satisfiable(Assignment),
    /// No assignment satisfies every goal.
    Unsatisfiable,
}

impl Outcome {
    /// Returns whether a satisfying assignment was found.
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Outcome::Satisfiable(_))
    }

    /// Returns the satisfying assignment, if any.
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Outcome::Satisfiable(assignment) => Some(assignment),
            Outcome::Unsatisfiable => None,
        }
    }

    /// Returns the value bound to `name`.
    pub fn value(&self, name: char) -> Option<i64> {
        self.assignment()?.get(&name).copied()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Satisfiable(assignment) => {
                write!(f, "[")?;
                for (idx, (name, value)) in assignment.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name} = {value}")?;
                }
                write!(f, "]")
            }
            Outcome::Unsatisfiable => write!(f, "No solution!"),
        }
    }
}
