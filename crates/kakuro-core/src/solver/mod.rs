//! Enumerating constraint solver.
//!
//! Consumes a [`CompiledPuzzle`], narrows each variable's domain with the
//! sum-domain table, and backtracks over the variables in canonical
//! row-major order, digits ascending — so the solution list comes out in
//! deterministic lexicographic order, identical on every run. All
//! solutions are enumerated, not just the first.

mod backtrack;
mod types;

pub use types::{CancelToken, Solution, SolveReport, SolverConfig, SolverStatus};

use crate::{Cell, CompiledPuzzle, DigitSet, SumTable};
use backtrack::{Interrupt, Search};
use std::collections::HashMap;

/// Backtracking solver over compiled equations.
///
/// Holds only the read-only sum-domain table and configuration, so one
/// solver can serve any number of sequential or concurrent solves.
pub struct Solver {
    table: SumTable,
    config: SolverConfig,
}

impl Solver {
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            table: SumTable::new(),
            config,
        }
    }

    /// Enumerate every solution of `puzzle`.
    pub fn solve(&self, puzzle: &CompiledPuzzle) -> SolveReport {
        self.solve_with(puzzle, &CancelToken::new())
    }

    /// Enumerate every solution, checking `cancel` between search steps.
    /// On cancellation the report is `Cancelled` and carries no solutions.
    pub fn solve_with(&self, puzzle: &CompiledPuzzle, cancel: &CancelToken) -> SolveReport {
        let variables = puzzle.variables.clone();
        if variables.is_empty() {
            return SolveReport {
                status: SolverStatus::Done,
                variables,
                solutions: Vec::new(),
            };
        }

        let (domains, memberships) = self.prune(puzzle);
        let specs: Vec<(u32, usize)> = puzzle
            .equations
            .iter()
            .map(|eq| (eq.target, eq.len()))
            .collect();

        let mut search = Search::new(
            &variables,
            &domains,
            &memberships,
            &specs,
            cancel,
            self.config.solution_limit,
        );
        let status = match search.run() {
            Ok(()) | Err(Interrupt::LimitReached) => SolverStatus::Done,
            Err(Interrupt::Cancelled) => SolverStatus::Cancelled,
        };
        let solutions = match status {
            SolverStatus::Done => search.into_solutions(),
            SolverStatus::Cancelled => Vec::new(),
        };
        SolveReport {
            status,
            variables,
            solutions,
        }
    }

    /// Per-variable candidate domains: the intersection of
    /// `allowed_digits(target, len)` over every equation containing the
    /// variable. Also returns each variable's equation memberships.
    fn prune(&self, puzzle: &CompiledPuzzle) -> (Vec<DigitSet>, Vec<Vec<usize>>) {
        let index: HashMap<Cell, usize> = puzzle
            .variables
            .iter()
            .enumerate()
            .map(|(i, &cell)| (cell, i))
            .collect();
        let mut domains = vec![DigitSet::all(); puzzle.variables.len()];
        let mut memberships = vec![Vec::new(); puzzle.variables.len()];
        for (ei, eq) in puzzle.equations.iter().enumerate() {
            let allowed = self.table.allowed_digits(eq.target, eq.len());
            for cell in &eq.cells {
                if let Some(&vi) = index.get(cell) {
                    domains[vi] = domains[vi].intersection(allowed);
                    memberships[vi].push(ei);
                }
            }
        }
        (domains, memberships)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
