//! Solver-facing data types.

use crate::{Cell, Digit};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Terminal state of a search.
///
/// A solver is idle until invoked and running while the tree is walked;
/// the report carries one of these once the search has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverStatus {
    /// The search tree was exhausted; the solution list is final.
    Done,
    /// The caller cancelled the search; partial results were discarded.
    Cancelled,
}

/// One complete assignment of digits to white cells, stored in canonical
/// (row-major) variable order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Solution {
    entries: Vec<(Cell, Digit)>,
}

impl Solution {
    pub(crate) fn new(entries: Vec<(Cell, Digit)>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
        Self { entries }
    }

    /// The digit assigned to `cell`, if it is a variable of this puzzle.
    pub fn digit(&self, cell: Cell) -> Option<Digit> {
        self.entries
            .binary_search_by_key(&cell, |&(c, _)| c)
            .ok()
            .map(|i| self.entries[i].1)
    }

    /// Assignments in canonical variable order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Digit)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of one solve: how it ended, the canonical variable list, and
/// every solution found, in deterministic enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub status: SolverStatus,
    pub variables: Vec<Cell>,
    pub solutions: Vec<Solution>,
}

/// Search knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverConfig {
    /// Stop after this many solutions; `None` enumerates every one.
    pub solution_limit: Option<usize>,
}

/// Shared cancellation flag, checked between search steps.
///
/// Clone freely; all clones observe the same flag. Cancellation is
/// cooperative and one-way.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
