//! Puzzle-to-constraint compilation.
//!
//! Walks the clue maps, cuts each row and column into runs bounded by
//! black squares, and emits one sum equation per non-zero clue. Clues no
//! run can meet are collected as contradictions rather than aborting, so a
//! host can report every broken clue at once.

use crate::sums::feasible_range;
use crate::{Cell, ClueGrid, ClueValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One run's constraint: its white cells, in scan order, and the target
/// sum they must reach with pairwise-distinct digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    pub cells: Vec<Cell>,
    pub target: ClueValue,
}

impl Equation {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A clue whose run cannot reach it: the black square's coordinate, the
/// clue value, and the run length it would have to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contradiction {
    pub cell: Cell,
    pub clue: ClueValue,
    pub run_length: usize,
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} col {}: cannot make {} in {} cells",
            self.cell.row, self.cell.col, self.clue, self.run_length
        )
    }
}

/// Everything derived from one clue grid: the equations, the white-cell
/// variables in canonical row-major order, and every infeasible clue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompiledPuzzle {
    pub equations: Vec<Equation>,
    pub variables: Vec<Cell>,
    pub contradictions: Vec<Contradiction>,
}

impl CompiledPuzzle {
    /// Whether search is worth attempting at all.
    pub fn is_feasible(&self) -> bool {
        self.contradictions.is_empty()
    }
}

/// Compile a clue grid into equations over white-cell variables.
///
/// Across runs are emitted first, then down runs, each in ascending
/// black-square order; together with the row-major variable list this
/// makes the compiler's output deterministic for identical input.
pub fn compile(grid: &ClueGrid) -> CompiledPuzzle {
    let mut variables = Vec::new();
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            let cell = Cell::new(r, c);
            if !grid.across().contains_key(&cell) {
                variables.push(cell);
            }
        }
    }

    let mut equations = Vec::new();
    let mut contradictions = Vec::new();

    for (&cell, &clue) in grid.across() {
        if clue == 0 {
            continue;
        }
        // run spans the white cells up to the next black square in the row;
        // the sentinel column guarantees termination
        let mut end = cell.col + 1;
        while end <= grid.cols() && !grid.across().contains_key(&Cell::new(cell.row, end)) {
            end += 1;
        }
        let cells: Vec<Cell> = (cell.col + 1..end)
            .map(|c| Cell::new(cell.row, c))
            .collect();
        push_run(cell, clue, cells, &mut equations, &mut contradictions);
    }

    for (&cell, &clue) in grid.down() {
        if clue == 0 {
            continue;
        }
        let mut end = cell.row + 1;
        while end <= grid.rows() && !grid.down().contains_key(&Cell::new(end, cell.col)) {
            end += 1;
        }
        let cells: Vec<Cell> = (cell.row + 1..end)
            .map(|r| Cell::new(r, cell.col))
            .collect();
        push_run(cell, clue, cells, &mut equations, &mut contradictions);
    }

    CompiledPuzzle {
        equations,
        variables,
        contradictions,
    }
}

fn push_run(
    cell: Cell,
    clue: ClueValue,
    cells: Vec<Cell>,
    equations: &mut Vec<Equation>,
    contradictions: &mut Vec<Contradiction>,
) {
    let feasible = match feasible_range(cells.len()) {
        Some((lo, hi)) => (lo..=hi).contains(&clue),
        None => false,
    };
    if !feasible {
        contradictions.push(Contradiction {
            cell,
            clue,
            run_length: cells.len(),
        });
    }
    if !cells.is_empty() {
        equations.push(Equation {
            cells,
            target: clue,
        });
    }
}
