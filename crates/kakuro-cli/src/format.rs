//! JSON puzzle description consumed by the CLI.
//!
//! `rows`/`cols` give the playable interior size; the engine's grid adds
//! the always-black row 0 and column 0 on top, so black squares are
//! addressed with absolute 0-based coordinates (clue-bearing cells on the
//! boundary included). Example:
//!
//! ```json
//! {
//!   "rows": 2,
//!   "cols": 2,
//!   "blacks": [
//!     { "row": 1, "col": 0, "across": 4 },
//!     { "row": 2, "col": 0, "across": 3 },
//!     { "row": 0, "col": 1, "down": 3 },
//!     { "row": 0, "col": 2, "down": 4 }
//!   ]
//! }
//! ```

use kakuro_core::{Cell, ClueGrid, ClueValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One black square and its clues (0 = no clue on that side).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlackSquare {
    pub row: usize,
    pub col: usize,
    #[serde(default)]
    pub across: ClueValue,
    #[serde(default)]
    pub down: ClueValue,
}

/// On-disk puzzle description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleFile {
    /// Interior height, excluding the boundary row.
    pub rows: usize,
    /// Interior width, excluding the boundary column.
    pub cols: usize,
    #[serde(default)]
    pub blacks: Vec<BlackSquare>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    ZeroDimension,
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::ZeroDimension => write!(f, "rows and cols must be at least 1"),
            FormatError::OutOfBounds { row, col } => {
                write!(f, "black square at row {} col {} is outside the grid", row, col)
            }
        }
    }
}

impl std::error::Error for FormatError {}

impl PuzzleFile {
    /// Build the engine's clue grid, boundary and sentinels included.
    pub fn into_grid(self) -> Result<ClueGrid, FormatError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(FormatError::ZeroDimension);
        }
        let rows = self.rows + 1;
        let cols = self.cols + 1;
        let mut grid = ClueGrid::new(rows, cols);
        for black in self.blacks {
            if black.row >= rows || black.col >= cols {
                return Err(FormatError::OutOfBounds {
                    row: black.row,
                    col: black.col,
                });
            }
            grid.set_black(Cell::new(black.row, black.col), black.across, black.down);
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_build_grid() {
        let text = r#"{
            "rows": 2,
            "cols": 2,
            "blacks": [
                { "row": 1, "col": 0, "across": 4 },
                { "row": 2, "col": 0, "across": 3 },
                { "row": 0, "col": 1, "down": 3 },
                { "row": 0, "col": 2, "down": 4 }
            ]
        }"#;
        let file: PuzzleFile = serde_json::from_str(text).unwrap();
        let grid = file.into_grid().unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.across().get(&Cell::new(1, 0)), Some(&4));
        assert_eq!(grid.down().get(&Cell::new(0, 2)), Some(&4));
        assert!(grid.check_structure().is_ok());
    }

    #[test]
    fn test_missing_clue_fields_default_to_zero() {
        let text = r#"{ "rows": 1, "cols": 1, "blacks": [ { "row": 1, "col": 1 } ] }"#;
        let file: PuzzleFile = serde_json::from_str(text).unwrap();
        let grid = file.into_grid().unwrap();
        assert!(grid.is_black(Cell::new(1, 1)));
    }

    #[test]
    fn test_out_of_bounds_black_square() {
        let file = PuzzleFile {
            rows: 2,
            cols: 2,
            blacks: vec![BlackSquare {
                row: 5,
                col: 1,
                across: 0,
                down: 0,
            }],
        };
        assert_eq!(
            file.into_grid().unwrap_err(),
            FormatError::OutOfBounds { row: 5, col: 1 }
        );
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let file = PuzzleFile {
            rows: 0,
            cols: 3,
            blacks: Vec::new(),
        };
        assert_eq!(file.into_grid().unwrap_err(), FormatError::ZeroDimension);
    }
}
