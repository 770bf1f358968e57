//! Basic example of using the Kakuro engine

use kakuro_core::{compile, Cell, ClueGrid, Solver, SolverSession};

fn main() {
    // A 2-by-2 playable grid: across clues 4 and 3, down clues 3 and 4
    let mut grid = ClueGrid::new(3, 3);
    grid.set_black(Cell::new(1, 0), 4, 0);
    grid.set_black(Cell::new(2, 0), 3, 0);
    grid.set_black(Cell::new(0, 1), 0, 3);
    grid.set_black(Cell::new(0, 2), 0, 4);

    println!("Clue grid:");
    println!("{}", grid);

    // Gate checks, then compile to equations
    if let Err(err) = grid.check_structure() {
        println!("Rejected: {}", err);
        return;
    }
    let puzzle = compile(&grid);
    for contradiction in &puzzle.contradictions {
        println!("Bad clue: {}", contradiction);
    }
    if !puzzle.is_feasible() {
        return;
    }
    println!("{} equations over {} variables", puzzle.equations.len(), puzzle.variables.len());

    // Solve on a worker thread and wait for the report
    let session = SolverSession::spawn(Solver::new(), puzzle);
    let report = session.wait();

    println!("Found {} solution(s)", report.solutions.len());
    for (index, solution) in report.solutions.iter().enumerate() {
        println!("Solution #{}:", index + 1);
        for (cell, digit) in solution.iter() {
            println!("  {} = {}", cell, digit);
        }
    }
}
