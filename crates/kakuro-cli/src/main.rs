//! Command-line host for the Kakuro engine.
//!
//! Feeds a JSON clue grid through the pre-solve gates, runs the solve on
//! a worker session while the foreground polls for completion, and prints
//! every solution (or the reasons there cannot be any).

mod format;

use clap::Parser;
use format::PuzzleFile;
use kakuro_core::{
    compile, Cell, ClueGrid, Solution, Solver, SolverConfig, SolverSession, SolverStatus,
};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

/// Solve a Kakuro clue grid and enumerate every solution.
#[derive(Parser)]
#[command(name = "kakuro", version, about)]
struct Args {
    /// Puzzle description file (JSON)
    puzzle: PathBuf,

    /// Stop after this many solutions
    #[arg(long)]
    limit: Option<usize>,

    /// Emit the solve report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Suppress the clue-grid echo
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, Box<dyn Error>> {
    let text = fs::read_to_string(&args.puzzle)?;
    let file: PuzzleFile = serde_json::from_str(&text)?;
    let grid = file.into_grid()?;

    if !args.quiet {
        println!("{}", grid);
    }

    // Pre-solve gates: some clues, balanced totals, feasible clue list.
    if let Err(err) = grid.check_structure() {
        eprintln!("{}", err);
        return Ok(ExitCode::FAILURE);
    }
    let puzzle = compile(&grid);
    if !puzzle.is_feasible() {
        for contradiction in &puzzle.contradictions {
            eprintln!("{}", contradiction);
        }
        return Ok(ExitCode::FAILURE);
    }

    let solver = Solver::with_config(SolverConfig {
        solution_limit: args.limit,
    });
    let started = Instant::now();
    let mut session = SolverSession::spawn(solver, puzzle);
    let report = loop {
        if let Some(report) = session.try_report() {
            break report.clone();
        }
        std::thread::sleep(Duration::from_millis(100));
    };
    let elapsed = started.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    match report.status {
        SolverStatus::Cancelled => {
            println!("solve cancelled");
            return Ok(ExitCode::FAILURE);
        }
        SolverStatus::Done => {}
    }

    match report.solutions.len() {
        0 => println!("no solution exists ({:.2?})", elapsed),
        1 => {
            println!("unique solution ({:.2?}):", elapsed);
            println!("{}", render_solution(&grid, &report.solutions[0]));
        }
        n => {
            println!("{} solutions ({:.2?}):", n, elapsed);
            for (index, solution) in report.solutions.iter().enumerate() {
                println!("solution #{}:", index + 1);
                println!("{}", render_solution(&grid, solution));
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Digits laid out on the grid, black squares shown as `#`.
fn render_solution(grid: &ClueGrid, solution: &Solution) -> String {
    let mut out = String::new();
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            let cell = Cell::new(r, c);
            match solution.digit(cell) {
                Some(digit) => out.push_str(&format!(" {}", digit)),
                None => out.push_str(" #"),
            }
        }
        out.push('\n');
    }
    out
}
