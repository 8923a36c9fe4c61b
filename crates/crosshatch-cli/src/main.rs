//! Command-line front end for the crosshatch solver.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release -p crosshatch-cli -- \
//!     '2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3'
//! ```
//!
//! Solve under plain Sudoku rules instead of the diagonal variant:
//!
//! ```sh
//! cargo run -p crosshatch-cli -- --variant standard '..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..'
//! ```
//!
//! Print per-rule statistics after solving:
//!
//! ```sh
//! cargo run -p crosshatch-cli -- --stats '2.....................................................................3..........'
//! ```

use std::process;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use crosshatch_core::{Board, Topology, Variant};
use crosshatch_solver::{SolveStats, Solver};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    Standard,
    Diagonal,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Standard => Self::Standard,
            VariantArg::Diagonal => Self::Diagonal,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// 81-character puzzle, row-major; digits are clues, `.` or `0` blanks.
    #[arg(value_name = "PUZZLE")]
    puzzle: String,

    /// Rule variant to solve under.
    #[arg(long, value_name = "VARIANT", default_value = "diagonal")]
    variant: VariantArg,

    /// Print per-rule statistics after solving.
    #[arg(long)]
    stats: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let board = match args.puzzle.parse::<Board>() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Invalid puzzle: {err}");
            process::exit(2);
        }
    };

    let variant = Variant::from(args.variant);
    let topology = Topology::new(variant);
    let solver = Solver::with_default_rules();
    let mut stats = solver.new_stats();

    log::info!("solving {variant} puzzle with {} clues", board.solved_count());

    let start = Instant::now();
    let solution = solver.solve_with_stats(&board, &topology, &mut stats);
    let elapsed = start.elapsed();

    let Some(solution) = solution else {
        eprintln!("Puzzle is unsatisfiable under {variant} rules.");
        process::exit(1);
    };

    println!("Puzzle:");
    println!("  {}", board.to_line());
    println!();
    println!("Solution ({variant}, {elapsed:.2?}):");
    println!("  {}", solution.to_line());
    println!();
    println!("{solution}");

    if args.stats {
        print_stats(&solver, &stats);
    }
}

fn print_stats(solver: &Solver, stats: &SolveStats) {
    println!("Stats:");
    for (i, count) in stats.applications().iter().enumerate() {
        let name = solver.propagator().rules()[i].name();
        println!("  {name}: {count}");
    }
    println!("  passes: {}", stats.passes());
    println!("  guesses: {}", stats.guesses());
    println!("  backtracks: {}", stats.backtracks());
}
