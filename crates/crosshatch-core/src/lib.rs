//! Core data structures for the crosshatch Sudoku solver.
//!
//! This crate provides the board-model layer shared by the solver and the
//! command-line front end: digits, candidate sets, cell positions, the
//! unit/peer topology of the grid, and the board itself.
//!
//! # Overview
//!
//! - [`digit`]: type-safe representation of Sudoku digits 1-9
//! - [`digit_set`]: candidate digits for a single cell, as a 9-bit set
//! - [`cell`]: cell positions (`A1`-`I9`) and 81-bit sets of them
//! - [`topology`]: units (rows, columns, boxes, optional diagonals) and the
//!   peer relation they induce
//! - [`board`]: per-cell candidate state with parsing and rendering of the
//!   81-character puzzle encoding
//!
//! # Examples
//!
//! ```
//! use crosshatch_core::{Board, Cell, Digit, Topology, Variant};
//!
//! let board: Board = "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3"
//!     .parse()
//!     .unwrap();
//! assert_eq!(board.solved_digit(Cell::new(0, 0)), Some(Digit::new(2)));
//!
//! // The topology answers structural questions the board itself cannot.
//! let topology = Topology::new(Variant::Diagonal);
//! assert!(topology.peers(Cell::new(0, 0)).contains(Cell::new(4, 4)));
//! ```

pub mod board;
pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod topology;

// Re-export commonly used types
pub use self::{
    board::{Board, ParseError},
    cell::{Cell, CellSet},
    digit::Digit,
    digit_set::DigitSet,
    topology::{Topology, Unit, UnitKind, Variant},
};
