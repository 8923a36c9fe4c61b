//! Solving engine for crosshatch.
//!
//! This crate layers two mechanisms on top of the board model from
//! [`crosshatch_core`]:
//!
//! 1. **Propagation** - the [`rule`] module provides candidate-narrowing
//!    rules ([`Eliminate`](rule::Eliminate), [`OnlyChoice`](rule::OnlyChoice),
//!    [`NakedTwins`](rule::NakedTwins)), and [`Propagator`] applies them to
//!    a fixed point.
//! 2. **Search** - [`Solver`] falls back to depth-first backtracking when
//!    propagation stalls, branching on the cell with the fewest candidates.
//!
//! Both are deterministic: the same board and topology always produce the
//! same solution and the same [`SolveStats`].
//!
//! # Examples
//!
//! ```
//! use crosshatch_core::{Topology, Variant};
//! use crosshatch_solver::Solver;
//!
//! let solver = Solver::with_default_rules();
//! let topology = Topology::new(Variant::Diagonal);
//! let board = "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3"
//!     .parse()?;
//!
//! match solver.solve(&board, &topology) {
//!     Some(solution) => println!("{}", solution.to_line()),
//!     None => println!("unsatisfiable"),
//! }
//! # Ok::<(), crosshatch_core::ParseError>(())
//! ```

pub mod propagate;
pub mod rule;
pub mod search;
pub mod testing;

pub use self::{
    propagate::{Propagation, Propagator},
    rule::{BoxedRule, Rule},
    search::{SolveStats, Solver},
};
