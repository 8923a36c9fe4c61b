//! Test utilities for rule implementations.
//!
//! This module provides [`RuleTester`], a harness for verifying that
//! propagation rules produce the expected candidate changes.
//!
//! # Example
//!
//! ```
//! use crosshatch_core::{Board, Cell, Digit, Topology, Variant};
//! use crosshatch_solver::{rule::Eliminate, testing::RuleTester};
//!
//! let mut board = Board::new();
//! board.assign(Cell::new(0, 0), Digit::new(5));
//!
//! RuleTester::new(board, Topology::new(Variant::Standard))
//!     .apply_once(&Eliminate::new())
//!     .assert_removed_includes(Cell::new(0, 8), [Digit::new(5)]);
//! ```

use crosshatch_core::{Board, Cell, Digit, DigitSet, Topology};

use crate::Rule;

/// A test harness for verifying rule implementations.
///
/// `RuleTester` tracks the initial and current state of a board, allowing
/// you to apply rules and assert that they produce the expected changes.
/// All methods return `self` for fluent chaining, and all assertions use
/// `#[track_caller]` so failures point at the test line.
#[derive(Debug)]
pub struct RuleTester {
    initial: Board,
    current: Board,
    topology: Topology,
}

impl RuleTester {
    /// Creates a new tester from an initial board state.
    pub fn new(initial: Board, topology: Topology) -> Self {
        let current = initial.clone();
        Self {
            initial,
            current,
            topology,
        }
    }

    /// Creates a new tester from an 81-character puzzle encoding.
    ///
    /// # Panics
    ///
    /// Panics if the encoding cannot be parsed.
    #[track_caller]
    pub fn from_line(line: &str, topology: Topology) -> Self {
        let board = line.parse().unwrap();
        Self::new(board, topology)
    }

    /// Applies the rule once and returns self for chaining.
    pub fn apply_once<R>(mut self, rule: &R) -> Self
    where
        R: Rule,
    {
        rule.apply(&mut self.current, &self.topology);
        self
    }

    /// Applies the rule repeatedly until it makes no more progress.
    pub fn apply_until_stuck<R>(mut self, rule: &R) -> Self
    where
        R: Rule,
    {
        while rule.apply(&mut self.current, &self.topology) {}
        self
    }

    /// Asserts that a cell was solved with the given digit.
    ///
    /// This verifies that the cell initially had several candidates and
    /// now has exactly the expected one.
    ///
    /// # Panics
    ///
    /// Panics if the cell was not solved as expected.
    #[track_caller]
    pub fn assert_solved(self, cell: Cell, digit: Digit) -> Self {
        let initial = self.initial.candidates(cell);
        let current = self.current.candidates(cell);

        assert!(
            initial.len() > 1,
            "Expected initial cell {cell} to be unsolved (>1 candidates), but had {} candidates: {initial}",
            initial.len()
        );
        assert_eq!(
            current.as_single(),
            Some(digit),
            "Expected cell {cell} to be solved with {digit}, but candidates are: {current}"
        );

        self
    }

    /// Asserts that all specified candidates were removed from a cell.
    ///
    /// The digits must have been present initially and must all be gone
    /// now; other candidates may have been removed as well.
    ///
    /// # Panics
    ///
    /// Panics if any of the specified digits are still present.
    #[track_caller]
    pub fn assert_removed_includes<C>(self, cell: Cell, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates(cell);
        let current = self.current.candidates(cell);
        assert_eq!(
            initial & digits,
            digits,
            "Expected initial candidates at {cell} to include {digits}, but initial candidates are: {initial}"
        );
        assert!(
            (current & digits).is_empty(),
            "Expected all of {digits} to be removed from {cell}, but {current} still contains some: {}",
            current & digits
        );
        self
    }

    /// Asserts that a cell's candidates have not changed.
    ///
    /// # Panics
    ///
    /// Panics if the cell's candidates differ from the initial state.
    #[track_caller]
    pub fn assert_no_change(self, cell: Cell) -> Self {
        let initial = self.initial.candidates(cell);
        let current = self.current.candidates(cell);
        assert_eq!(
            initial, current,
            "Expected no change at {cell}, but candidates changed from {initial} to {current}"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use crosshatch_core::Variant;

    use super::*;
    use crate::BoxedRule;

    // Mock rule that never changes the board
    #[derive(Debug, Clone, Copy)]
    struct NoOpRule;

    impl Rule for NoOpRule {
        fn name(&self) -> &'static str {
            "no-op"
        }

        fn clone_box(&self) -> BoxedRule {
            Box::new(*self)
        }

        fn apply(&self, _board: &mut Board, _topology: &Topology) -> bool {
            false
        }
    }

    // Mock rule that solves A1 with 1 if it is still open
    #[derive(Debug, Clone, Copy)]
    struct SolveA1;

    impl Rule for SolveA1 {
        fn name(&self) -> &'static str {
            "solve-a1"
        }

        fn clone_box(&self) -> BoxedRule {
            Box::new(*self)
        }

        fn apply(&self, board: &mut Board, _topology: &Topology) -> bool {
            board.assign(Cell::new(0, 0), Digit::new(1))
        }
    }

    #[test]
    fn test_assert_solved() {
        RuleTester::new(Board::new(), Topology::new(Variant::Standard))
            .apply_once(&SolveA1)
            .assert_solved(Cell::new(0, 0), Digit::new(1));
    }

    #[test]
    #[should_panic(expected = "Expected cell A1 to be solved")]
    fn test_assert_solved_fails_when_not_solved() {
        RuleTester::new(Board::new(), Topology::new(Variant::Standard))
            .apply_once(&NoOpRule)
            .assert_solved(Cell::new(0, 0), Digit::new(1));
    }

    #[test]
    fn test_assert_no_change() {
        RuleTester::new(Board::new(), Topology::new(Variant::Standard))
            .apply_once(&NoOpRule)
            .assert_no_change(Cell::new(0, 0))
            .assert_no_change(Cell::new(8, 8));
    }

    #[test]
    #[should_panic(expected = "Expected no change at A1")]
    fn test_assert_no_change_fails_when_changed() {
        RuleTester::new(Board::new(), Topology::new(Variant::Standard))
            .apply_once(&SolveA1)
            .assert_no_change(Cell::new(0, 0));
    }

    #[test]
    fn test_apply_until_stuck_terminates() {
        RuleTester::new(Board::new(), Topology::new(Variant::Standard))
            .apply_until_stuck(&SolveA1)
            .assert_solved(Cell::new(0, 0), Digit::new(1));
    }

    #[test]
    fn test_from_line() {
        let line = format!("5{}", ".".repeat(80));
        let tester = RuleTester::from_line(&line, Topology::new(Variant::Standard));
        let _ = tester.apply_once(&NoOpRule);
    }
}
