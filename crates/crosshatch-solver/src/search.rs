//! Depth-first backtracking search on top of propagation.

use crosshatch_core::{Board, Cell, Topology};

use crate::{Propagation, Propagator};

/// Statistics collected while solving.
///
/// Rule application counts are indexed by the propagator's rule order;
/// guesses and backtracks come from the search driver.
///
/// # Examples
///
/// ```
/// use crosshatch_core::{Topology, Variant};
/// use crosshatch_solver::Solver;
///
/// let solver = Solver::with_default_rules();
/// let topology = Topology::new(Variant::Standard);
/// let board = "003020600900305001001806400008102900700000008006708200002609500800203009005010300"
///     .parse()?;
///
/// let mut stats = solver.new_stats();
/// let solution = solver.solve_with_stats(&board, &topology, &mut stats);
/// assert!(solution.is_some());
/// // This puzzle falls to propagation alone.
/// assert_eq!(stats.guesses(), 0);
/// # Ok::<(), crosshatch_core::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SolveStats {
    applications: Vec<usize>,
    passes: usize,
    guesses: usize,
    backtracks: usize,
}

impl SolveStats {
    pub(crate) fn with_rule_count(rules: usize) -> Self {
        Self {
            applications: vec![0; rules],
            passes: 0,
            guesses: 0,
            backtracks: 0,
        }
    }

    /// Returns rule application counts in propagator rule order.
    ///
    /// Rules that never made progress keep a count of `0`.
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns the number of completed propagation passes.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Returns the number of digits tried by the search driver.
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.guesses
    }

    /// Returns the number of abandoned search branches.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    pub(crate) fn record_application(&mut self, rule_index: usize) {
        self.applications[rule_index] += 1;
    }

    pub(crate) fn record_pass(&mut self) {
        self.passes += 1;
    }

    fn record_guess(&mut self) {
        self.guesses += 1;
    }

    fn record_backtrack(&mut self) {
        self.backtracks += 1;
    }
}

/// Solves puzzles by interleaving propagation with backtracking search.
///
/// The solver first runs its propagator to a fixed point. If that stalls,
/// it picks the unsolved cell with the fewest candidates (first such cell
/// in row-major order on a tie), tries each of its candidates in ascending
/// order on a cloned board, and recurses. The first fully solved board
/// found is returned; with deterministic rules, repeated runs on the same
/// input always return the same solution.
///
/// The input board is never mutated. An unsatisfiable puzzle yields
/// `None`; a malformed encoding is rejected earlier, by
/// [`Board::from_line`].
///
/// # Examples
///
/// ```
/// use crosshatch_core::{Topology, Variant};
/// use crosshatch_solver::Solver;
///
/// let solver = Solver::with_default_rules();
/// let topology = Topology::new(Variant::Diagonal);
/// let board = "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3"
///     .parse()?;
///
/// let solution = solver.solve(&board, &topology).expect("puzzle is satisfiable");
/// assert!(solution.is_solved());
/// # Ok::<(), crosshatch_core::ParseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    propagator: Propagator,
}

impl Solver {
    /// Creates a solver around the given propagator.
    #[must_use]
    pub fn new(propagator: Propagator) -> Self {
        Self { propagator }
    }

    /// Creates a solver with the default rule set.
    #[must_use]
    pub fn with_default_rules() -> Self {
        Self::new(Propagator::with_default_rules())
    }

    /// Returns the propagator driving this solver.
    #[must_use]
    pub fn propagator(&self) -> &Propagator {
        &self.propagator
    }

    /// Creates a statistics object aligned with this solver's rule order.
    #[must_use]
    pub fn new_stats(&self) -> SolveStats {
        self.propagator.new_stats()
    }

    /// Solves the board, returning the first solution found or `None` if
    /// the puzzle is unsatisfiable.
    #[must_use]
    pub fn solve(&self, board: &Board, topology: &Topology) -> Option<Board> {
        let mut stats = self.new_stats();
        self.solve_with_stats(board, topology, &mut stats)
    }

    /// Solves the board, accumulating statistics into `stats`.
    #[must_use]
    pub fn solve_with_stats(
        &self,
        board: &Board,
        topology: &Topology,
        stats: &mut SolveStats,
    ) -> Option<Board> {
        self.search(board.clone(), topology, stats)
    }

    fn search(&self, mut board: Board, topology: &Topology, stats: &mut SolveStats) -> Option<Board> {
        match self.propagator.run_with_stats(&mut board, topology, stats) {
            Propagation::Solved => return Some(board),
            Propagation::Contradiction => return None,
            Propagation::Stalled => {}
        }

        let cell = Self::branch_cell(&board)?;
        for digit in board.candidates(cell) {
            stats.record_guess();
            let mut branch = board.clone();
            branch.assign(cell, digit);
            if let Some(solution) = self.search(branch, topology, stats) {
                return Some(solution);
            }
            stats.record_backtrack();
        }
        None
    }

    /// Picks the unsolved cell with the fewest candidates, scanning in
    /// row-major order so ties go to the earliest cell.
    fn branch_cell(board: &Board) -> Option<Cell> {
        let mut best: Option<(Cell, usize)> = None;
        for cell in Cell::all() {
            let len = board.candidates(cell).len();
            if len <= 1 {
                continue;
            }
            if best.is_none_or(|(_, best_len)| len < best_len) {
                best = Some((cell, len));
                if len == 2 {
                    break;
                }
            }
        }
        best.map(|(cell, _)| cell)
    }
}

#[cfg(test)]
mod tests {
    use crosshatch_core::{Digit, Variant};

    use super::*;

    const DIAGONAL_PUZZLE: &str =
        "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3";
    const DIAGONAL_SOLUTION: &str =
        "267945381853716249491823576576438192384192657129657438642379815935281764718564923";

    fn solve_line(line: &str, variant: Variant) -> Option<String> {
        let solver = Solver::with_default_rules();
        let topology = Topology::new(variant);
        let board: Board = line.parse().unwrap();
        solver.solve(&board, &topology).map(|b| b.to_line())
    }

    #[test]
    fn test_solves_diagonal_puzzle() {
        assert_eq!(
            solve_line(DIAGONAL_PUZZLE, Variant::Diagonal).as_deref(),
            Some(DIAGONAL_SOLUTION)
        );
    }

    #[test]
    fn test_solution_satisfies_all_units() {
        let solver = Solver::with_default_rules();
        let topology = Topology::new(Variant::Diagonal);
        let board: Board = DIAGONAL_PUZZLE.parse().unwrap();
        let solution = solver.solve(&board, &topology).unwrap();

        for unit in topology.units() {
            let digits: Vec<Digit> = unit
                .cells()
                .iter()
                .map(|&cell| solution.solved_digit(cell).unwrap())
                .collect();
            for digit in Digit::ALL {
                assert_eq!(digits.iter().filter(|&&d| d == digit).count(), 1);
            }
        }
    }

    #[test]
    fn test_clues_survive_into_solution() {
        let solver = Solver::with_default_rules();
        let topology = Topology::new(Variant::Diagonal);
        let board: Board = DIAGONAL_PUZZLE.parse().unwrap();
        let solution = solver.solve(&board, &topology).unwrap();

        for cell in Cell::all() {
            if let Some(clue) = board.solved_digit(cell) {
                assert_eq!(solution.solved_digit(cell), Some(clue), "{cell}");
            }
        }
    }

    #[test]
    fn test_backtracking_solves_hard_puzzle() {
        // Stalls under propagation alone.
        let hard =
            "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";
        let solver = Solver::with_default_rules();
        let topology = Topology::new(Variant::Standard);
        let board: Board = hard.parse().unwrap();
        let mut stats = solver.new_stats();

        let solution = solver.solve_with_stats(&board, &topology, &mut stats).unwrap();
        assert_eq!(
            solution.to_line(),
            "417369825632158947958724316825437169791586432346912758289643571573291684164875293"
        );
        assert!(stats.guesses() >= 1);
    }

    #[test]
    fn test_unsatisfiable_puzzle_returns_none() {
        // Two 1s in the first row.
        let line = format!("11{}", ".".repeat(79));
        assert_eq!(solve_line(&line, Variant::Standard), None);
    }

    #[test]
    fn test_solved_board_returns_unchanged() {
        let solved =
            "123456789456789123789123456234567891567891234891234567345678912678912345912345678";
        assert_eq!(solve_line(solved, Variant::Standard).as_deref(), Some(solved));
    }

    #[test]
    fn test_fully_assigned_invalid_board_is_unsatisfiable() {
        // All 81 cells assigned, every unit violated. A full assignment
        // must not pass for a solution.
        let line = "1".repeat(81);
        assert_eq!(solve_line(&line, Variant::Standard), None);
    }

    #[test]
    fn test_standard_solution_is_rejected_under_diagonal_rules() {
        // Valid as a standard grid, but repeats digits on both diagonals.
        let solved =
            "123456789456789123789123456234567891567891234891234567345678912678912345912345678";
        assert_eq!(solve_line(solved, Variant::Diagonal), None);
    }

    #[test]
    fn test_nearly_empty_board_is_solvable() {
        let line = format!("1{}", ".".repeat(80));
        let solution = solve_line(&line, Variant::Standard).unwrap();
        let board: Board = solution.parse().unwrap();
        assert!(board.is_solved());
        assert!(solution.starts_with('1'));
    }

    #[test]
    fn test_variant_changes_satisfiability() {
        // A1 and E5 both 5: legal under standard rules, impossible once
        // the main diagonal is a unit.
        let mut line: Vec<u8> = vec![b'.'; 81];
        line[0] = b'5';
        line[40] = b'5';
        let line = String::from_utf8(line).unwrap();

        assert!(solve_line(&line, Variant::Standard).is_some());
        assert_eq!(solve_line(&line, Variant::Diagonal), None);
    }

    #[test]
    fn test_determinism() {
        let first = solve_line(DIAGONAL_PUZZLE, Variant::Diagonal);
        let second = solve_line(DIAGONAL_PUZZLE, Variant::Diagonal);
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_board_is_not_mutated() {
        let solver = Solver::with_default_rules();
        let topology = Topology::new(Variant::Diagonal);
        let board: Board = DIAGONAL_PUZZLE.parse().unwrap();
        let copy = board.clone();

        let _ = solver.solve(&board, &topology);
        assert_eq!(board, copy);
    }

    proptest::proptest! {
        #![proptest_config(proptest::prelude::ProptestConfig::with_cases(16))]
        #[test]
        fn test_masked_solutions_stay_solvable(
            mask in proptest::collection::vec(proptest::bool::ANY, 81),
        ) {
            let solved =
                "123456789456789123789123456234567891567891234891234567345678912678912345912345678";
            let line: String = solved
                .chars()
                .zip(&mask)
                .map(|(ch, &hide)| if hide { '.' } else { ch })
                .collect();

            let solver = Solver::with_default_rules();
            let topology = Topology::new(Variant::Standard);
            let board: Board = line.parse().unwrap();
            let solution = solver.solve(&board, &topology);

            // Removing clues from a valid solution never makes it
            // unsatisfiable, and the remaining clues must survive.
            let solution = solution.expect("masked solution must stay solvable");
            proptest::prop_assert!(solution.is_solved());
            for cell in Cell::all() {
                if let Some(clue) = board.solved_digit(cell) {
                    proptest::prop_assert_eq!(solution.solved_digit(cell), Some(clue));
                }
            }
        }
    }

    #[test]
    fn test_stats_count_guesses_and_backtracks() {
        let solver = Solver::with_default_rules();
        let topology = Topology::new(Variant::Standard);
        let mut stats = solver.new_stats();

        // An empty board stalls immediately, so solving it takes guesses.
        let solution = solver.solve_with_stats(&Board::new(), &topology, &mut stats);
        assert!(solution.is_some());
        assert!(stats.guesses() >= 1);
        assert!(stats.guesses() > stats.backtracks());
        assert!(stats.passes() >= 1);
    }
}
