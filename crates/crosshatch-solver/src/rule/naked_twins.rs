use crosshatch_core::{Board, Cell, Topology};

use crate::{BoxedRule, Rule};

const NAME: &str = "naked-twins";

/// Removes the candidates of a naked twin pair from the cells both twins
/// can see.
///
/// Two peer cells whose candidate sets are the same two digits must take
/// those digits between them, so no common peer of the pair can hold
/// either digit. The eliminated scope is the intersection of the two
/// cells' peer sets, which covers every unit the pair shares, including
/// a shared diagonal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedTwins {}

impl NakedTwins {
    /// Creates a new `NakedTwins` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for NakedTwins {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board, topology: &Topology) -> bool {
        let pair_cells: Vec<Cell> = Cell::all()
            .filter(|&cell| board.candidates(cell).len() == 2)
            .collect();

        let mut changed = false;
        for (i, &first) in pair_cells.iter().enumerate() {
            for &second in &pair_cells[i + 1..] {
                if !topology.peers(first).contains(second) {
                    continue;
                }
                // Re-read both sets: an earlier twin may have shrunk them.
                let twins = board.candidates(first);
                if twins.len() != 2 || twins != board.candidates(second) {
                    continue;
                }
                let common = topology.peers(first) & topology.peers(second);
                for cell in common {
                    for digit in twins {
                        changed |= board.eliminate(cell, digit);
                    }
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use crosshatch_core::{Digit, DigitSet, Variant};

    use super::*;
    use crate::testing::RuleTester;

    fn keep_only(board: &mut Board, cell: Cell, digits: [Digit; 2]) {
        for digit in Digit::ALL {
            if digit != digits[0] && digit != digits[1] {
                board.eliminate(cell, digit);
            }
        }
    }

    #[test]
    fn test_eliminates_from_common_peers_in_row() {
        let mut board = Board::new();
        let pair = [Digit::new(1), Digit::new(2)];
        keep_only(&mut board, Cell::new(0, 0), pair);
        keep_only(&mut board, Cell::new(0, 3), pair);

        RuleTester::new(board, Topology::new(Variant::Standard))
            .apply_once(&NakedTwins::new())
            .assert_removed_includes(Cell::new(0, 4), pair)
            .assert_removed_includes(Cell::new(0, 8), pair)
            // Cells seeing only one twin keep their candidates.
            .assert_no_change(Cell::new(1, 0))
            .assert_no_change(Cell::new(1, 3))
            .assert_no_change(Cell::new(4, 4));
    }

    #[test]
    fn test_twins_keep_their_own_candidates() {
        let mut board = Board::new();
        let pair = [Digit::new(1), Digit::new(2)];
        keep_only(&mut board, Cell::new(0, 0), pair);
        keep_only(&mut board, Cell::new(0, 3), pair);

        RuleTester::new(board, Topology::new(Variant::Standard))
            .apply_once(&NakedTwins::new())
            .assert_no_change(Cell::new(0, 0))
            .assert_no_change(Cell::new(0, 3));
    }

    #[test]
    fn test_diagonal_pair_eliminates_along_diagonal() {
        let mut board = Board::new();
        let pair = [Digit::new(5), Digit::new(6)];
        keep_only(&mut board, Cell::new(0, 0), pair);
        keep_only(&mut board, Cell::new(4, 4), pair);

        // A1 and E5 are not peers under standard rules, so no twin forms.
        RuleTester::new(board.clone(), Topology::new(Variant::Standard))
            .apply_once(&NakedTwins::new())
            .assert_no_change(Cell::new(8, 8));

        RuleTester::new(board, Topology::new(Variant::Diagonal))
            .apply_once(&NakedTwins::new())
            .assert_removed_includes(Cell::new(8, 8), pair)
            .assert_removed_includes(Cell::new(2, 2), pair);
    }

    #[test]
    fn test_no_change_when_candidate_sets_differ() {
        let mut board = Board::new();
        keep_only(&mut board, Cell::new(0, 0), [Digit::new(1), Digit::new(2)]);
        keep_only(&mut board, Cell::new(0, 3), [Digit::new(1), Digit::new(3)]);

        RuleTester::new(board, Topology::new(Variant::Standard))
            .apply_once(&NakedTwins::new())
            .assert_no_change(Cell::new(0, 4))
            .assert_no_change(Cell::new(0, 8));
    }

    #[test]
    fn test_can_empty_a_common_peer() {
        // A third cell holding exactly the twin digits loses both.
        let mut board = Board::new();
        let pair = [Digit::new(1), Digit::new(2)];
        keep_only(&mut board, Cell::new(0, 0), pair);
        keep_only(&mut board, Cell::new(0, 3), pair);
        keep_only(&mut board, Cell::new(0, 6), pair);
        let topology = Topology::new(Variant::Standard);

        assert!(NakedTwins::new().apply(&mut board, &topology));
        assert_eq!(board.candidates(Cell::new(0, 6)), DigitSet::EMPTY);
        assert!(board.contradiction().is_some());
    }
}
