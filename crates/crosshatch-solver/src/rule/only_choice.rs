use crosshatch_core::{Board, Digit, Topology};

use crate::{BoxedRule, Rule};

const NAME: &str = "only-choice";

/// Places a digit in the sole cell of a unit that still admits it.
///
/// If exactly one cell in a row, column, box, or diagonal has a digit
/// among its candidates, that cell must hold the digit, and its other
/// candidates are discarded. A digit with no admitting cell is left for
/// the propagation engine's contradiction check to surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlyChoice {}

impl OnlyChoice {
    /// Creates a new `OnlyChoice` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for OnlyChoice {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board, topology: &Topology) -> bool {
        let mut changed = false;
        for unit in topology.units() {
            for digit in Digit::ALL {
                let mut places = unit
                    .cells()
                    .iter()
                    .copied()
                    .filter(|&cell| board.candidates(cell).contains(digit));
                let (Some(cell), None) = (places.next(), places.next()) else {
                    continue;
                };
                changed |= board.assign(cell, digit);
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use crosshatch_core::{Cell, Variant};

    use super::*;
    use crate::{rule::Eliminate, testing::RuleTester};

    #[test]
    fn test_places_digit_with_single_place_in_row() {
        let mut board = Board::new();
        let target = Cell::new(0, 7);
        for col in 0..9 {
            let cell = Cell::new(0, col);
            if cell != target {
                board.eliminate(cell, Digit::new(3));
            }
        }

        RuleTester::new(board, Topology::new(Variant::Standard))
            .apply_once(&OnlyChoice::new())
            .assert_solved(target, Digit::new(3));
    }

    #[test]
    fn test_places_digit_with_single_place_on_diagonal() {
        let mut board = Board::new();
        let target = Cell::new(4, 4);
        for i in 0..9 {
            let cell = Cell::new(i, i);
            if cell != target {
                board.eliminate(cell, Digit::new(8));
            }
        }

        // Under standard rules the diagonal is not a unit, so nothing fires.
        RuleTester::new(board.clone(), Topology::new(Variant::Standard))
            .apply_once(&OnlyChoice::new())
            .assert_no_change(target);

        RuleTester::new(board, Topology::new(Variant::Diagonal))
            .apply_once(&OnlyChoice::new())
            .assert_solved(target, Digit::new(8));
    }

    #[test]
    fn test_no_change_when_digit_has_two_places() {
        let mut board = Board::new();
        for col in 2..9 {
            board.eliminate(Cell::new(0, col), Digit::new(3));
        }

        RuleTester::new(board, Topology::new(Variant::Standard))
            .apply_once(&OnlyChoice::new())
            .assert_no_change(Cell::new(0, 0))
            .assert_no_change(Cell::new(0, 1));
    }

    #[test]
    fn test_already_solved_cell_is_not_a_change() {
        let mut board = Board::new();
        board.assign(Cell::new(0, 0), Digit::new(3));
        let topology = Topology::new(Variant::Standard);

        // Clear 3 from the rest of the row so A1 is the only place for it.
        Eliminate::new().apply(&mut board, &topology);

        assert!(!OnlyChoice::new().apply(&mut board, &topology));
    }
}
