use crosshatch_core::{Board, Cell, Topology};

use crate::{BoxedRule, Rule};

const NAME: &str = "eliminate";

/// Removes a solved cell's digit from the candidates of all its peers.
///
/// A digit placed in a cell cannot appear anywhere else in the cell's row,
/// column, box, or (in the diagonal variant) diagonals. One application
/// sweeps every solved cell, so cascades that solve further cells are
/// picked up by the next pass of the propagation engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct Eliminate {}

impl Eliminate {
    /// Creates a new `Eliminate` rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for Eliminate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board, topology: &Topology) -> bool {
        let mut changed = false;
        for cell in Cell::all() {
            let Some(digit) = board.solved_digit(cell) else {
                continue;
            };
            for peer in topology.peers(cell) {
                changed |= board.eliminate(peer, digit);
            }
        }
        changed
    }
}
