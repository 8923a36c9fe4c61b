//! Fixed-point constraint propagation.

use crosshatch_core::{Board, Topology};

use crate::{SolveStats, rule::BoxedRule};

/// The outcome of running propagation to a fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// All 81 cells are solved and no rule has anything left to do.
    Solved,
    /// No rule made progress; the board needs a guess to continue.
    Stalled,
    /// Some cell lost its last candidate; this board state is unsolvable.
    Contradiction,
}

/// Applies a fixed list of rules until the board stops changing.
///
/// Each pass applies every rule once, in order. The loop exits when a cell
/// runs out of candidates or a full pass removes no candidate; only at such
/// a fixed point is the board classified as solved or stalled. A fully
/// assigned board is therefore never taken at face value: elimination must
/// run clean over it first, which turns any clashing assignment into a
/// contradiction instead. The board is checked for contradictions after
/// every rule application, not just at the end of a pass.
///
/// # Examples
///
/// ```
/// use crosshatch_core::{Topology, Variant};
/// use crosshatch_solver::{Propagation, Propagator};
///
/// let propagator = Propagator::with_default_rules();
/// let topology = Topology::new(Variant::Standard);
///
/// let mut board = "003020600900305001001806400008102900700000008006708200002609500800203009005010300"
///     .parse()?;
/// assert_eq!(propagator.run(&mut board, &topology), Propagation::Solved);
/// # Ok::<(), crosshatch_core::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Propagator {
    rules: Vec<BoxedRule>,
}

impl Propagator {
    /// Creates a propagator with the given rules.
    ///
    /// Rules are applied in the order they appear in the vector, and
    /// [`SolveStats::applications`] is indexed by that order.
    #[must_use]
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Creates a propagator with the default rule set
    /// ([`rule::default_rules`](crate::rule::default_rules)).
    #[must_use]
    pub fn with_default_rules() -> Self {
        Self::new(crate::rule::default_rules())
    }

    /// Returns the configured rules in application order.
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Creates a statistics object aligned with this propagator's rule
    /// order.
    #[must_use]
    pub fn new_stats(&self) -> SolveStats {
        SolveStats::with_rule_count(self.rules.len())
    }

    /// Runs propagation to a fixed point.
    pub fn run(&self, board: &mut Board, topology: &Topology) -> Propagation {
        let mut stats = self.new_stats();
        self.run_with_stats(board, topology, &mut stats)
    }

    /// Runs propagation to a fixed point, recording rule applications and
    /// pass counts in `stats`.
    pub fn run_with_stats(
        &self,
        board: &mut Board,
        topology: &Topology,
        stats: &mut SolveStats,
    ) -> Propagation {
        loop {
            let mut changed = false;
            for (i, rule) in self.rules.iter().enumerate() {
                if rule.apply(board, topology) {
                    stats.record_application(i);
                    changed = true;
                }
                if board.contradiction().is_some() {
                    return Propagation::Contradiction;
                }
            }
            stats.record_pass();
            if !changed {
                return if board.is_solved() {
                    Propagation::Solved
                } else {
                    Propagation::Stalled
                };
            }
        }
    }
}

impl Default for Propagator {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
