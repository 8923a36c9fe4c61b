//! Constraint propagation rules.
//!
//! Each rule implements the [`Rule`] trait and removes candidates that the
//! current board state rules out. Rules never guess and never re-add a
//! candidate; guessing is the job of the search driver.

use std::fmt::Debug;

use crosshatch_core::{Board, Topology};

pub use self::{eliminate::Eliminate, naked_twins::NakedTwins, only_choice::OnlyChoice};

mod eliminate;
mod naked_twins;
mod only_choice;

/// The default rule set in application order.
///
/// The order matters for reproducibility: the propagation engine applies
/// rules in this order on every pass, and statistics are indexed by it.
///
/// # Examples
///
/// ```
/// use crosshatch_solver::rule;
///
/// let rules = rule::default_rules();
/// assert_eq!(rules.len(), 3);
/// assert_eq!(rules[0].name(), "eliminate");
/// ```
#[must_use]
pub fn default_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(Eliminate::new()),
        Box::new(OnlyChoice::new()),
        Box::new(NakedTwins::new()),
    ]
}

/// A constraint propagation rule.
///
/// Rules are pure candidate-narrowing steps: applying one may solve cells
/// or empty a cell's candidate set, but it never adds candidates back.
/// The caller checks the board for contradictions after each application.
pub trait Rule: Debug {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the rule.
    fn clone_box(&self) -> BoxedRule;

    /// Applies the rule to the board until it has nothing left to remove.
    ///
    /// Returns `true` if any candidate was removed.
    fn apply(&self, board: &mut Board, topology: &Topology) -> bool;
}

/// A boxed rule.
pub type BoxedRule = Box<dyn Rule>;

impl Clone for BoxedRule {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
