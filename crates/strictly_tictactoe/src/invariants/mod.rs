//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.
//! [`TurnController`](crate::TurnController) checks them after every applied
//! move in debug builds.

use crate::board::Board;
use crate::turn::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// A board together with the turn state that owns it.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// The board.
    pub board: &'a Board,
    /// Turn and phase bookkeeping.
    pub state: &'a GameState,
}

/// A board before and after a single move.
#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    /// Board before the move.
    pub before: &'a Board,
    /// Board after the move.
    pub after: &'a Board,
}

pub mod alternating_turn;
pub mod monotonic_board;
pub mod phase_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use phase_consistent::PhaseConsistentInvariant;

/// Invariants that hold for every reachable [`Snapshot`].
pub type GameInvariants = (AlternatingTurnInvariant, PhaseConsistentInvariant);
