//! Phase consistency invariant: the recorded status matches the board.

use super::{Invariant, Snapshot};
use crate::turn::GameStatus;

/// Invariant: the round status is what evaluating the board yields.
///
/// An in-progress round has no complete line and a free cell; a won round
/// shows the winner's line; a drawn round is full with no line.
pub struct PhaseConsistentInvariant;

impl Invariant<Snapshot<'_>> for PhaseConsistentInvariant {
    fn holds(snapshot: &Snapshot<'_>) -> bool {
        GameStatus::from(snapshot.board.evaluate_terminal()) == snapshot.state.status()
    }

    fn description() -> &'static str {
        "Round status agrees with the board"
    }
}
