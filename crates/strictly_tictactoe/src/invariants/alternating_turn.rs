//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::{Invariant, Snapshot};
use crate::types::Marker;

/// Invariant: Players alternate turns.
///
/// X moves first, so the board holds either as many X as O markers (X to
/// move) or exactly one more X (O to move). The active player index is
/// toggled on every applied move, including the one that ends the round,
/// so the relation also holds while locked.
pub struct AlternatingTurnInvariant;

impl Invariant<Snapshot<'_>> for AlternatingTurnInvariant {
    fn holds(snapshot: &Snapshot<'_>) -> bool {
        let (mut xs, mut os) = (0usize, 0usize);
        for (_, _, marker) in snapshot.board.occupied() {
            match marker {
                Marker::X => xs += 1,
                Marker::O => os += 1,
            }
        }

        match snapshot.state.current_marker() {
            Marker::X => xs == os,
            Marker::O => xs == os + 1,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
