//! Monotonic board invariant: markers never change once placed.

use super::{Invariant, Step};

/// Invariant: a move only ever adds a single marker.
///
/// Every cell occupied before the move is identical afterwards and at most
/// one empty cell became occupied. Resets are not moves and are not checked.
pub struct MonotonicBoardInvariant;

impl Invariant<Step<'_>> for MonotonicBoardInvariant {
    fn holds(step: &Step<'_>) -> bool {
        let mut placed = 0;
        for (before, after) in step.before.cells().iter().zip(step.after.cells()) {
            if before.bounds() != after.bounds() {
                return false;
            }
            match (before.marker(), after.marker()) {
                (Some(old), Some(new)) if old != new => return false,
                (Some(_), None) => return false,
                (None, Some(_)) => placed += 1,
                _ => {}
            }
        }
        placed <= 1
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten or cleared by a move)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Marker, Position};

    #[test]
    fn test_single_placement_holds() {
        let before = Board::new(30, 30);
        let mut after = before.clone();
        after.place(Position::Center, Marker::X).unwrap();
        assert!(MonotonicBoardInvariant::holds(&Step {
            before: &before,
            after: &after,
        }));
    }

    #[test]
    fn test_two_placements_violate() {
        let before = Board::new(30, 30);
        let mut after = before.clone();
        after.place(Position::Center, Marker::X).unwrap();
        after.place(Position::TopLeft, Marker::O).unwrap();
        assert!(!MonotonicBoardInvariant::holds(&Step {
            before: &before,
            after: &after,
        }));
    }

    #[test]
    fn test_cleared_cell_violates() {
        let mut before = Board::new(30, 30);
        before.place(Position::Center, Marker::X).unwrap();
        let after = Board::new(30, 30);
        assert!(!MonotonicBoardInvariant::holds(&Step {
            before: &before,
            after: &after,
        }));
    }
}
