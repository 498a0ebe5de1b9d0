//! Core domain types for tic-tac-toe.

/// Marker a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Marker {
    /// Marker of player 0 (moves first).
    #[display("X")]
    X,
    /// Marker of player 1.
    #[display("O")]
    O,
}

impl Marker {
    /// The two markers in turn order; index 0 moves first.
    pub const PAIR: [Marker; 2] = [Marker::X, Marker::O];
}

/// Content of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// No marker placed yet.
    #[default]
    Empty,
    /// Cell holds a player's marker.
    Occupied(Marker),
}

impl Square {
    /// Returns the marker, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }

    /// Returns true when a marker has been placed.
    pub fn is_occupied(self) -> bool {
        matches!(self, Square::Occupied(_))
    }
}
