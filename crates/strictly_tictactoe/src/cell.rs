//! A single grid cell with fixed pixel bounds.

use crate::geometry::Rect;
use crate::types::{Marker, Square};
use derive_more::{Display, Error};
use tracing::instrument;

/// Error returned when placing a marker on a cell that already holds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum OccupyError {
    /// The cell already holds the contained marker.
    #[display("Cell is already occupied by {}", _0)]
    AlreadyOccupied(#[error(not(source))] Marker),
}

/// One grid position: what it holds and where it sits on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    square: Square,
    bounds: Rect,
}

impl Cell {
    /// Creates an empty cell with the given bounds.
    pub fn new(bounds: Rect) -> Self {
        Self {
            square: Square::Empty,
            bounds,
        }
    }

    /// Returns the cell content.
    pub fn square(&self) -> Square {
        self.square
    }

    /// Returns the placed marker, if any.
    pub fn marker(&self) -> Option<Marker> {
        self.square.marker()
    }

    /// Returns true when a marker has been placed.
    pub fn is_occupied(&self) -> bool {
        self.square.is_occupied()
    }

    /// Returns the pixel bounds fixed at construction.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// True iff the point lies strictly inside the bounds.
    pub fn hit_test(&self, px: u32, py: u32) -> bool {
        self.bounds.contains_strict(px, py)
    }

    /// Places `marker` if the cell is empty.
    ///
    /// # Errors
    ///
    /// Returns [`OccupyError::AlreadyOccupied`] and leaves the cell unchanged
    /// when a marker is already present.
    #[instrument(level = "trace", skip(self), fields(bounds = ?self.bounds))]
    pub fn try_occupy(&mut self, marker: Marker) -> Result<(), OccupyError> {
        match self.square {
            Square::Occupied(existing) => Err(OccupyError::AlreadyOccupied(existing)),
            Square::Empty => {
                self.square = Square::Occupied(marker);
                Ok(())
            }
        }
    }

    /// Clears the cell. Bounds are kept.
    pub fn reset(&mut self) {
        self.square = Square::Empty;
    }
}
