//! 3x3 board of cells laid out over a pixel area.

use crate::cell::{Cell, OccupyError};
use crate::geometry::Rect;
use crate::position::Position;
use crate::rules;
use crate::types::{Marker, Square};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, trace};

/// Result of routing a pointer press to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The marker was placed in the cell at this position.
    Applied(Position),
    /// The point lies on a grid line or outside the board.
    OutOfCell,
    /// The hit cell already holds a marker; nothing changed.
    CellTaken(Position),
}

/// Whether the round has ended, evaluated after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalState {
    /// No line is complete and at least one cell is free.
    Ongoing,
    /// The marker completed a row, column or diagonal.
    Win(Marker),
    /// Every cell is occupied and nobody completed a line.
    Draw,
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major and each one owns the pixel rectangle it
/// covers, so a pointer press can be resolved without any layout lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 9],
    cell_width: u32,
    cell_height: u32,
}

impl Board {
    /// Lays out 9 cells over a `width` x `height` area anchored at the origin.
    ///
    /// Cell size is `width / 3` by `height / 3`; any remainder is left
    /// uncovered along the right and bottom edges.
    #[instrument]
    pub fn new(width: u32, height: u32) -> Self {
        let cell_width = width / 3;
        let cell_height = height / 3;
        let cells = std::array::from_fn(|index| {
            let (row, col) = (index as u32 / 3, index as u32 % 3);
            Cell::new(Rect::new(
                col * cell_width,
                row * cell_height,
                cell_width,
                cell_height,
            ))
        });
        debug!(cell_width, cell_height, "Board laid out");
        Self {
            cells,
            cell_width,
            cell_height,
        }
    }

    /// Width of one cell in pixels.
    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Height of one cell in pixels.
    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Area covered by the three rows and columns of cells.
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.cell_width * 3, self.cell_height * 3)
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the cell at a position.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.to_index()]
    }

    /// Returns the content of the cell at a position.
    pub fn get(&self, pos: Position) -> Square {
        self.cell(pos).square()
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        !self.cell(pos).is_occupied()
    }

    /// Iterates over the occupied cells with their positions and markers.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, &Cell, Marker)> + '_ {
        Position::iter()
            .zip(self.cells.iter())
            .filter_map(|(pos, cell)| cell.marker().map(|marker| (pos, cell, marker)))
    }

    /// Routes a pointer press at `(px, py)` to the cell under it.
    ///
    /// The first cell (row-major) whose strict interior contains the point
    /// gets the marker.
    #[instrument(skip(self))]
    pub fn resolve_click(&mut self, px: u32, py: u32, marker: Marker) -> MoveOutcome {
        let hit = Position::iter()
            .zip(self.cells.iter_mut())
            .find(|(_, cell)| cell.hit_test(px, py));

        let Some((pos, cell)) = hit else {
            trace!("Press missed every cell");
            return MoveOutcome::OutOfCell;
        };

        match cell.try_occupy(marker) {
            Ok(()) => {
                debug!(position = %pos, "Marker placed");
                MoveOutcome::Applied(pos)
            }
            Err(OccupyError::AlreadyOccupied(existing)) => {
                debug!(position = %pos, %existing, "Cell already taken");
                MoveOutcome::CellTaken(pos)
            }
        }
    }

    /// Evaluates whether the round is over.
    ///
    /// Lines are checked rows first, then columns, then diagonals; the first
    /// complete line decides the winner.
    #[instrument(skip(self))]
    pub fn evaluate_terminal(&self) -> TerminalState {
        if let Some(winner) = rules::check_winner(self) {
            TerminalState::Win(winner)
        } else if rules::is_full(self) {
            TerminalState::Draw
        } else {
            TerminalState::Ongoing
        }
    }

    /// Clears every cell. Bounds are left untouched.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    /// Places a marker directly, bypassing pointer resolution.
    ///
    /// # Errors
    ///
    /// Returns [`OccupyError::AlreadyOccupied`] when the cell is taken.
    pub fn place(&mut self, pos: Position, marker: Marker) -> Result<(), OccupyError> {
        self.cells[pos.to_index()].try_occupy(marker)
    }
}
