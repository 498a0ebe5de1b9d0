//! Draw detection logic for tic-tac-toe.

use crate::board::Board;
use crate::cell::Cell;

/// Checks if the board is full (all cells occupied).
///
/// A full board is only a draw once no line is complete; the board checks
/// for a winner first.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(Cell::is_occupied)
}
