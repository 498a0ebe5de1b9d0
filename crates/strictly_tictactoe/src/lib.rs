//! Pure tic-tac-toe game logic for pointer-driven front ends.
//!
//! The board is laid out over a pixel area: every [`Cell`] owns the
//! rectangle it covers, so a front end only forwards raw press coordinates
//! and the [`TurnController`] decides whether the press placed a marker,
//! missed, hit a taken cell, or reset a finished round.
//!
//! This crate has no I/O; rendering and input belong to the caller.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, ClickResult, GameStatus, Marker, TurnController};
//!
//! // 30x30 area: cells are 10x10, grid lines at 10 and 20.
//! let mut board = Board::new(30, 30);
//! let mut turns = TurnController::new();
//!
//! // X takes the top row while O plays the middle row.
//! for (x, y) in [(5, 5), (5, 15), (15, 5), (15, 15), (25, 5)] {
//!     turns.handle_click(&mut board, x, y);
//! }
//! assert_eq!(turns.state().status(), GameStatus::Won(Marker::X));
//!
//! // The next press only resets.
//! assert_eq!(turns.handle_click(&mut board, 5, 5), ClickResult::Reset);
//! assert!(board.cells().iter().all(|cell| !cell.is_occupied()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod geometry;
pub mod invariants;
mod position;
pub mod rules;
mod turn;
mod types;

pub use board::{Board, MoveOutcome, TerminalState};
pub use cell::{Cell, OccupyError};
pub use geometry::Rect;
pub use position::Position;
pub use turn::{ClickResult, GameState, GameStatus, TurnController};
pub use types::{Marker, Square};
