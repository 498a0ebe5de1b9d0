//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::position::Position;
use crate::types::Square;

/// Winning lines in evaluation order: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the marker of the first complete line in [`LINES`] order,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<crate::Marker> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(marker) if sq == board.get(b) && sq == board.get(c) => Some(marker),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Marker;

    fn board_with(marker: Marker, line: [Position; 3]) -> Board {
        let mut board = Board::new(30, 30);
        for pos in line {
            board.place(pos, marker).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(30, 30);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            assert_eq!(check_winner(&board_with(Marker::X, line)), Some(Marker::X));
            assert_eq!(check_winner(&board_with(Marker::O, line)), Some(Marker::O));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new(30, 30);
        board.place(Position::TopLeft, Marker::X).unwrap();
        board.place(Position::TopCenter, Marker::X).unwrap();
        board.place(Position::TopRight, Marker::O).unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
