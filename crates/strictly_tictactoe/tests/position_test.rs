//! Tests for tic-tac-toe position enum.

use strictly_tictactoe::{Board, Marker, Position};
use strum::IntoEnumIterator;

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_iteration_order_matches_cells() {
    let board = Board::new(30, 30);
    for (pos, cell) in Position::iter().zip(board.cells()) {
        assert_eq!(board.cell(pos), cell);
    }
}

#[test]
fn test_occupied_lists_placed_markers() {
    let mut board = Board::new(30, 30);
    board.place(Position::TopLeft, Marker::X).unwrap();
    board.place(Position::Center, Marker::O).unwrap();

    let occupied: Vec<_> = board
        .occupied()
        .map(|(pos, _, marker)| (pos, marker))
        .collect();
    assert_eq!(
        occupied,
        vec![(Position::TopLeft, Marker::X), (Position::Center, Marker::O)]
    );
}
