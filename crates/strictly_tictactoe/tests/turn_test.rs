//! Tests for turn alternation and the end-of-round lock.

use strictly_tictactoe::{Board, ClickResult, GameStatus, Marker, Position, TurnController};

/// Centre of the cell at `pos` on a 48x24 board (cells 16x8).
fn center(pos: Position) -> (u32, u32) {
    (pos.col() as u32 * 16 + 8, pos.row() as u32 * 8 + 4)
}

fn click(turns: &mut TurnController, board: &mut Board, pos: Position) -> ClickResult {
    let (x, y) = center(pos);
    turns.handle_click(board, x, y)
}

#[test]
fn test_initial_state() {
    let turns = TurnController::new();
    assert_eq!(turns.state().current_player_index(), 0);
    assert_eq!(turns.state().current_marker(), Marker::X);
    assert_eq!(turns.state().status(), GameStatus::InProgress);
    assert!(!turns.state().is_locked());
}

#[test]
fn test_applied_moves_toggle_player() {
    let mut board = Board::new(48, 24);
    let mut turns = TurnController::new();

    let result = click(&mut turns, &mut board, Position::Center);
    assert_eq!(
        result,
        ClickResult::Applied {
            position: Position::Center,
            marker: Marker::X,
            status: GameStatus::InProgress,
        }
    );
    assert_eq!(turns.state().current_player_index(), 1);

    click(&mut turns, &mut board, Position::TopLeft);
    assert_eq!(turns.state().current_player_index(), 0);
    assert_eq!(board.get(Position::TopLeft).marker(), Some(Marker::O));
}

#[test]
fn test_rejected_moves_do_not_toggle() {
    let mut board = Board::new(48, 24);
    let mut turns = TurnController::new();
    click(&mut turns, &mut board, Position::Center);

    assert_eq!(
        click(&mut turns, &mut board, Position::Center),
        ClickResult::CellTaken(Position::Center)
    );
    assert_eq!(turns.handle_click(&mut board, 16, 4), ClickResult::OutOfCell);
    assert_eq!(turns.handle_click(&mut board, 100, 100), ClickResult::OutOfCell);

    assert_eq!(turns.state().current_marker(), Marker::O);
    assert_eq!(board.get(Position::Center).marker(), Some(Marker::X));
}

#[test]
fn test_draw_then_reset() {
    use Position::*;
    let mut board = Board::new(48, 24);
    let mut turns = TurnController::new();

    // X O X / X O O / O X X
    let moves = [
        TopLeft, TopCenter, TopRight, Center, MiddleLeft, MiddleRight, BottomCenter, BottomLeft,
        BottomRight,
    ];
    for (i, pos) in moves.into_iter().enumerate() {
        let result = click(&mut turns, &mut board, pos);
        let expected = if i == 8 {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
        assert!(matches!(result, ClickResult::Applied { status, .. } if status == expected));
    }
    assert_eq!(turns.state().status(), GameStatus::Draw);
    assert!(turns.state().is_locked());

    // Any press resets, even one that would miss every cell.
    assert_eq!(turns.handle_click(&mut board, 16, 8), ClickResult::Reset);
    assert_eq!(turns.state().status(), GameStatus::InProgress);
    assert_eq!(turns.state().current_player_index(), 0);
    assert!(board.cells().iter().all(|cell| !cell.is_occupied()));
}

#[test]
fn test_win_locks_and_reset_click_is_not_a_move() {
    use Position::*;
    let mut board = Board::new(48, 24);
    let mut turns = TurnController::new();

    for pos in [TopLeft, MiddleLeft, TopCenter, Center, TopRight] {
        click(&mut turns, &mut board, pos);
    }
    assert_eq!(turns.state().status(), GameStatus::Won(Marker::X));
    // The turn still toggled on the winning move.
    assert_eq!(turns.state().current_marker(), Marker::O);

    assert_eq!(click(&mut turns, &mut board, Center), ClickResult::Reset);
    assert!(board.is_empty(Center));
    assert_eq!(turns.state().current_marker(), Marker::X);

    // The following press is a regular move again.
    assert!(matches!(
        click(&mut turns, &mut board, Center),
        ClickResult::Applied { marker: Marker::X, .. }
    ));
}

#[test]
fn test_o_can_win() {
    use Position::*;
    let mut board = Board::new(48, 24);
    let mut turns = TurnController::new();

    for pos in [TopLeft, TopRight, MiddleLeft, Center, BottomRight, BottomLeft] {
        click(&mut turns, &mut board, pos);
    }
    assert_eq!(turns.state().status(), GameStatus::Won(Marker::O));
}
