//! Turn alternation and the end-of-round lock.

use crate::board::{Board, MoveOutcome, TerminalState};
use crate::invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, MonotonicBoardInvariant,
    Snapshot, Step,
};
use crate::position::Position;
use crate::types::Marker;
use tracing::{debug, info, instrument, warn};

/// Current status of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// Round ended in a win.
    Won(Marker),
    /// Round ended in a draw.
    Draw,
}

impl From<TerminalState> for GameStatus {
    fn from(state: TerminalState) -> Self {
        match state {
            TerminalState::Ongoing => GameStatus::InProgress,
            TerminalState::Win(marker) => GameStatus::Won(marker),
            TerminalState::Draw => GameStatus::Draw,
        }
    }
}

/// Turn and phase bookkeeping for one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    current_player_index: usize,
    status: GameStatus,
}

impl GameState {
    /// Creates the initial state: player 0 to move, round in progress.
    pub fn new() -> Self {
        Self {
            current_player_index: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Index (0 or 1) of the player whose turn it is.
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// Marker of the player whose turn it is.
    pub fn current_marker(&self) -> Marker {
        Marker::PAIR[self.current_player_index]
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the round has ended; the next press resets instead of moving.
    pub fn is_locked(&self) -> bool {
        self.status != GameStatus::InProgress
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// What a pointer press did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// A marker was placed; `status` is the round status after the move.
    Applied {
        /// Where the marker went.
        position: Position,
        /// Which marker was placed.
        marker: Marker,
        /// Round status after evaluating the board.
        status: GameStatus,
    },
    /// The press missed every cell; nothing changed.
    OutOfCell,
    /// The press hit an occupied cell; nothing changed.
    CellTaken(Position),
    /// The round was over, so the press cleared the board.
    Reset,
}

/// Drives the two-player state machine over a [`Board`].
///
/// ```
/// use strictly_tictactoe::{Board, ClickResult, GameStatus, Marker, TurnController};
///
/// let mut board = Board::new(30, 30);
/// let mut turns = TurnController::new();
///
/// let result = turns.handle_click(&mut board, 5, 5);
/// assert!(matches!(result, ClickResult::Applied { marker: Marker::X, .. }));
/// assert_eq!(turns.state().current_marker(), Marker::O);
/// assert_eq!(turns.state().status(), GameStatus::InProgress);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TurnController {
    state: GameState,
}

impl TurnController {
    /// Starts with player 0 (X) to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Handles one pointer press at `(px, py)`.
    ///
    /// While the round is in progress the press is routed to the board with
    /// the active player's marker. A successful placement hands the turn to
    /// the other player and then evaluates the board. Misses and taken cells
    /// change nothing.
    ///
    /// While locked the press only resets the board and the turn order; it is
    /// never also treated as a move.
    #[instrument(
        skip(self, board),
        fields(player = %self.state.current_marker(), status = ?self.state.status)
    )]
    pub fn handle_click(&mut self, board: &mut Board, px: u32, py: u32) -> ClickResult {
        if self.state.is_locked() {
            self.reset(board);
            return ClickResult::Reset;
        }

        let marker = self.state.current_marker();
        let before = cfg!(debug_assertions).then(|| board.clone());

        match board.resolve_click(px, py, marker) {
            MoveOutcome::OutOfCell => {
                debug!("Press ignored: outside every cell");
                ClickResult::OutOfCell
            }
            MoveOutcome::CellTaken(position) => {
                debug!(%position, "Press ignored: cell taken");
                ClickResult::CellTaken(position)
            }
            MoveOutcome::Applied(position) => {
                self.state.current_player_index ^= 1;
                let status = GameStatus::from(board.evaluate_terminal());
                self.state.status = status;

                match status {
                    GameStatus::InProgress => {
                        debug!(%position, next = %self.state.current_marker(), "Move applied");
                    }
                    GameStatus::Won(winner) => info!(%position, %winner, "Round won"),
                    GameStatus::Draw => info!(%position, "Round drawn"),
                }

                if let Some(before) = before {
                    self.check_invariants(&before, board);
                }

                ClickResult::Applied {
                    position,
                    marker,
                    status,
                }
            }
        }
    }

    /// Clears the board and hands the first move back to player 0.
    #[instrument(skip(self, board))]
    pub fn reset(&mut self, board: &mut Board) {
        board.reset_all();
        self.state = GameState::new();
        info!("Round reset");
    }

    fn check_invariants(&self, before: &Board, after: &Board) {
        let mut violations = Vec::new();
        if !MonotonicBoardInvariant::holds(&Step { before, after }) {
            violations.push(InvariantViolation::new(
                MonotonicBoardInvariant::description(),
            ));
        }
        let snapshot = Snapshot {
            board: after,
            state: &self.state,
        };
        if let Err(found) = GameInvariants::check_all(&snapshot) {
            violations.extend(found);
        }
        for violation in &violations {
            warn!(invariant = %violation.description, "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "invariants violated: {violations:?}");
    }
}
