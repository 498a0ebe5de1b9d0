//! Status bar below the board.

use crate::config::Rgb;
use crate::presentation::Canvas;
use strictly_tictactoe::{GameStatus, Marker, Rect};
use tracing::{debug, instrument};

/// Shows whose turn it is, who won, or that the round is drawn.
///
/// The game loop pushes state into it; it only keeps the text and where the
/// text sits so that it ends up centred in the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBar {
    bounds: Rect,
    text: String,
    text_pos: (u32, u32),
}

impl StatusBar {
    /// Creates an empty status bar covering `bounds`.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            text: String::new(),
            text_pos: (bounds.x, bounds.y),
        }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Top-left corner of the text.
    pub fn text_pos(&self) -> (u32, u32) {
        self.text_pos
    }

    /// Area covered by the bar.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// "X Turn" / "O Turn".
    pub fn player_turn(&mut self, marker: Marker) {
        self.set(format!("{} Turn", marker));
    }

    /// "X Win" / "O Win".
    pub fn player_win(&mut self, marker: Marker) {
        self.set(format!("{} Win", marker));
    }

    /// "Draw".
    pub fn print_draw(&mut self) {
        self.set("Draw".to_string());
    }

    /// Shows the message matching a round status and the player to move.
    pub fn show(&mut self, status: GameStatus, to_move: Marker) {
        match status {
            GameStatus::InProgress => self.player_turn(to_move),
            GameStatus::Won(winner) => self.player_win(winner),
            GameStatus::Draw => self.print_draw(),
        }
    }

    #[instrument(skip(self), fields(bounds = ?self.bounds))]
    fn set(&mut self, text: String) {
        let text_width = text.chars().count() as u32;
        // x + w/2 - text_w/2 and y + h/2 - 1/2, floored, in integers.
        let x = (2 * self.bounds.x + self.bounds.w).saturating_sub(text_width) / 2;
        let y = (2 * self.bounds.y + self.bounds.h).saturating_sub(1) / 2;
        self.text_pos = (x.max(self.bounds.x), y.max(self.bounds.y));
        debug!(pos = ?self.text_pos, "Status updated");
        self.text = text;
    }

    /// Renders the text.
    pub fn draw(&self, canvas: &mut dyn Canvas, color: Rgb) {
        if !self.text.is_empty() {
            let (x, y) = self.text_pos;
            canvas.text(x, y, &self.text, color);
        }
    }
}
