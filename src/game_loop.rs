//! Poll, dispatch, redraw.

use crate::assets::MarkerImages;
use crate::config::{GameConfig, Theme};
use crate::presentation::{Canvas, InputEvent, Presenter};
use crate::status::StatusBar;
use anyhow::Result;
use std::time::Duration;
use strictly_tictactoe::{Board, ClickResult, Marker, Rect, TurnController};
use tracing::{debug, info, instrument};

/// Whether the loop keeps running after a batch of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Redraw and poll again.
    Continue,
    /// A close event arrived.
    Quit,
}

/// Owns the whole game: board, turns, status bar, marker images and the
/// presenter they are shown on.
pub struct GameLoop<P: Presenter> {
    presenter: P,
    board: Board,
    turns: TurnController,
    status: StatusBar,
    markers: MarkerImages,
    theme: Theme,
    window: Rect,
    poll_timeout: Duration,
}

impl<P: Presenter> GameLoop<P> {
    /// Builds the loop and lays out the board from `config`.
    ///
    /// `markers` must already be scaled to [`GameConfig::cell_size`].
    #[instrument(skip_all, fields(
        board_width = config.board_width(),
        board_height = config.board_height(),
    ))]
    pub fn new(presenter: P, markers: MarkerImages, config: &GameConfig) -> Self {
        let board_height = u32::from(*config.board_height());
        let board = Board::new(u32::from(*config.board_width()), board_height);
        let window = Rect::new(
            0,
            0,
            u32::from(config.window_width()),
            u32::from(config.window_height()),
        );
        let mut status = StatusBar::new(Rect::new(
            0,
            board_height,
            window.w,
            u32::from(*config.status_height()),
        ));
        let turns = TurnController::new();
        status.player_turn(turns.state().current_marker());

        Self {
            presenter,
            board,
            turns,
            status,
            markers,
            theme: *config.theme(),
            window,
            poll_timeout: config.poll_timeout(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Turn and phase state.
    pub fn turns(&self) -> &TurnController {
        &self.turns
    }

    /// The status bar.
    pub fn status(&self) -> &StatusBar {
        &self.status
    }

    /// The presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Consumes the loop, returning the presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Runs until a close event arrives.
    ///
    /// Every iteration drains the pending input, dispatches it and redraws
    /// once.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!("Game loop started");
        loop {
            let events = self.presenter.poll_events(self.poll_timeout)?;
            if self.handle_events(events) == LoopControl::Quit {
                info!("Close requested");
                return Ok(());
            }
            self.redraw()?;
        }
    }

    /// Dispatches a batch of events in order.
    ///
    /// A close event stops processing immediately; events after it are
    /// dropped.
    pub fn handle_events(&mut self, events: impl IntoIterator<Item = InputEvent>) -> LoopControl {
        for event in events {
            match event {
                InputEvent::Close => return LoopControl::Quit,
                InputEvent::PointerPress { x, y } => {
                    self.dispatch_press(x, y);
                }
            }
        }
        LoopControl::Continue
    }

    /// Routes one pointer press through the turn controller and updates the
    /// status bar to match.
    #[instrument(skip(self))]
    pub fn dispatch_press(&mut self, x: u32, y: u32) -> ClickResult {
        let result = self.turns.handle_click(&mut self.board, x, y);
        match result {
            ClickResult::Applied { status, .. } => {
                self.status.show(status, self.turns.state().current_marker());
            }
            ClickResult::Reset => self.status.player_turn(self.turns.state().current_marker()),
            ClickResult::OutOfCell | ClickResult::CellTaken(_) => {}
        }
        debug!(?result, status = self.status.text(), "Press dispatched");
        result
    }

    /// Paints and presents one frame.
    pub fn redraw(&mut self) -> Result<()> {
        let Self {
            presenter,
            board,
            status,
            markers,
            theme,
            window,
            ..
        } = self;
        presenter.draw_frame(&mut |canvas| paint(canvas, *window, board, markers, status, theme))
    }
}

/// Background, grid lines, markers, then status text.
fn paint(
    canvas: &mut dyn Canvas,
    window: Rect,
    board: &Board,
    markers: &MarkerImages,
    status: &StatusBar,
    theme: &Theme,
) {
    canvas.fill(window, *theme.background());

    let area = board.area();
    if area.w > 0 && area.h > 0 {
        for i in 1..3 {
            let x = board.cell_width() * i;
            canvas.line((x, area.y), (x, area.bottom() - 1), *theme.grid());
            let y = board.cell_height() * i;
            canvas.line((area.x, y), (area.right() - 1, y), *theme.grid());
        }
    }

    for (_, cell, marker) in board.occupied() {
        let color = match marker {
            Marker::X => *theme.x_marker(),
            Marker::O => *theme.o_marker(),
        };
        canvas.blit(markers.get(marker), cell.bounds(), color);
    }

    status.draw(canvas, *theme.text());
}
