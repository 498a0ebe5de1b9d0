//! Presentation layer seam.
//!
//! The game loop only talks to a [`Presenter`]: it asks for input events and
//! hands over a paint callback that issues [`Canvas`] primitives. The
//! terminal implementation lives in [`terminal`]; tests substitute their own.

pub mod terminal;

use crate::assets::MarkerImage;
use crate::config::Rgb;
use std::time::Duration;
use strictly_tictactoe::Rect;

pub use terminal::{BufferCanvas, TerminalPresenter, map_event};

/// Input the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer pressed at window coordinates.
    PointerPress {
        /// Column.
        x: u32,
        /// Row.
        y: u32,
    },
    /// The user asked to close the window.
    Close,
}

/// Drawing primitives for one frame.
///
/// Coordinates are window pixels (terminal cells); anything outside the
/// drawable area is clipped.
pub trait Canvas {
    /// Fills `area` with a solid colour.
    fn fill(&mut self, area: Rect, color: Rgb);

    /// Draws a one pixel wide line between two points, both inclusive.
    fn line(&mut self, from: (u32, u32), to: (u32, u32), color: Rgb);

    /// Blits a pre-scaled image with its top-left corner at `area`'s,
    /// clipped to `area`. Blank glyphs are transparent.
    fn blit(&mut self, image: &MarkerImage, area: Rect, color: Rgb);

    /// Draws a single line of text starting at `(x, y)`.
    fn text(&mut self, x: u32, y: u32, text: &str, color: Rgb);
}

/// Window, input queue and frame presentation.
pub trait Presenter {
    /// Waits up to `timeout` for input, then returns every queued event.
    ///
    /// Returns an empty list when nothing arrived in time.
    fn poll_events(&mut self, timeout: Duration) -> anyhow::Result<Vec<InputEvent>>;

    /// Paints one frame and presents it.
    fn draw_frame(&mut self, paint: &mut dyn FnMut(&mut dyn Canvas)) -> anyhow::Result<()>;
}
