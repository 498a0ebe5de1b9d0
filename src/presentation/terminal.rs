//! Terminal presentation: crossterm input and ratatui buffer drawing.
//!
//! One terminal cell is one window pixel. The window is anchored at the
//! terminal's top-left corner, so mouse `(column, row)` coordinates are
//! window coordinates as they are.

use super::{Canvas, InputEvent, Presenter};
use crate::assets::MarkerImage;
use crate::config::Rgb;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    buffer::{Buffer, Cell},
    style::Color,
};
use std::io::{self, Stdout};
use std::time::Duration;
use strictly_tictactoe::Rect;
use tracing::{debug, info, instrument, trace, warn};

/// Window title shown by terminals that support it.
pub const WINDOW_TITLE: &str = "Tic Tac Toe";

/// Maps a crossterm event to game input.
///
/// Mouse button presses become pointer presses; `q`, `Esc` and `Ctrl+C`
/// close the window. Everything else is ignored.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(_),
            column,
            row,
            ..
        }) => Some(InputEvent::PointerPress {
            x: u32::from(column),
            y: u32::from(row),
        }),
        Event::Key(key) if key.kind == KeyEventKind::Press && is_close_key(&key) => {
            Some(InputEvent::Close)
        }
        _ => None,
    }
}

fn is_close_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// [`Presenter`] backed by a ratatui terminal and crossterm's event queue.
pub struct TerminalPresenter<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalPresenter<B> {
    /// Wraps an already configured terminal.
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    /// The wrapped terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Unwraps the terminal, e.g. to restore it.
    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }
}

impl<B: Backend> Presenter for TerminalPresenter<B>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    fn poll_events(&mut self, timeout: Duration) -> Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        if !event::poll(timeout)? {
            return Ok(events);
        }
        loop {
            let raw = event::read()?;
            trace!(?raw, "Terminal event");
            events.extend(map_event(raw));
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(events)
    }

    fn draw_frame(&mut self, paint: &mut dyn FnMut(&mut dyn Canvas)) -> Result<()> {
        self.terminal.draw(|frame| {
            let mut canvas = BufferCanvas::new(frame.buffer_mut());
            paint(&mut canvas);
        })?;
        Ok(())
    }
}

/// Switches the terminal into game mode: raw input, alternate screen, mouse
/// capture and the window title.
///
/// If any step after enabling raw mode fails, the terminal is put back
/// before the error is returned.
#[instrument]
pub fn enter() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let terminal = undo_on_error(
        || {
            let mut stdout = io::stdout();
            execute!(
                stdout,
                EnterAlternateScreen,
                EnableMouseCapture,
                SetTitle(WINDOW_TITLE)
            )?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        reset,
    )?;
    info!("Terminal ready");
    Ok(terminal)
}

/// Runs `setup`; if it fails, runs `undo` before handing back the error.
fn undo_on_error<T>(setup: impl FnOnce() -> Result<T>, undo: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|e| {
        warn!(error = %e, "Terminal setup failed, undoing");
        undo();
    })
}

/// Best-effort version of [`restore`] for paths that can't report errors.
pub fn reset() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
}

/// Restores the terminal before the default panic message is printed, so a
/// panic mid-game doesn't leave the shell in raw mode.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        reset();
        previous(info);
    }));
}

/// Undoes [`enter`].
#[instrument(skip(terminal))]
pub fn restore(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    debug!("Terminal restored");
    Ok(())
}

/// [`Canvas`] drawing straight into a ratatui [`Buffer`].
pub struct BufferCanvas<'a> {
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    /// Draws into `buf`.
    pub fn new(buf: &'a mut Buffer) -> Self {
        Self { buf }
    }

    fn cell_at(&mut self, x: u32, y: u32) -> Option<&mut Cell> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        self.buf.cell_mut((x, y))
    }
}

fn color(rgb: Rgb) -> Color {
    let [r, g, b] = rgb;
    Color::Rgb(r, g, b)
}

/// Glyph for a line segment; crossing an orthogonal line yields a junction.
fn line_glyph(existing: &str, dx: i64, dy: i64) -> &'static str {
    let glyph = match (dx, dy) {
        (0, _) => "│",
        (_, 0) => "─",
        _ if dx.signum() == dy.signum() => "╲",
        _ => "╱",
    };
    match (existing, glyph) {
        ("│", "─") | ("─", "│") | ("┼", "─") | ("┼", "│") => "┼",
        _ => glyph,
    }
}

impl Canvas for BufferCanvas<'_> {
    fn fill(&mut self, area: Rect, rgb: Rgb) {
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(cell) = self.cell_at(x, y) {
                    cell.reset();
                    cell.set_symbol(" ").set_bg(color(rgb));
                }
            }
        }
    }

    fn line(&mut self, from: (u32, u32), to: (u32, u32), rgb: Rgb) {
        let (x0, y0) = (i64::from(from.0), i64::from(from.1));
        let (dx, dy) = (i64::from(to.0) - x0, i64::from(to.1) - y0);
        let steps = dx.abs().max(dy.abs());
        for i in 0..=steps {
            let (x, y) = if steps == 0 {
                (x0, y0)
            } else {
                (x0 + dx * i / steps, y0 + dy * i / steps)
            };
            let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
                continue;
            };
            if let Some(cell) = self.cell_at(x, y) {
                let glyph = line_glyph(cell.symbol(), dx, dy);
                cell.set_symbol(glyph).set_fg(color(rgb));
            }
        }
    }

    fn blit(&mut self, image: &MarkerImage, area: Rect, rgb: Rgb) {
        for (row, glyphs) in (area.y..area.bottom()).zip(image.rows()) {
            for (col, &glyph) in (area.x..area.right()).zip(glyphs) {
                if glyph == ' ' {
                    continue;
                }
                if let Some(cell) = self.cell_at(col, row) {
                    cell.set_char(glyph).set_fg(color(rgb));
                }
            }
        }
    }

    fn text(&mut self, x: u32, y: u32, text: &str, rgb: Rgb) {
        for (col, ch) in (x..).zip(text.chars()) {
            if let Some(cell) = self.cell_at(col, y) {
                cell.set_char(ch).set_fg(color(rgb));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton};

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_mouse_press_maps_to_pointer() {
        assert_eq!(
            map_event(mouse(MouseEventKind::Down(MouseButton::Left), 7, 3)),
            Some(InputEvent::PointerPress { x: 7, y: 3 })
        );
        assert_eq!(
            map_event(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)),
            Some(InputEvent::PointerPress { x: 0, y: 0 })
        );
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        assert_eq!(map_event(mouse(MouseEventKind::Up(MouseButton::Left), 7, 3)), None);
        assert_eq!(map_event(mouse(MouseEventKind::Moved, 7, 3)), None);
        assert_eq!(map_event(mouse(MouseEventKind::ScrollDown, 7, 3)), None);
    }

    #[test]
    fn test_close_keys() {
        let press = KeyEventKind::Press;
        assert_eq!(
            map_event(key(KeyCode::Char('q'), KeyModifiers::NONE, press)),
            Some(InputEvent::Close)
        );
        assert_eq!(
            map_event(key(KeyCode::Esc, KeyModifiers::NONE, press)),
            Some(InputEvent::Close)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL, press)),
            Some(InputEvent::Close)
        );
        assert_eq!(map_event(key(KeyCode::Char('c'), KeyModifiers::NONE, press)), None);
        assert_eq!(
            map_event(key(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release)),
            None
        );
        assert_eq!(map_event(Event::Resize(80, 24)), None);
    }

    #[test]
    fn test_failed_setup_is_undone() {
        let mut undone = false;
        let result: Result<()> = undo_on_error(|| Err(anyhow::anyhow!("no tty")), || undone = true);
        assert!(result.is_err());
        assert!(undone);
    }

    #[test]
    fn test_successful_setup_is_kept() {
        let mut undone = false;
        let result = undo_on_error(|| Ok(7), || undone = true);
        assert_eq!(result.unwrap(), 7);
        assert!(!undone);
    }

    #[test]
    fn test_crossing_lines_form_junction() {
        let mut buf = Buffer::empty(ratatui::layout::Rect::new(0, 0, 5, 5));
        let mut canvas = BufferCanvas::new(&mut buf);
        canvas.line((2, 0), (2, 4), [0, 0, 0]);
        canvas.line((0, 2), (4, 2), [0, 0, 0]);
        assert_eq!(buf[(2, 0)].symbol(), "│");
        assert_eq!(buf[(0, 2)].symbol(), "─");
        assert_eq!(buf[(2, 2)].symbol(), "┼");
    }

    #[test]
    fn test_drawing_is_clipped() {
        let mut buf = Buffer::empty(ratatui::layout::Rect::new(0, 0, 3, 1));
        let mut canvas = BufferCanvas::new(&mut buf);
        canvas.text(1, 0, "Draw", [0, 0, 0]);
        canvas.fill(Rect::new(2, 0, 10, 10), [1, 2, 3]);
        assert_eq!(buf[(1, 0)].symbol(), "D");
        assert_eq!(buf[(2, 0)].symbol(), " ");
        assert_eq!(buf[(2, 0)].bg, Color::Rgb(1, 2, 3));
    }
}
