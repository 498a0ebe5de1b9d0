//! Two-player tic-tac-toe played with the mouse in a terminal.
//!
//! # Architecture
//!
//! - **Game logic**: [`strictly_tictactoe`] (board, cells, turns, rules)
//! - **Game loop**: polls input, dispatches presses, redraws ([`GameLoop`])
//! - **Presentation**: [`Presenter`]/[`Canvas`] seam with a ratatui +
//!   crossterm implementation ([`TerminalPresenter`])
//! - **Assets**: text-art marker images scaled to one cell ([`MarkerImages`])
//! - **Config**: TOML configuration with defaults ([`GameConfig`])
//!
//! # Example
//!
//! ```no_run
//! use tictactoe::{GameConfig, GameLoop, MarkerImages, TerminalPresenter, terminal};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let (cell_width, cell_height) = config.cell_size();
//! let markers = MarkerImages::load(
//!     config.x_marker_path(),
//!     config.o_marker_path(),
//!     cell_width,
//!     cell_height,
//! )?;
//!
//! let presenter = TerminalPresenter::new(terminal::enter()?);
//! let mut game = GameLoop::new(presenter, markers, &config);
//! let result = game.run();
//! terminal::restore(&mut game.into_presenter().into_terminal())?;
//! result
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod assets;
mod config;
mod game_loop;
pub mod presentation;
mod status;

pub use assets::{AssetError, MarkerImage, MarkerImages};
pub use config::{CONFIG_ENV_VAR, ConfigError, DEFAULT_CONFIG_FILE, GameConfig, Rgb, Theme};
pub use game_loop::{GameLoop, LoopControl};
pub use presentation::{Canvas, InputEvent, Presenter, terminal};
pub use presentation::{BufferCanvas, TerminalPresenter, map_event};
pub use status::StatusBar;
