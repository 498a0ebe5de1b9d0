//! Game configuration: window geometry, marker assets, colours and logging.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "TICTACTOE_CONFIG";

/// Configuration file used when [`CONFIG_ENV_VAR`] is not set.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// 24-bit colour as `[r, g, b]`.
pub type Rgb = [u8; 3];

/// Colours used when drawing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Window background.
    background: Rgb,
    /// Grid lines.
    grid: Rgb,
    /// Status bar text.
    text: Rgb,
    /// X marker glyphs.
    x_marker: Rgb,
    /// O marker glyphs.
    o_marker: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: [250, 250, 250],
            grid: [0, 0, 0],
            text: [0, 0, 0],
            x_marker: [30, 90, 200],
            o_marker: [200, 40, 40],
        }
    }
}

/// Startup configuration for the game.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
pub struct GameConfig {
    /// Width of the square board area, in terminal columns.
    #[serde(default = "default_board_width")]
    board_width: u16,

    /// Height of the board area, in terminal rows.
    #[serde(default = "default_board_height")]
    board_height: u16,

    /// Height of the status bar below the board, in terminal rows.
    #[serde(default = "default_status_height")]
    status_height: u16,

    /// Text-art file for the X marker.
    #[serde(default = "default_x_marker_path")]
    x_marker_path: PathBuf,

    /// Text-art file for the O marker.
    #[serde(default = "default_o_marker_path")]
    o_marker_path: PathBuf,

    /// Longest time a single input poll may block, in milliseconds.
    #[serde(default = "default_poll_timeout_ms")]
    poll_timeout_ms: u64,

    /// File that receives tracing output while the terminal UI is active.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Colours.
    #[serde(default)]
    theme: Theme,
}

fn default_board_width() -> u16 {
    48
}

fn default_board_height() -> u16 {
    24
}

fn default_status_height() -> u16 {
    4
}

fn default_x_marker_path() -> PathBuf {
    PathBuf::from("assets/x_player.txt")
}

fn default_o_marker_path() -> PathBuf {
    PathBuf::from("assets/o_player.txt")
}

fn default_poll_timeout_ms() -> u64 {
    250
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: default_board_width(),
            board_height: default_board_height(),
            status_height: default_status_height(),
            x_marker_path: default_x_marker_path(),
            o_marker_path: default_o_marker_path(),
            poll_timeout_ms: default_poll_timeout_ms(),
            log_file: default_log_file(),
            theme: Theme::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], or [`DEFAULT_CONFIG_FILE`].
    ///
    /// A missing file yields the defaults; an unreadable or invalid file is
    /// an error.
    #[instrument]
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_or_default(&path)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let config = Self::from_file(path)?;
            info!("Config loaded");
            Ok(config)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Total window width in terminal columns.
    pub fn window_width(&self) -> u16 {
        self.board_width
    }

    /// Total window height: board plus status bar.
    pub fn window_height(&self) -> u16 {
        self.board_height.saturating_add(self.status_height)
    }

    /// Size of one board cell: a third of the board in each direction.
    pub fn cell_size(&self) -> (u32, u32) {
        (
            u32::from(self.board_width) / 3,
            u32::from(self.board_height) / 3,
        )
    }

    /// Poll timeout as a [`std::time::Duration`].
    pub fn poll_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.poll_timeout_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width < 3 || self.board_height < 3 {
            return Err(ConfigError::new(format!(
                "Board must be at least 3x3, got {}x{}",
                self.board_width, self.board_height
            )));
        }
        if self.status_height == 0 {
            return Err(ConfigError::new("Status bar height must be at least 1".to_string()));
        }
        if self.poll_timeout_ms == 0 {
            return Err(ConfigError::new("Poll timeout must be at least 1 ms".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
