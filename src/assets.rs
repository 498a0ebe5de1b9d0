//! Marker images: text-art assets loaded once at startup and pre-scaled to
//! one cell.

use derive_more::{Display, Error};
use std::path::Path;
use strictly_tictactoe::Marker;
use tracing::{debug, info, instrument};

/// Failure to load a marker asset. Fatal at startup.
#[derive(Debug, Clone, Display, Error)]
#[display("Asset error ({}): {} at {}:{}", path, message, file, line)]
pub struct AssetError {
    /// Asset path as given in the configuration.
    pub path: String,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AssetError {
    /// Creates a new asset error with caller location tracking.
    #[track_caller]
    pub fn new(path: &Path, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            path: path.display().to_string(),
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A rectangular grid of glyphs; spaces are transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerImage {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl MarkerImage {
    /// Builds an image from text, one row per line.
    ///
    /// Short lines are padded with spaces; trailing blank lines are dropped.
    /// Returns `None` when the text has no visible glyph.
    pub fn from_text(text: &str) -> Option<Self> {
        let mut rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end().chars().collect())
            .collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        if !rows.iter().flatten().any(|ch| !ch.is_whitespace()) {
            return None;
        }

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, ' ');
        }
        Some(Self { rows, width })
    }

    /// Reads an image from a text-art file.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError`] if the file can't be read or has no visible glyph.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| AssetError::new(path, format!("Failed to read: {}", e)))?;
        let image =
            Self::from_text(&text).ok_or_else(|| AssetError::new(path, "No visible glyphs"))?;
        debug!(width = image.width(), height = image.height(), "Asset loaded");
        Ok(image)
    }

    /// Width in glyphs.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in glyphs.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Glyph at `(x, y)`, if inside the image.
    pub fn glyph(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Rows of glyphs, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Resamples the image to `width` x `height` glyphs (nearest neighbour).
    #[instrument(skip(self), fields(from_width = self.width, from_height = self.height()))]
    pub fn scaled(&self, width: usize, height: usize) -> Self {
        let rows = (0..height)
            .map(|y| {
                let src_y = y * self.height() / height.max(1);
                (0..width)
                    .map(|x| {
                        let src_x = x * self.width / width.max(1);
                        self.glyph(src_x, src_y).unwrap_or(' ')
                    })
                    .collect()
            })
            .collect();
        Self { rows, width }
    }
}

/// The two marker images, already scaled to one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerImages {
    x: MarkerImage,
    o: MarkerImage,
}

impl MarkerImages {
    /// Pairs two images scaled to a `cell_width` x `cell_height` cell.
    pub fn new(x: &MarkerImage, o: &MarkerImage, cell_width: u32, cell_height: u32) -> Self {
        let (w, h) = (cell_width as usize, cell_height as usize);
        Self {
            x: x.scaled(w, h),
            o: o.scaled(w, h),
        }
    }

    /// Loads both marker assets and scales them to one cell.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError`] if either asset is missing or empty.
    #[instrument(skip(x_path, o_path))]
    pub fn load(
        x_path: &Path,
        o_path: &Path,
        cell_width: u32,
        cell_height: u32,
    ) -> Result<Self, AssetError> {
        let x = MarkerImage::load(x_path)?;
        let o = MarkerImage::load(o_path)?;
        info!("Marker assets loaded");
        Ok(Self::new(&x, &o, cell_width, cell_height))
    }

    /// Image for a marker.
    pub fn get(&self, marker: Marker) -> &MarkerImage {
        match marker {
            Marker::X => &self.x,
            Marker::O => &self.o,
        }
    }
}
