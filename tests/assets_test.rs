//! Tests for marker asset loading.

use std::fs;
use std::path::Path;
use strictly_tictactoe::Marker;
use tictactoe::{MarkerImage, MarkerImages};

#[test]
fn test_missing_asset_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x_player.txt");
    let err = MarkerImage::load(&path).unwrap_err();
    assert_eq!(err.path, path.display().to_string());
    assert!(err.message.starts_with("Failed to read"), "{}", err);
}

#[test]
fn test_blank_asset_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.txt");
    fs::write(&path, "   \n\n  \n").unwrap();
    let err = MarkerImage::load(&path).unwrap_err();
    assert_eq!(err.message, "No visible glyphs");
}

#[test]
fn test_either_missing_asset_fails_pair() {
    let dir = tempfile::tempdir().unwrap();
    let x = dir.path().join("x.txt");
    fs::write(&x, "\\/\n/\\\n").unwrap();
    let o = dir.path().join("o.txt");

    assert!(MarkerImages::load(&x, &o, 16, 8).is_err());
    assert!(MarkerImages::load(&o, &x, 16, 8).is_err());

    fs::write(&o, "()\n").unwrap();
    assert!(MarkerImages::load(&x, &o, 16, 8).is_ok());
}

#[test]
fn test_from_text_pads_rows() {
    let image = MarkerImage::from_text("ab\nc\n\n").unwrap();
    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 2);
    assert_eq!(image.glyph(1, 1), Some(' '));
    assert_eq!(image.glyph(2, 0), None);
}

#[test]
fn test_scaling_nearest_neighbour() {
    let image = MarkerImage::from_text("ab\ncd").unwrap();
    let scaled = image.scaled(4, 4);
    let rows: Vec<String> = scaled.rows().map(|row| row.iter().collect()).collect();
    assert_eq!(rows, vec!["aabb", "aabb", "ccdd", "ccdd"]);

    let shrunk = scaled.scaled(2, 1);
    assert_eq!(shrunk.width(), 2);
    assert_eq!(shrunk.height(), 1);
    assert_eq!(shrunk.glyph(0, 0), Some('a'));
    assert_eq!(shrunk.glyph(1, 0), Some('b'));
}

#[test]
fn test_bundled_assets_fit_cell() {
    let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
    let markers = MarkerImages::load(
        &assets.join("x_player.txt"),
        &assets.join("o_player.txt"),
        16,
        8,
    )
    .unwrap();
    for marker in [Marker::X, Marker::O] {
        let image = markers.get(marker);
        assert_eq!(image.width(), 16);
        assert_eq!(image.height(), 8);
        assert!(image.rows().flatten().any(|&glyph| glyph == '█'));
    }
}
