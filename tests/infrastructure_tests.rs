//! Infrastructure layer unit tests
//!
//! Tests for the image header inspector, the stat reader and the local file
//! source against real files.

use fsniff::core::{AnalysisError, ExtractionError};
use fsniff::domain::entities::ColorSpace;
use fsniff::domain::repositories::{FileSource, FileStatReader, ImageInspector};
use fsniff::infrastructure::extractors::{FsStatReader, ImageHeaderInspector};
use fsniff::infrastructure::persistence::LocalFileSource;
use image::{GrayAlphaImage, GrayImage, RgbImage, RgbaImage};
use rstest::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn write_file(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, data).unwrap();
    path
}

// ============================================================================
// ImageHeaderInspector Tests
// ============================================================================

#[rstest]
fn test_inspect_rgb_png(temp_dir: TempDir) {
    let path = temp_dir.path().join("rgb.png");
    RgbImage::new(32, 16).save(&path).unwrap();

    let metadata = ImageHeaderInspector::new().inspect(&path).unwrap();
    assert_eq!(metadata.width, 32);
    assert_eq!(metadata.height, 16);
    assert_eq!(metadata.channels, 3);
    assert_eq!(metadata.color_space, ColorSpace::Rgb);
}

#[rstest]
fn test_inspect_rgba_png(temp_dir: TempDir) {
    let path = temp_dir.path().join("rgba.png");
    RgbaImage::new(7, 5).save(&path).unwrap();

    let metadata = ImageHeaderInspector::new().inspect(&path).unwrap();
    assert_eq!((metadata.width, metadata.height), (7, 5));
    assert_eq!(metadata.color_space, ColorSpace::Rgba);
}

#[rstest]
fn test_inspect_grayscale_variants(temp_dir: TempDir) {
    let gray = temp_dir.path().join("gray.png");
    GrayImage::new(4, 4).save(&gray).unwrap();
    let gray_alpha = temp_dir.path().join("gray_alpha.png");
    GrayAlphaImage::new(4, 4).save(&gray_alpha).unwrap();

    let inspector = ImageHeaderInspector::new();
    assert_eq!(
        inspector.inspect(&gray).unwrap().color_space,
        ColorSpace::Grayscale
    );
    assert_eq!(
        inspector.inspect(&gray_alpha).unwrap().color_space,
        ColorSpace::GrayscaleAlpha
    );
}

#[rstest]
fn test_inspect_jpeg(temp_dir: TempDir) {
    let path = temp_dir.path().join("photo.jpg");
    RgbImage::new(64, 48).save(&path).unwrap();

    let metadata = ImageHeaderInspector::new().inspect(&path).unwrap();
    assert_eq!((metadata.width, metadata.height), (64, 48));
    assert_eq!(metadata.channels, 3);
}

#[rstest]
fn test_inspect_ignores_extension(temp_dir: TempDir) {
    let png = temp_dir.path().join("image.png");
    RgbImage::new(10, 20).save(&png).unwrap();
    let renamed = temp_dir.path().join("image.dat");
    fs::rename(&png, &renamed).unwrap();

    let metadata = ImageHeaderInspector::new().inspect(&renamed).unwrap();
    assert_eq!((metadata.width, metadata.height), (10, 20));
}

#[rstest]
fn test_inspect_corrupt_header(temp_dir: TempDir) {
    let path = write_file(&temp_dir, "broken.png", &[0x89, 0x50, 0x4E, 0x47, 0x00, 0x00]);

    let err = ImageHeaderInspector::new().inspect(&path).unwrap_err();
    assert!(matches!(err, ExtractionError::ImageDecode { .. }));
}

#[rstest]
fn test_inspect_missing_file(temp_dir: TempDir) {
    let path = temp_dir.path().join("missing.jpg");
    let err = ImageHeaderInspector::new().inspect(&path).unwrap_err();
    assert!(matches!(err, ExtractionError::ImageDecode { .. }));
}

// ============================================================================
// FsStatReader Tests
// ============================================================================

#[rstest]
fn test_stat_reports_size_and_modified(temp_dir: TempDir) {
    let path = write_file(&temp_dir, "doc.pdf", b"%PDF-1.4\n%%EOF\n");

    let stats = FsStatReader::new().stat(&path).unwrap();
    assert_eq!(stats.size, 15);
    assert!(stats.modified.is_some());
}

#[rstest]
fn test_stat_missing_file(temp_dir: TempDir) {
    let path = temp_dir.path().join("gone.mp3");
    let err = FsStatReader::new().stat(&path).unwrap_err();
    match err {
        ExtractionError::Stat { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected stat error, got {:?}", other),
    }
}

// ============================================================================
// LocalFileSource Tests
// ============================================================================

#[rstest]
fn test_read_whole_file(temp_dir: TempDir) {
    let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let path = write_file(&temp_dir, "blob.bin", &data);

    assert_eq!(LocalFileSource::new().read(&path).unwrap(), data);
}

#[rstest]
fn test_read_empty_file(temp_dir: TempDir) {
    let path = write_file(&temp_dir, "empty", &[]);
    assert!(LocalFileSource::new().read(&path).unwrap().is_empty());
}

#[rstest]
fn test_read_missing_file(temp_dir: TempDir) {
    let path = temp_dir.path().join("nope");
    let err = LocalFileSource::new().read(&path).unwrap_err();
    assert!(matches!(err, AnalysisError::Read { .. }));
    assert!(err.to_string().starts_with("Error opening file"));
}
