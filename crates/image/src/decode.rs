//! Image decoding.

use crate::error::Result;
use crate::mode::normalize_mode;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Decode an image, choosing the decoder from the file's content.
///
/// The extension is only a fallback when the magic bytes are not
/// recognised, so a `.png` holding WebP data still decodes.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?)
}

/// Decode and normalize to RGB or RGBA.
pub fn open_normalized(path: &Path) -> Result<DynamicImage> {
    open_image(path).map(normalize_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImageError;
    use image::{ColorType, Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn test_content_wins_over_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mislabeled.webp");
        RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 90]))
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();

        let img = open_normalized(&path).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
        assert_eq!(img.color(), ColorType::Rgba8);
    }

    #[test]
    fn test_garbage_is_a_processing_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image at all").unwrap();

        assert!(matches!(open_image(&path), Err(ImageError::ProcessingError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            open_image(&dir.path().join("nope.png")),
            Err(ImageError::IoError(_))
        ));
    }
}
