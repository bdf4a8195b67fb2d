//! Pixel mode normalization.

use crate::alpha::has_alpha_channel;
use image::DynamicImage;

/// Convert an image to 8-bit RGBA if it carries an alpha band, otherwise RGB.
///
/// Palette PNGs never reach this point as indexed data: the decoder expands
/// the palette and turns a `tRNS` entry into an alpha band, so a palette
/// with a transparent entry normalizes to RGBA and one without to RGB.
pub fn normalize_mode(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img,
        other if has_alpha_channel(&other) => DynamicImage::ImageRgba8(other.to_rgba8()),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}
