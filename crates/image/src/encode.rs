//! PNG and WebP encoders for variants.
//!
//! PNG goes through the image crate. WebP goes through libwebp (`webp`
//! crate) because the image crate only writes lossless WebP.

use crate::error::{ImageError, Result};
use crate::options::{ExportOptions, PngSettings, WebpSettings};
use crate::variant::VariantFormat;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{DynamicImage, ImageEncoder};

/// Encode an image as lossless PNG.
pub fn encode_png(img: &DynamicImage, settings: &PngSettings) -> Result<Vec<u8>> {
    let compression = if settings.optimize {
        CompressionType::Best
    } else {
        CompressionType::Default
    };

    let mut buffer = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut buffer, compression, PngFilter::Adaptive);
    encoder.write_image(img.as_bytes(), img.width(), img.height(), img.color().into())?;
    Ok(buffer)
}

/// Encode a normalized (RGB or RGBA) image as lossy WebP.
///
/// RGBA input keeps its alpha plane; RGB input is written without one.
pub fn encode_webp(img: &DynamicImage, settings: &WebpSettings) -> Result<Vec<u8>> {
    let encoder = match img {
        DynamicImage::ImageRgba8(buf) => webp::Encoder::from_rgba(buf.as_raw(), buf.width(), buf.height()),
        DynamicImage::ImageRgb8(buf) => webp::Encoder::from_rgb(buf.as_raw(), buf.width(), buf.height()),
        other => {
            return Err(ImageError::InvalidData(format!(
                "WebP export needs RGB or RGBA input, got {:?}",
                other.color()
            )))
        }
    };

    let mut config = webp::WebPConfig::new()
        .map_err(|_| ImageError::WebpEncode("libwebp config init failed".to_string()))?;
    config.lossless = 0;
    config.quality = settings.quality;
    config.method = settings.method;

    let memory = encoder
        .encode_advanced(&config)
        .map_err(|e| ImageError::WebpEncode(format!("{:?}", e)))?;
    Ok(memory.to_vec())
}

/// Encode an image in the given variant format.
pub fn encode_variant(img: &DynamicImage, format: VariantFormat, options: &ExportOptions) -> Result<Vec<u8>> {
    match format {
        VariantFormat::Png => encode_png(img, &options.png),
        VariantFormat::WebP => encode_webp(img, &options.webp),
    }
}
