//! Resize/export pipeline for one source image.

use crate::decode::open_normalized;
use crate::dimensions::{calculate_dimensions, needs_resize};
use crate::encode::encode_variant;
use crate::error::Result;
use crate::options::ExportOptions;
use crate::variant::VariantSet;
use image::imageops::FilterType;
use image::DynamicImage;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Decode, normalize and regenerate every variant of `source`.
///
/// Writes `{stem}-{width}.png` and `{stem}-{width}.webp` next to the source
/// for each configured width, overwriting what is there. The first failure
/// aborts; variants written before it are left in place.
pub fn resize_and_export(source: &Path, options: &ExportOptions) -> Result<()> {
    // Decoder state is dropped before any encoding starts
    let normalized = open_normalized(source)?;
    export_variants(&normalized, source, options)
}

/// Write every variant of an already decoded image.
///
/// `img` should be normalized; WebP export rejects other layouts.
pub fn export_variants(img: &DynamicImage, source: &Path, options: &ExportOptions) -> Result<()> {
    let variants = VariantSet::for_source(source, &options.widths)?;
    let (width, height) = (img.width(), img.height());

    for &target in &options.widths {
        let resized = resize_for_width(img, target);
        debug!(
            source = %source.display(),
            target,
            width = resized.width(),
            height = resized.height(),
            "Exporting variants"
        );

        for variant in variants.at_width(target) {
            let bytes = encode_variant(&resized, variant.format, options)?;
            std::fs::write(&variant.path, &bytes)?;
            debug!(path = %variant.path.display(), bytes = bytes.len(), "Wrote variant");
        }
    }

    debug!(source = %source.display(), width, height, "Variants regenerated");
    Ok(())
}

/// Resize to a target width with Lanczos3, never upscaling.
pub fn resize_for_width(img: &DynamicImage, target_width: u32) -> Cow<'_, DynamicImage> {
    if !needs_resize(img.width(), target_width) {
        return Cow::Borrowed(img);
    }

    let (new_width, new_height) = calculate_dimensions(img.width(), img.height(), target_width);
    Cow::Owned(img.resize_exact(new_width, new_height, FilterType::Lanczos3))
}
