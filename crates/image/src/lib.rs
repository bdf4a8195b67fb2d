//! Responsive image variant regeneration.
//!
//! This crate provides:
//! - Pixel mode normalization to RGB/RGBA
//! - Alpha channel inspection
//! - The `{stem}-{width}.{ext}` variant naming convention
//! - Lanczos3 resizing with lossless PNG and lossy WebP export
//! - Detection of sources whose WebP variant lost transparency

#![warn(missing_docs)]

mod alpha;
mod decode;
mod dimensions;
mod encode;
mod error;
mod finder;
mod mode;
pub mod options;
mod pipeline;
mod resize;
pub mod variant;

pub use alpha::{alpha_extrema, alpha_min, has_alpha_channel, AlphaExtrema};
pub use decode::{open_image, open_normalized};
pub use dimensions::{calculate_dimensions, needs_resize};
pub use encode::{encode_png, encode_variant, encode_webp};
pub use error::{ImageError, Result};
pub use finder::{find_alpha_loss_sources, is_alpha_loss, source_candidates};
pub use mode::normalize_mode;
pub use options::{ExportOptions, PngSettings, WebpSettings, CHECK_WIDTH, WIDTHS};
pub use pipeline::{display_name, regenerate, regenerate_with, RunReport};
pub use resize::{export_variants, resize_and_export, resize_for_width};
pub use variant::{variant_path, Variant, VariantFormat, VariantSet};
