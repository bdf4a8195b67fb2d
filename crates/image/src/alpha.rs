//! Alpha channel inspection.

use crate::options::OPAQUE;
use image::{DynamicImage, RgbaImage};
use std::borrow::Cow;

/// Extrema of an image's alpha channel.
///
/// A channel where every pixel shares one value collapses to a single
/// number; otherwise both ends of the range are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaExtrema {
    /// Every pixel has this alpha value
    Uniform(u8),
    /// Smallest and largest alpha values observed
    Range {
        /// Smallest alpha value
        min: u8,
        /// Largest alpha value
        max: u8,
    },
}

impl AlphaExtrema {
    /// Minimum alpha value, whichever shape the extrema took.
    pub fn min(self) -> u8 {
        match self {
            AlphaExtrema::Uniform(value) => value,
            AlphaExtrema::Range { min, .. } => min,
        }
    }
}

/// Check if an image has an alpha channel
pub fn has_alpha_channel(img: &DynamicImage) -> bool {
    img.color().has_alpha()
}

/// Scan the alpha channel for its extrema.
///
/// Images without an alpha band are fully opaque. An image with no pixels
/// has nothing transparent in it either.
pub fn alpha_extrema(img: &DynamicImage) -> AlphaExtrema {
    if !has_alpha_channel(img) {
        return AlphaExtrema::Uniform(OPAQUE);
    }

    let rgba: Cow<'_, RgbaImage> = match img.as_rgba8() {
        Some(buffer) => Cow::Borrowed(buffer),
        None => Cow::Owned(img.to_rgba8()),
    };

    let mut alphas = rgba.pixels().map(|p| p[3]);
    let Some(first) = alphas.next() else {
        return AlphaExtrema::Uniform(OPAQUE);
    };

    let (min, max) = alphas.fold((first, first), |(lo, hi), a| (lo.min(a), hi.max(a)));
    if min == max {
        AlphaExtrema::Uniform(min)
    } else {
        AlphaExtrema::Range { min, max }
    }
}

/// Minimum alpha value across all pixels, in `0..=255`.
///
/// 255 means nothing is even partially transparent.
pub fn alpha_min(img: &DynamicImage) -> u8 {
    alpha_extrema(img).min()
}
