//! Variant dimension calculation.
//!
//! Variants are never wider than their source: a target wider than the
//! source is clamped to the source width, and the height follows the
//! source aspect ratio with truncating integer division.

/// Calculate variant dimensions for one target width.
///
/// # Arguments
/// * `current_width` - Source width
/// * `current_height` - Source height
/// * `target_width` - Configured target width
///
/// # Returns
/// (final_width, final_height), never larger than the source
///
/// # Example
/// ```
/// use respimg_image::calculate_dimensions;
///
/// assert_eq!(calculate_dimensions(2000, 1000, 640), (640, 320));
/// // No upscaling
/// assert_eq!(calculate_dimensions(400, 300, 640), (400, 300));
/// ```
pub fn calculate_dimensions(current_width: u32, current_height: u32, target_width: u32) -> (u32, u32) {
    let final_width = target_width.min(current_width);
    if final_width == current_width || current_width == 0 {
        return (current_width, current_height);
    }

    let scaled = u64::from(current_height) * u64::from(final_width) / u64::from(current_width);
    // scaled <= current_height, so it fits in u32
    let final_height = scaled as u32;

    (final_width, final_height.max(1))
}

/// Whether producing a variant at this target needs resampling at all.
pub fn needs_resize(current_width: u32, target_width: u32) -> bool {
    target_width < current_width
}
