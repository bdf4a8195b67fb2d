//! Fixed export settings.
//!
//! Nothing here is read from a file or the command line. The constants are
//! the whole configuration surface; [`ExportOptions::default`] collects them.

/// Target widths, in emission order.
pub const WIDTHS: [u32; 4] = [640, 960, 1280, 1600];

/// Width whose WebP variant is inspected for alpha loss.
pub const CHECK_WIDTH: u32 = 960;

/// Lossy WebP quality (0-100).
pub const WEBP_QUALITY: f32 = 82.0;

/// libwebp compression effort (0 = fast, 6 = slowest/smallest).
pub const WEBP_METHOD: i32 = 6;

/// Alpha value of a fully opaque pixel.
pub const OPAQUE: u8 = 255;

/// PNG encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngSettings {
    /// Use the strongest deflate level with adaptive row filtering
    pub optimize: bool,
}

impl Default for PngSettings {
    fn default() -> Self {
        Self { optimize: true }
    }
}

/// WebP encoder settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebpSettings {
    /// Lossy quality (0-100)
    pub quality: f32,
    /// Compression effort (0-6)
    pub method: i32,
}

impl Default for WebpSettings {
    fn default() -> Self {
        Self {
            quality: WEBP_QUALITY,
            method: WEBP_METHOD,
        }
    }
}

/// Options for finding and regenerating variants.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Target widths (variants are named after these, even when clamped)
    pub widths: Vec<u32>,
    /// Width of the WebP variant compared against the source
    pub check_width: u32,
    /// PNG output settings
    pub png: PngSettings,
    /// WebP output settings
    pub webp: WebpSettings,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            widths: WIDTHS.to_vec(),
            check_width: CHECK_WIDTH,
            png: PngSettings::default(),
            webp: WebpSettings::default(),
        }
    }
}
