//! Variant naming convention.
//!
//! A variant of `dir/{stem}.png` lives next to it as `dir/{stem}-{width}.{ext}`.
//! The width in the name is the configured target width, even when the
//! pixel width was clamped to a narrower source.

use crate::error::{ImageError, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Output formats written for every target width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantFormat {
    /// Lossless PNG
    Png,
    /// Lossy WebP
    WebP,
}

impl VariantFormat {
    /// Formats in the order they are written.
    pub const ALL: [VariantFormat; 2] = [VariantFormat::Png, VariantFormat::WebP];

    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            VariantFormat::Png => "png",
            VariantFormat::WebP => "webp",
        }
    }
}

/// Stem of a source path. Need not be UTF-8.
pub fn source_stem(source: &Path) -> Result<&OsStr> {
    source
        .file_stem()
        .ok_or_else(|| ImageError::InvalidData(format!("No usable file stem: {}", source.display())))
}

/// Whether a stem names an already generated variant (`...-{width}`).
///
/// Compared on raw bytes, so stems that are not valid UTF-8 still match.
pub fn is_variant_stem(stem: impl AsRef<OsStr>, widths: &[u32]) -> bool {
    let stem = stem.as_ref().as_encoded_bytes();
    widths
        .iter()
        .any(|w| stem.ends_with(format!("-{}", w).as_bytes()))
}

/// Path of one variant of `source`.
pub fn variant_path(source: &Path, width: u32, format: VariantFormat) -> Result<PathBuf> {
    let mut name = OsString::from(source_stem(source)?);
    name.push(format!("-{}.{}", width, format.extension()));
    Ok(source.with_file_name(name))
}

/// One derived file: a source at a target width in one format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Configured target width (used in the filename)
    pub width: u32,
    /// Output format
    pub format: VariantFormat,
    /// Where the variant is written
    pub path: PathBuf,
}

/// Every variant a source owns, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSet {
    variants: Vec<Variant>,
}

impl VariantSet {
    /// Build the set of variants for `source` over `widths`.
    pub fn for_source(source: &Path, widths: &[u32]) -> Result<Self> {
        let mut variants = Vec::with_capacity(widths.len() * VariantFormat::ALL.len());
        for &width in widths {
            for format in VariantFormat::ALL {
                variants.push(Variant {
                    width,
                    format,
                    path: variant_path(source, width, format)?,
                });
            }
        }

        Ok(Self { variants })
    }

    /// Iterate variants in write order.
    pub fn iter(&self) -> impl Iterator<Item = &Variant> {
        self.variants.iter()
    }

    /// Variants for one target width.
    pub fn at_width(&self, width: u32) -> impl Iterator<Item = &Variant> {
        self.variants.iter().filter(move |v| v.width == width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::WIDTHS;

    #[test]
    fn test_variant_path() {
        let src = Path::new("/assets/hero.png");
        assert_eq!(
            variant_path(src, 960, VariantFormat::WebP).unwrap(),
            PathBuf::from("/assets/hero-960.webp")
        );
        assert_eq!(
            variant_path(src, 640, VariantFormat::Png).unwrap(),
            PathBuf::from("/assets/hero-640.png")
        );
    }

    #[test]
    fn test_is_variant_stem() {
        assert!(is_variant_stem("hero-640", &WIDTHS));
        assert!(is_variant_stem("hero-1600", &WIDTHS));
        assert!(!is_variant_stem("hero", &WIDTHS));
        assert!(!is_variant_stem("hero-800", &WIDTHS));
        assert!(!is_variant_stem("hero1600", &WIDTHS));
        assert!(!is_variant_stem("mcp-1", &WIDTHS));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_stem() {
        use std::os::unix::ffi::OsStrExt;

        let variant = OsStr::from_bytes(b"caf\xe9-960");
        assert!(is_variant_stem(variant, &WIDTHS));
        assert!(!is_variant_stem(OsStr::from_bytes(b"caf\xe9"), &WIDTHS));

        let src = Path::new("/assets").join(OsStr::from_bytes(b"caf\xe9.png"));
        assert_eq!(
            variant_path(&src, 960, VariantFormat::WebP).unwrap(),
            Path::new("/assets").join(OsStr::from_bytes(b"caf\xe9-960.webp"))
        );
    }

    #[test]
    fn test_variant_set_order() {
        let set = VariantSet::for_source(Path::new("dir/src.png"), &WIDTHS).unwrap();
        assert_eq!(set.iter().count(), 8);

        let names: Vec<_> = set
            .iter()
            .map(|v| v.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "src-640.png",
                "src-640.webp",
                "src-960.png",
                "src-960.webp",
                "src-1280.png",
                "src-1280.webp",
                "src-1600.png",
                "src-1600.webp",
            ]
        );
        assert_eq!(set.at_width(960).count(), 2);
    }

    #[test]
    fn test_extensions() {
        assert_eq!(VariantFormat::Png.extension(), "png");
        assert_eq!(VariantFormat::WebP.extension(), "webp");
    }
}
