//! Detection of sources whose WebP variant lost their transparency.

use crate::alpha::alpha_extrema;
use crate::decode::{open_image, open_normalized};
use crate::error::Result;
use crate::options::{ExportOptions, OPAQUE};
use crate::variant::{is_variant_stem, source_stem, variant_path, VariantFormat};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// Whether a source/derivative pair shows alpha loss.
///
/// True only when the source has a pixel below full opacity and the
/// derivative has none.
pub fn is_alpha_loss(source_alpha_min: u8, derivative_alpha_min: u8) -> bool {
    source_alpha_min < OPAQUE && derivative_alpha_min == OPAQUE
}

/// Original PNG sources directly inside `dir`, sorted by file name.
///
/// Files whose stem ends in `-{width}` for a configured width are variants
/// and are skipped. Symlinks are followed, so a linked source counts as a
/// file.
pub fn source_candidates(dir: &Path, widths: &[u32]) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("png") {
            continue;
        }

        let Ok(stem) = source_stem(path) else {
            warn!(path = %path.display(), "Skipping file without a stem");
            continue;
        };
        if is_variant_stem(stem, widths) {
            trace!(path = %path.display(), "Skipping generated variant");
            continue;
        }

        candidates.push(path.to_path_buf());
    }

    Ok(candidates)
}

/// Find sources with real transparency whose check-width WebP is opaque.
///
/// Sources without a check-width WebP have nothing to compare against and
/// are never flagged. Decode errors propagate.
pub fn find_alpha_loss_sources(dir: &Path, options: &ExportOptions) -> Result<Vec<PathBuf>> {
    let mut affected = Vec::new();

    for source in source_candidates(dir, &options.widths)? {
        let derivative = variant_path(&source, options.check_width, VariantFormat::WebP)?;
        if !derivative.is_file() {
            trace!(source = %source.display(), "No check-width WebP, skipping");
            continue;
        }

        let source_alpha = alpha_extrema(&open_normalized(&source)?);
        let derivative_alpha = alpha_extrema(&open_image(&derivative)?);
        let flagged = is_alpha_loss(source_alpha.min(), derivative_alpha.min());

        debug!(
            source = %source.display(),
            ?source_alpha,
            ?derivative_alpha,
            flagged,
            "Inspected source"
        );

        if flagged {
            affected.push(source);
        }
    }

    Ok(affected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_alpha_loss() {
        assert!(is_alpha_loss(120, 255));
        assert!(is_alpha_loss(0, 255));
    }

    #[test]
    fn test_opaque_source_never_flagged() {
        assert!(!is_alpha_loss(255, 255));
        assert!(!is_alpha_loss(255, 0));
    }

    #[test]
    fn test_transparent_derivative_not_flagged() {
        assert!(!is_alpha_loss(120, 254));
        assert!(!is_alpha_loss(40, 40));
    }
}
