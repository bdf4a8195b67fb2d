//! Find-then-regenerate orchestration.

use crate::error::Result;
use crate::finder::find_alpha_loss_sources;
use crate::options::ExportOptions;
use crate::resize::resize_and_export;
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of one regeneration run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Sources whose variants were rewritten, in processing order
    pub regenerated: Vec<PathBuf>,
}

impl RunReport {
    /// True when no source needed regenerating.
    pub fn is_noop(&self) -> bool {
        self.regenerated.is_empty()
    }
}

/// File name of a source for console output, lossily decoded.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Regenerate variants for every alpha-loss source in `dir`.
///
/// Sources are processed one at a time in finder order. The first error
/// stops the run; later sources are not touched.
pub fn regenerate(dir: &Path, options: &ExportOptions) -> Result<RunReport> {
    regenerate_with(dir, options, |_| {})
}

/// Like [`regenerate`], calling `on_done` after each source is rewritten.
pub fn regenerate_with<F>(dir: &Path, options: &ExportOptions, mut on_done: F) -> Result<RunReport>
where
    F: FnMut(&Path),
{
    let affected = find_alpha_loss_sources(dir, options)?;
    info!(dir = %dir.display(), affected = affected.len(), "Scan complete");

    let mut report = RunReport::default();
    for source in affected {
        resize_and_export(&source, options)?;
        on_done(&source);
        report.regenerated.push(source);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/a/one.png")), "one.png");
        assert_eq!(display_name(Path::new("two.png")), "two.png");
        assert_eq!(display_name(Path::new("/")), "/");
    }

    #[test]
    fn test_report_with_sources_is_not_noop() {
        let report = RunReport {
            regenerated: vec![PathBuf::from("/a/one.png")],
        };
        assert!(!report.is_noop());
    }

    #[test]
    fn test_empty_report_is_noop() {
        assert!(RunReport::default().is_noop());
    }
}
