//! respimg-regen: regenerate responsive variants for sources whose WebP
//! variant lost transparency.
//!
//! Takes no arguments. Scans the example asset directory, rewrites every
//! PNG/WebP width variant of each affected source, and prints one line per
//! source. Logging goes to stderr and is controlled by `RUST_LOG`.

use anyhow::Context;
use owo_colors::{OwoColorize, Stream};
use respimg_image::{display_name, regenerate_with, ExportOptions};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Asset directory, relative to this crate.
const EXAMPLE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../public/img/example");

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let dir = Path::new(EXAMPLE_DIR);
    let options = ExportOptions::default();
    tracing::debug!(dir = %dir.display(), widths = ?options.widths, "Scanning for alpha-loss sources");

    let report = regenerate_with(dir, &options, |source| {
        println!(
            "{} {}",
            "Regenerated:".if_supports_color(Stream::Stdout, |t| t.green()),
            display_name(source)
        );
    })
    .with_context(|| format!("Failed to regenerate variants in {}", dir.display()))?;

    if report.is_noop() {
        println!("No alpha-loss sources detected.");
    }

    Ok(())
}
