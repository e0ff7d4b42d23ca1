//! High-level, ergonomic library API: convert single files in place, or run
//! a whole path list with per-file outcome tallying. Prefer these entrypoints
//! over the low-level `core` and `io` modules when embedding iconfix.
use std::path::Path;

use tracing::debug;

use crate::core::convert::convert_to_rgba_png;
use crate::error::{Error, Result};

/// What happened to a single path during a conversion run.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was decoded and overwritten as an RGBA PNG.
    Converted,
    /// The path does not exist; nothing was touched.
    SkippedMissing,
    /// Decode, conversion, or save failed; the run continues.
    Failed(Error),
}

/// Batch conversion report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Convert the file at `path` to an RGBA PNG in place.
///
/// Unlike [`convert_path`], this assumes the file exists and propagates
/// any failure to the caller.
pub fn convert_file_in_place(path: &Path) -> Result<()> {
    convert_to_rgba_png(path)
}

/// Convert one path, mapping the result to a [`FileOutcome`].
///
/// A missing path is reported as [`FileOutcome::SkippedMissing`] without
/// creating the file; errors are captured rather than propagated so a
/// caller iterating a list can always reach the next path.
pub fn convert_path(path: &Path) -> FileOutcome {
    if !path.exists() {
        debug!("convert_path: {} does not exist, skipping", path.display());
        return FileOutcome::SkippedMissing;
    }

    match convert_file_in_place(path) {
        Ok(()) => FileOutcome::Converted,
        Err(e) => FileOutcome::Failed(e),
    }
}

/// Convert every path in `paths` in order, tallying outcomes.
/// A failure on one path never aborts the rest of the list.
pub fn convert_all_in_place<P: AsRef<Path>>(paths: &[P]) -> BatchReport {
    let mut report = BatchReport::default();

    for path in paths {
        match convert_path(path.as_ref()) {
            FileOutcome::Converted => report.converted += 1,
            FileOutcome::SkippedMissing => report.skipped += 1,
            FileOutcome::Failed(_) => report.failed += 1,
        }
    }

    report
}
