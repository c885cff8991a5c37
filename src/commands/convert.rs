/// Load the export, write every article, then report failed writes.
use std::path::Path;

use tracing::info;

use crate::convert::{Reporter, convert, report};
use crate::export::{ConvertError, load};

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub written: usize,
    pub failed: usize,
}

/// Convert the export at `file` into Markdown files under `out_dir`.
///
/// Failed writes are reported and counted but never fail the run.
///
/// # Errors
///
/// Returns `ConvertError::Io` when `file` cannot be read.
pub fn run(
    file: &Path,
    out_dir: &Path,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary, ConvertError> {
    reporter.loading(file);
    let articles = load(file)?;

    let conversions = convert(&articles, out_dir, reporter);
    let failed = report(&conversions, reporter);

    let summary = RunSummary {
        written: conversions.len() - failed,
        failed,
    };
    info!(written = summary.written, failed = summary.failed, "done");
    Ok(summary)
}
