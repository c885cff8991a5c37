/// Reporting seam between the conversion core and the console.
use std::path::Path;

use tracing::debug;

use super::write::{Conversion, WriteFailure};

/// Receives progress and failures from a conversion run.
pub trait Reporter {
    /// The export path about to be loaded.
    fn loading(&mut self, path: &Path);
    /// An article about to be written.
    fn converting(&mut self, title: &str);
    /// A write that failed.
    fn failed(&mut self, failure: &WriteFailure);
}

/// Final reporting pass: hand every failed write to `reporter`, in order.
///
/// Returns the number of failures.
pub fn report(conversions: &[Conversion], reporter: &mut dyn Reporter) -> usize {
    let mut failed = 0;
    for failure in conversions.iter().filter_map(Conversion::failure) {
        reporter.failed(failure);
        failed += 1;
    }
    debug!(
        written = conversions.len() - failed,
        failed, "conversion finished"
    );
    failed
}

/// Reporter that keeps everything in memory, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingReporter {
    pub loaded: Vec<std::path::PathBuf>,
    pub progress: Vec<String>,
    pub failures: Vec<String>,
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn loading(&mut self, path: &Path) {
        self.loaded.push(path.to_path_buf());
    }

    fn converting(&mut self, title: &str) {
        self.progress.push(title.to_owned());
    }

    fn failed(&mut self, failure: &WriteFailure) {
        self.failures.push(failure.title.clone());
    }
}
