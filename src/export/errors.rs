/// Errors that abort a conversion run.
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors. Per-article write failures are not errors at this level;
/// they are reported through [`crate::convert::WriteFailure`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The export file could not be opened or read.
    #[error("cannot read export file '{}': {source}", path.display())]
    Io {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Exit code mapping for `ConvertError` variants.
impl ConvertError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { .. } => 1,
        }
    }
}
