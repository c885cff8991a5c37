/// Write one Markdown file per article, collecting per-article outcomes.
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::markdown::{file_name, render};
use super::report::Reporter;
use crate::types::Article;

/// A Markdown file that could not be written.
#[derive(Debug, Error)]
#[error("convert failed! {title} {source}")]
pub struct WriteFailure {
    /// Title of the article whose write failed.
    pub title: String,
    /// Path the write was attempted at.
    pub path: PathBuf,
    /// Underlying I/O failure.
    #[source]
    pub source: std::io::Error,
}

/// Outcome of converting one article.
#[derive(Debug)]
pub enum Conversion {
    /// The file was created or truncated and written.
    Written {
        /// Title of the written article.
        title: String,
        /// Path of the written file.
        path: PathBuf,
    },
    /// The write failed; the loop moved on.
    Failed(WriteFailure),
}

impl Conversion {
    /// The failure, if this conversion failed.
    #[must_use]
    pub fn failure(&self) -> Option<&WriteFailure> {
        match self {
            Self::Written { .. } => None,
            Self::Failed(failure) => Some(failure),
        }
    }
}

/// Convert every article in order, writing `<title>.md` under `out_dir`.
///
/// Progress goes to `reporter` before each write. A failed write does not
/// stop the loop; it is returned as `Conversion::Failed` in the same
/// position as its article.
pub fn convert(
    articles: &[Article],
    out_dir: &Path,
    reporter: &mut dyn Reporter,
) -> Vec<Conversion> {
    articles
        .iter()
        .map(|article| {
            reporter.converting(&article.title);
            write_article(article, out_dir)
        })
        .collect()
}

fn write_article(article: &Article, out_dir: &Path) -> Conversion {
    let path = out_dir.join(file_name(article));
    match std::fs::write(&path, render(article)) {
        Ok(()) => {
            debug!(path = %path.display(), "wrote article");
            Conversion::Written {
                title: article.title.clone(),
                path,
            }
        }
        Err(source) => {
            debug!(path = %path.display(), error = %source, "write failed");
            Conversion::Failed(WriteFailure {
                title: article.title.clone(),
                path,
                source,
            })
        }
    }
}
