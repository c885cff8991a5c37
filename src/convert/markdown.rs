/// Markdown document synthesis.
use crate::types::Article;

/// Render an article as `# <title>\n<raw_body>`.
///
/// The body is copied verbatim: no escaping, no line-ending normalization,
/// no trailing newline added.
#[must_use]
pub fn render(article: &Article) -> String {
    format!("# {}\n{}", article.title, article.raw_body)
}

/// Output file name for an article: `<title>.md`.
///
/// The title is not sanitized. Separators in it address subdirectories.
#[must_use]
pub fn file_name(article: &Article) -> String {
    format!("{}.md", article.title)
}
