/// Load the export file into memory and deserialize its articles.
use std::borrow::Cow;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use super::errors::ConvertError;
use crate::types::Article;

/// Read the whole export at `path` and deserialize it.
///
/// # Errors
///
/// Returns `ConvertError::Io` when the file cannot be opened or read.
/// Malformed JSON is not an error: it yields an empty list (see [`parse`]).
pub fn load(path: &Path) -> Result<Vec<Article>, ConvertError> {
    let bytes = std::fs::read(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read export file");

    let articles = parse(&bytes);
    debug!(count = articles.len(), "deserialized articles");
    Ok(articles)
}

/// Deserialize export bytes into articles, one per top-level array element.
///
/// Invalid UTF-8 and unpaired surrogate escapes are replaced with U+FFFD
/// instead of failing the document. Syntax errors and non-array roots
/// produce an empty list. The failure is logged as a warning and otherwise
/// swallowed.
#[must_use]
pub fn parse(bytes: &[u8]) -> Vec<Article> {
    match serde_json::from_str::<Value>(&repair(bytes)) {
        Ok(Value::Array(items)) => items.into_iter().map(Article::from_value).collect(),
        Ok(Value::Null) => Vec::new(),
        Ok(other) => {
            warn!(
                root = json_kind(&other),
                "export root is not an array; no articles loaded"
            );
            Vec::new()
        }
        Err(err) => {
            warn!(error = %err, "export is not valid JSON; no articles loaded");
            Vec::new()
        }
    }
}

/// Decode `bytes` lossily and neutralize lone `\uD800`-`\uDFFF` escapes,
/// which serde_json rejects.
fn repair(bytes: &[u8]) -> Cow<'_, str> {
    let text = String::from_utf8_lossy(bytes);
    if text.contains("\\u") {
        Cow::Owned(replace_lone_surrogates(&text))
    } else {
        text
    }
}

fn replace_lone_surrogates(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match escape_unit(rest) {
            Some(0xD800..=0xDBFF)
                if matches!(escape_unit(&rest[6..]), Some(0xDC00..=0xDFFF)) =>
            {
                out.push_str(&rest[..12]);
                rest = &rest[12..];
            }
            Some(0xD800..=0xDFFF) => {
                out.push_str("\\ufffd");
                rest = &rest[6..];
            }
            _ => {
                // Copy the whole escape so an escaped backslash never opens a new one.
                let len = rest[1..].chars().next().map_or(1, |c| 1 + c.len_utf8());
                out.push_str(&rest[..len]);
                rest = &rest[len..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Code unit of a `\uXXXX` escape at the start of `s`.
fn escape_unit(s: &str) -> Option<u16> {
    let hex = s.strip_prefix("\\u")?.get(..4)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(hex, 16).ok()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let result = load(&path);
        match result {
            Err(ConvertError::Io { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            Ok(_) => panic!("expected an I/O error"),
        }
    }

    #[test]
    fn test_load_articles_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("export.json");
        fs::write(
            &path,
            r#"[{"title": "First", "raw_body": "one"}, {"title": "Second", "raw_body": "two"}]"#,
        )
        .unwrap();

        let articles = load(&path).unwrap();
        let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_load_malformed_json_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("export.json");
        fs::write(&path, r#"[{"title": "Broken""#).unwrap();

        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_parse_non_array_roots() {
        assert!(parse(b"{}").is_empty());
        assert!(parse(b"null").is_empty());
        assert!(parse(b"\"text\"").is_empty());
        assert!(parse(b"").is_empty());
    }

    #[test]
    fn test_parse_keeps_cardinality() {
        let articles = parse(br#"[{"title": "A"}, 3, null, {"title": "B"}]"#);
        assert_eq!(articles.len(), 4);
        assert_eq!(articles[0].title, "A");
        assert_eq!(articles[1], Article::default());
        assert_eq!(articles[2], Article::default());
        assert_eq!(articles[3].title, "B");
    }

    #[test]
    fn test_parse_lone_surrogate_keeps_all_articles() {
        let articles = parse(
            br#"[{"title": "Good", "raw_body": "ok"}, {"title": "Bad", "raw_body": "a\ud800b"}]"#,
        );
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].raw_body, "ok");
        assert_eq!(articles[1].title, "Bad");
        assert_eq!(articles[1].raw_body, "a\u{fffd}b");
    }

    #[test]
    fn test_parse_invalid_utf8_keeps_all_articles() {
        let articles =
            parse(b"[{\"title\": \"Good\", \"raw_body\": \"ok\"}, {\"title\": \"Bad\", \"raw_body\": \"x\xffy\"}]");
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].raw_body, "ok");
        assert_eq!(articles[1].raw_body, "x\u{fffd}y");
    }

    #[test]
    fn test_parse_surrogate_pair_and_escaped_backslash() {
        let articles = parse(
            br#"[{"title": "\ud83d\ude00", "raw_body": "\\ud800 \udc00\ud800"}]"#,
        );
        assert_eq!(articles[0].title, "\u{1f600}");
        assert_eq!(articles[0].raw_body, "\\ud800 \u{fffd}\u{fffd}");
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let articles = parse(br#"[{"title": "A", "likes_count": 12, "group": {"name": "dev"}}]"#);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "A");
    }
}
