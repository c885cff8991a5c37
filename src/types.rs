/// Record types of the knowledge-base export.
///
/// Deserialization is lenient at the field level: a missing, `null`, or
/// mistyped value falls back to the field type's default while the rest of
/// the record is still populated. Unknown fields are ignored.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Author of an article or comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Author {
    /// Numeric user ID.
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    /// URL-safe user name.
    #[serde(deserialize_with = "lenient")]
    pub url_name: String,
    /// Profile image URL.
    #[serde(deserialize_with = "lenient")]
    pub profile_image_url: String,
}

/// A tag attached to an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "lenient")]
    pub name: String,
}

/// A comment on an article. Never written to output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Comment {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient")]
    pub uuid: String,
    #[serde(deserialize_with = "lenient")]
    pub user: Author,
    #[serde(deserialize_with = "lenient")]
    pub raw_body: String,
}

/// One knowledge-base entry, mapped to one output Markdown file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Article {
    /// Numeric article ID.
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    /// Unique string identifier.
    #[serde(deserialize_with = "lenient")]
    pub uuid: String,
    /// Article author.
    #[serde(deserialize_with = "lenient")]
    pub user: Author,
    /// Title; also the output file stem.
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    /// Creation timestamp, kept as the raw string.
    #[serde(deserialize_with = "lenient")]
    pub created_at: String,
    /// Update timestamp, kept as the raw string.
    #[serde(deserialize_with = "lenient")]
    pub updated_at: String,
    #[serde(deserialize_with = "lenient_seq")]
    pub tags: Vec<Tag>,
    /// Canonical URL.
    #[serde(deserialize_with = "lenient")]
    pub url: String,
    /// Body, already Markdown. Copied verbatim.
    #[serde(deserialize_with = "lenient")]
    pub raw_body: String,
    #[serde(deserialize_with = "lenient_seq")]
    pub comments: Vec<Comment>,
}

impl Article {
    /// Build an article from one element of the export array.
    ///
    /// Anything that is not an object yields a zero-valued article, so the
    /// number of articles always equals the number of array elements.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Deserialize a field, substituting the default on any type mismatch.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Deserialize a sequence element by element.
///
/// A mismatched element becomes a default element; a non-array value
/// becomes an empty sequence.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
