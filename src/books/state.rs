//! Snapshot of the client-side book state.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::mvi::Snapshot;

/// Identifier of a book as issued by the API.
///
/// Held as raw JSON so any id shape the server hands out (string, integer,
/// float) is posted back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(Value);

impl BookId {
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_plain(&self.0, f)
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        BookId(Value::from(value))
    }
}

impl From<String> for BookId {
    fn from(value: String) -> Self {
        BookId(Value::from(value))
    }
}

impl From<i64> for BookId {
    fn from(value: i64) -> Self {
        BookId(Value::from(value))
    }
}

impl From<Value> for BookId {
    fn from(value: Value) -> Self {
        BookId(value)
    }
}

/// Opaque book field. Whatever JSON the server sent is kept as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(Value);

impl FieldValue {
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

/// Strings print without quotes, everything else as JSON text.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_plain(&self.0, f)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue(Value::from(value))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue(Value::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue(Value::from(value))
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue(value)
    }
}

fn write_plain(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::String(s) => f.write_str(s),
        other => write!(f, "{}", other),
    }
}

/// Keeps an explicit `null` as `Some(null)` so it is written back.
fn present<'de, D>(deserializer: D) -> Result<Option<FieldValue>, D::Error>
where
    D: Deserializer<'de>,
{
    FieldValue::deserialize(deserializer).map(Some)
}

/// A book as received from the API.
///
/// Fields are opaque and passed through unmodified: absent fields stay
/// absent, explicit nulls stay null, and unknown fields are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Option<FieldValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub author: Option<FieldValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub year: Option<FieldValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub country: Option<FieldValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub pages: Option<FieldValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub language: Option<FieldValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub image_link: Option<FieldValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Book {
    /// Create a book carrying only an id and a title.
    pub fn new(id: impl Into<BookId>, title: impl Into<FieldValue>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            author: None,
            year: None,
            country: None,
            pages: None,
            language: None,
            image_link: None,
            extra: Map::new(),
        }
    }

    /// Absolute URL of the cover image, resolved against the API base URL.
    ///
    /// Only a string `imageLink` yields a URL.
    pub fn image_url(&self, base_url: &str) -> Option<String> {
        let link = self.image_link.as_ref()?.as_str()?;
        Some(format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            link.trim_start_matches('/')
        ))
    }
}

/// Classification of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Transport,
    Http,
    NotFound,
    Decode,
    InvalidUrl,
}

/// Error value stored in the snapshot after a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
    pub status: Option<u16>,
}

/// Full client state at one instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientState {
    /// True strictly between a coordinator's start and its terminal commit.
    pub is_loading: bool,
    /// Set by a failure commit, cleared by the next start or success commit.
    pub error: Option<ErrorInfo>,
    /// Last listing or reading-list result.
    pub books: Vec<Book>,
    /// Last fetched detail. Independent of `books`.
    pub selected_book: Option<Book>,
}

impl Snapshot for ClientState {}
