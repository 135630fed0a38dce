use std::fmt::Display;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single content entry: `{}` or `{"example": <value>}`.
///
/// An entry without example is meaningful: the documented exchange had no body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_example"
    )]
    example: Option<Value>,
}

// A present `"example": null` is an example whose value is null.
fn present_example<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ContentEntry {
    /// Returns the example value, if any.
    pub fn example(&self) -> Option<&Value> {
        self.example.as_ref()
    }

    /// Checks if an example is attached.
    pub fn has_example(&self) -> bool {
        self.example.is_some()
    }

    pub(crate) fn set_example(&mut self, example: Value) {
        self.example = Some(example);
    }
}

/// A `{"content": {<key>: <entry>}}` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    #[serde(default)]
    content: IndexMap<String, ContentEntry>,
}

impl ContentSection {
    /// Returns the content map, keyed by documentation key.
    pub fn content(&self) -> &IndexMap<String, ContentEntry> {
        &self.content
    }

    /// Returns the entry for a documentation key.
    pub fn entry(&self, key: &str) -> Option<&ContentEntry> {
        self.content.get(key)
    }

    pub(crate) fn entry_mut(&mut self, key: impl Into<String>) -> &mut ContentEntry {
        self.content.entry(key.into()).or_default()
    }
}

/// The documentation fragment built incrementally from many examples of one endpoint.
///
/// The caller owns the document: it is handed by mutable reference to an
/// [`ExamplePrinter`](crate::ExamplePrinter), then serialized by the caller.
/// The serialized shape is:
///
/// ```text
/// responses:
///   "<status>":
///     content:
///       "<key>": { example?: <value> }
/// request_body:
///   content:
///     "<key>": { example?: <value> }
/// ```
///
/// For a given status and key there is at most one entry; a later example with
/// the same status and key replaces the earlier example value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiDocument {
    #[serde(default)]
    responses: IndexMap<String, ContentSection>,
    #[serde(default)]
    request_body: ContentSection,
}

impl ApiDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the response sections, keyed by status code string.
    pub fn responses(&self) -> &IndexMap<String, ContentSection> {
        &self.responses
    }

    /// Returns the response section for a status.
    ///
    /// The status is compared in its string form, so `200` and `"200"` are the same.
    pub fn response(&self, status: impl Display) -> Option<&ContentSection> {
        self.responses.get(&status.to_string())
    }

    /// Returns the request body section.
    pub fn request_body(&self) -> &ContentSection {
        &self.request_body
    }

    /// Checks if nothing has been printed into the document yet.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty() && self.request_body.content.is_empty()
    }

    pub(crate) fn response_mut(&mut self, status: u16) -> &mut ContentSection {
        self.responses.entry(status.to_string()).or_default()
    }

    pub(crate) fn request_body_mut(&mut self) -> &mut ContentSection {
        &mut self.request_body
    }
}
