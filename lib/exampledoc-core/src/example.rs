use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Header name/value pairs captured on a request or a response.
///
/// Names are kept verbatim: `Content-Type` and `content-type` are two
/// distinct entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExampleHeaders(IndexMap<String, String>);

impl ExampleHeaders {
    /// Creates an empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a header, replacing any previous value with the exact same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the value of the header with exactly this name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the number of headers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if no header was captured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ExampleHeaders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Descriptive metadata attached to an example by the test that produced it.
///
/// None of these fields influence the generated document; they locate the
/// example in logs and errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleDetails {
    /// Human readable description of the example.
    pub description: String,
    /// Name of the documented resource.
    pub resource_name: String,
    /// HTTP method of the request, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Request path, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ExampleDetails {
    /// Creates details from a description and a resource name.
    pub fn new(description: impl Into<String>, resource_name: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            resource_name: resource_name.into(),
            method: None,
            path: None,
        }
    }

    /// Records the request method and path.
    #[must_use]
    pub fn with_route(mut self, method: impl Into<String>, path: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self.path = Some(path.into());
        self
    }
}

/// A captured request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRequest {
    /// Request headers.
    #[serde(default)]
    pub headers: ExampleHeaders,
    /// Raw request body, empty when the request had none.
    #[serde(default)]
    pub body: String,
}

/// A captured response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    #[serde(default)]
    pub headers: ExampleHeaders,
    /// Raw response body, empty when the response had none.
    #[serde(default)]
    pub body: String,
}

/// A request/response exchange captured while running an API test.
///
/// # Example
///
/// ```rust
/// use exampledoc_core::{Example, ExampleDetails, ExampleHeaders, RecordedRequest, RecordedResponse};
///
/// let example = Example {
///     details: ExampleDetails::new("Returns a Pokemon", "Pokemons").with_route("GET", "/pokemons/1"),
///     request: RecordedRequest::default(),
///     response: RecordedResponse {
///         status: 200,
///         headers: ExampleHeaders::from_iter([("Content-Type", "application/json")]),
///         body: r#"{"id":1,"name":"Pikachu"}"#.to_string(),
///     },
/// };
/// # assert_eq!(example.response.status, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Descriptive metadata, carried through untouched.
    pub details: ExampleDetails,
    /// The captured request.
    pub request: RecordedRequest,
    /// The captured response.
    pub response: RecordedResponse,
}
