use tracing::{debug, warn};

use crate::config::PrinterConfig;
use crate::document::{ApiDocument, ContentSection};
use crate::error::{ExampleDocError, ExampleSide};
use crate::example::{Example, ExampleHeaders};

mod body;
mod headers;
mod key;

pub use self::body::resolve_body;
pub use self::headers::{CONTENT_TYPE, HeaderSelector};
pub use self::key::DocumentationKey;

/// Prints captured examples into a shared [`ApiDocument`].
///
/// For each example the printer writes one content entry under
/// `responses.<status>` and one under `request_body`. The entry key is the
/// [`DocumentationKey`] built from the headers chosen by the [`HeaderSelector`];
/// the entry holds the parsed body as `example` when the body is not empty.
///
/// # Ordering and partial failure
///
/// The response side is printed before the request side. Each side is
/// written only once its body has been parsed, so a failing side leaves the
/// document untouched for that side:
///
/// - a response body error aborts before the request side is looked at,
/// - a request body error keeps the response entry that was already written.
///
/// # Example
///
/// ```rust
/// use exampledoc_core::{
///     ApiDocument, Example, ExampleDetails, ExampleHeaders, ExamplePrinter, PrinterConfig,
///     RecordedRequest, RecordedResponse,
/// };
///
/// # fn main() -> Result<(), exampledoc_core::ExampleDocError> {
/// let config = PrinterConfig::new().with_headers_whitelist(["X-Auth-Token"]);
/// let mut document = ApiDocument::new();
///
/// let example = Example {
///     details: ExampleDetails::new("Returns a Pokemon", "Pokemons"),
///     request: RecordedRequest {
///         headers: ExampleHeaders::from_iter([("X-Auth-Token", "877da7da7fbc16216e")]),
///         body: String::new(),
///     },
///     response: RecordedResponse {
///         status: 200,
///         headers: ExampleHeaders::from_iter([("Content-Type", "application/json")]),
///         body: r#"{"id":1,"name":"Pikachu"}"#.to_string(),
///     },
/// };
///
/// ExamplePrinter::new(&mut document, &config).print(&example)?;
///
/// let content = document.response(200).expect("200 documented");
/// assert!(content.entry("Content-Type: application/json").is_some());
/// assert!(document.request_body().entry("X-Auth-Token: 877da7da7fbc16216e").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ExamplePrinter<'a> {
    document: &'a mut ApiDocument,
    config: &'a PrinterConfig,
}

impl<'a> ExamplePrinter<'a> {
    /// Creates a printer writing into `document` with the given configuration.
    pub fn new(document: &'a mut ApiDocument, config: &'a PrinterConfig) -> Self {
        Self { document, config }
    }

    /// Prints one example into the document.
    ///
    /// Printing the same example twice leaves the document as printing it once.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleDocError::BodyParse`] when a non-empty request or
    /// response body is not valid JSON.
    pub fn print(&mut self, example: &Example) -> Result<(), ExampleDocError> {
        let response = &example.response;
        let selector = HeaderSelector::new(self.config.headers_whitelist());

        let (key, body) = resolve_side(
            &selector,
            &response.headers,
            &response.body,
            ExampleSide::Response,
            example,
        )?;
        let section = self.document.response_mut(response.status);
        write_entry(section, key, body, ExampleSide::Response, response.status);

        let request = &example.request;
        let (key, body) = resolve_side(
            &selector,
            &request.headers,
            &request.body,
            ExampleSide::Request,
            example,
        )?;
        let section = self.document.request_body_mut();
        write_entry(section, key, body, ExampleSide::Request, response.status);

        Ok(())
    }

    /// Returns the document being built.
    pub fn document(&self) -> &ApiDocument {
        self.document
    }
}

fn resolve_side(
    selector: &HeaderSelector<'_>,
    headers: &ExampleHeaders,
    raw_body: &str,
    side: ExampleSide,
    example: &Example,
) -> Result<(DocumentationKey, Option<serde_json::Value>), ExampleDocError> {
    let key = DocumentationKey::format(selector.select(headers));

    let body = resolve_body(raw_body).map_err(|source| {
        let details = &example.details;
        warn!(
            %side,
            response_status = example.response.status,
            resource = %details.resource_name,
            description = %details.description,
            method = details.method.as_deref(),
            path = details.path.as_deref(),
            %source,
            "body is not valid JSON"
        );
        ExampleDocError::BodyParse {
            side,
            status: example.response.status,
            description: details.description.clone(),
            resource_name: details.resource_name.clone(),
            source,
        }
    })?;

    Ok((key, body))
}

fn write_entry(
    section: &mut ContentSection,
    key: DocumentationKey,
    body: Option<serde_json::Value>,
    side: ExampleSide,
    status: u16,
) {
    debug!(
        %side,
        response_status = status,
        %key,
        with_example = body.is_some(),
        "documenting content"
    );

    let entry = section.entry_mut(key);
    if let Some(example) = body {
        entry.set_example(example);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::example::{ExampleDetails, RecordedRequest, RecordedResponse};

    fn example(request_body: &str, response_body: &str) -> Example {
        Example {
            details: ExampleDetails::new("Returns a Pokemon", "Pokemons"),
            request: RecordedRequest {
                headers: ExampleHeaders::from_iter([("Content-Type", "application/json")]),
                body: request_body.to_string(),
            },
            response: RecordedResponse {
                status: 200,
                headers: ExampleHeaders::from_iter([("Content-Type", "application/json")]),
                body: response_body.to_string(),
            },
        }
    }

    #[test]
    fn test_print_writes_both_sides() {
        let config = PrinterConfig::default();
        let mut document = ApiDocument::new();

        ExamplePrinter::new(&mut document, &config)
            .print(&example(r#"{"name":"Pikachu"}"#, r#"{"id":1}"#))
            .expect("should print");

        insta::assert_snapshot!(
            serde_json::to_string_pretty(&document).expect("should serialize"),
            @r#"
        {
          "responses": {
            "200": {
              "content": {
                "Content-Type: application/json": {
                  "example": {
                    "id": 1
                  }
                }
              }
            }
          },
          "request_body": {
            "content": {
              "Content-Type: application/json": {
                "example": {
                  "name": "Pikachu"
                }
              }
            }
          }
        }
        "#
        );
    }

    #[test]
    fn test_empty_body_keeps_entry_without_example() {
        let config = PrinterConfig::default();
        let mut document = ApiDocument::new();

        ExamplePrinter::new(&mut document, &config)
            .print(&example("", ""))
            .expect("should print");

        let entry = document
            .response(200)
            .and_then(|section| section.entry("Content-Type: application/json"))
            .expect("should have entry");
        assert!(!entry.has_example());
    }

    #[test]
    fn test_empty_body_does_not_remove_previous_example() {
        let config = PrinterConfig::default();
        let mut document = ApiDocument::new();
        let mut printer = ExamplePrinter::new(&mut document, &config);

        printer
            .print(&example("", r#"{"id":1}"#))
            .expect("should print");
        printer.print(&example("", "")).expect("should print");

        let entry = printer
            .document()
            .response(200)
            .and_then(|section| section.entry("Content-Type: application/json"))
            .expect("should have entry");
        assert_eq!(entry.example(), Some(&json!({"id": 1})));
    }

    #[test]
    fn test_later_example_overwrites_same_key() {
        let config = PrinterConfig::default();
        let mut document = ApiDocument::new();
        let mut printer = ExamplePrinter::new(&mut document, &config);

        printer
            .print(&example("", r#"{"id":1,"name":"Pikachu"}"#))
            .expect("should print");
        printer
            .print(&example("", r#"{"id":2}"#))
            .expect("should print");

        let entry = document
            .response(200)
            .and_then(|section| section.entry("Content-Type: application/json"))
            .expect("should have entry");
        assert_eq!(entry.example(), Some(&json!({"id": 2})));
    }

    #[test]
    fn test_response_error_leaves_document_untouched() {
        let config = PrinterConfig::default();
        let mut document = ApiDocument::new();

        let error = ExamplePrinter::new(&mut document, &config)
            .print(&example(r#"{"name":"Pikachu"}"#, "<html>"))
            .expect_err("should fail");

        assert!(matches!(
            error,
            ExampleDocError::BodyParse {
                side: ExampleSide::Response,
                status: 200,
                ..
            }
        ));
        assert!(document.is_empty());
    }

    #[test]
    fn test_request_error_keeps_response_entry() {
        let config = PrinterConfig::default();
        let mut document = ApiDocument::new();

        let error = ExamplePrinter::new(&mut document, &config)
            .print(&example("name=Pikachu", r#"{"id":1}"#))
            .expect_err("should fail");

        assert!(matches!(
            error,
            ExampleDocError::BodyParse {
                side: ExampleSide::Request,
                ..
            }
        ));
        assert!(document.response(200).is_some());
        assert!(document.request_body().content().is_empty());
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("not poisoned").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_request_error_log_names_the_response_status() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        let config = PrinterConfig::default();
        let mut document = ApiDocument::new();
        let result = tracing::subscriber::with_default(subscriber, || {
            ExamplePrinter::new(&mut document, &config).print(&example("name=Pikachu", ""))
        });
        assert!(result.is_err());

        let output = String::from_utf8(logs.0.lock().expect("not poisoned").clone())
            .expect("utf-8 logs");
        assert!(output.contains("side=request"), "{output}");
        assert!(output.contains("response_status=200"), "{output}");
        assert!(!output.contains(" status="), "{output}");
    }
}
