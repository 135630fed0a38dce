//! # Exampledoc Core
//!
//! Render HTTP exchanges recorded while running API tests into OpenAPI content maps.
//!
//! Each captured [`Example`] is printed into an [`ApiDocument`] owned by the
//! caller. The document collects, for one endpoint:
//! - a `responses.<status>.content` map,
//! - a `request_body.content` map,
//!
//! both keyed by a [`DocumentationKey`] made of the documented headers, and
//! holding the parsed JSON body as `example` when the body is not empty.
//!
//! ## Quick Start
//!
//! ```rust
//! use exampledoc_core::{
//!     ApiDocument, Example, ExampleDetails, ExampleHeaders, ExamplePrinter, PrinterConfig,
//!     RecordedRequest, RecordedResponse,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Headers (besides `Content-Type`) that distinguish documented content
//! let config = PrinterConfig::new().with_headers_whitelist(["Content-Encoding"]);
//!
//! let mut document = ApiDocument::new();
//! let mut printer = ExamplePrinter::new(&mut document, &config);
//!
//! printer.print(&Example {
//!     details: ExampleDetails::new("Returns a Pokemon", "Pokemons").with_route("GET", "/pokemons/1"),
//!     request: RecordedRequest::default(),
//!     response: RecordedResponse {
//!         status: 200,
//!         headers: ExampleHeaders::from_iter([
//!             ("Content-Type", "application/json"),
//!             ("Content-Encoding", "gzip"),
//!             ("Date", "Mon, 19 Oct 2026 08:00:00 GMT"),
//!         ]),
//!         body: r#"{"id":1,"name":"Pikachu"}"#.to_string(),
//!     },
//! })?;
//!
//! let json = serde_json::to_value(&document)?;
//! assert_eq!(
//!     json["responses"]["200"]["content"]["Content-Encoding: gzip\nContent-Type: application/json"]["example"]["name"],
//!     "Pikachu"
//! );
//! assert_eq!(json["request_body"]["content"][""], serde_json::json!({}));
//! # Ok(())
//! # }
//! ```
//!
//! ## Documentation keys
//!
//! The [`HeaderSelector`] keeps `Content-Type` and the whitelisted headers,
//! compared case-sensitively, sorted by name. The [`DocumentationKey`] writes
//! them as `Name: value` lines joined by `\n`. Without any selected header the
//! key is the empty string.
//!
//! ## Error Handling
//!
//! A body that is not empty and not valid JSON makes [`ExamplePrinter::print`]
//! fail with [`ExampleDocError::BodyParse`], naming the example and the side
//! (request or response) at fault.
//!
//! ## OpenAPI
//!
//! The finished document converts into `utoipa` objects with
//! [`ApiDocument::to_responses`], [`ApiDocument::to_request_body`] and
//! [`ApiDocument::to_operation`].

mod config;
mod document;
mod error;
mod example;
mod openapi;
mod printer;

pub use self::config::PrinterConfig;
pub use self::document::{ApiDocument, ContentEntry, ContentSection};
pub use self::error::{ExampleDocError, ExampleSide};
pub use self::example::{
    Example, ExampleDetails, ExampleHeaders, RecordedRequest, RecordedResponse,
};
pub use self::printer::{
    CONTENT_TYPE, DocumentationKey, ExamplePrinter, HeaderSelector, resolve_body,
};
