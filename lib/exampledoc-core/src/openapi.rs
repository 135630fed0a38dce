//! Conversion of an [`ApiDocument`] into `utoipa` OpenAPI objects.
//!
//! Documentation keys are used verbatim as content map keys, so a key built
//! from several header lines stays distinguishable in the generated spec.

use http::StatusCode;
use utoipa::openapi::path::Operation;
use utoipa::openapi::request_body::RequestBody;
use utoipa::openapi::{Content, ResponseBuilder, Responses, ResponsesBuilder};

use crate::document::{ApiDocument, ContentSection};

impl ApiDocument {
    /// Builds the OpenAPI responses, one per documented status.
    ///
    /// Each response is described by the canonical reason phrase of its status.
    /// Content keys come out sorted by name; insertion order holds only on the [`ApiDocument`].
    pub fn to_responses(&self) -> Responses {
        let mut builder = ResponsesBuilder::new();
        for (status, section) in self.responses() {
            let mut response = ResponseBuilder::new().description(status_description(status));
            for (key, content) in contents(section) {
                response = response.content(key, content);
            }
            builder = builder.response(status, response.build());
        }
        builder.build()
    }

    /// Builds the OpenAPI request body, or `None` when no request content was printed.
    ///
    /// Content keys come out sorted by name; insertion order holds only on the [`ApiDocument`].
    pub fn to_request_body(&self) -> Option<RequestBody> {
        let section = self.request_body();
        if section.content().is_empty() {
            return None;
        }

        let mut builder = RequestBody::builder();
        for (key, content) in contents(section) {
            builder = builder.content(key, content);
        }
        Some(builder.build())
    }

    /// Builds an OpenAPI operation holding the request body and the responses.
    pub fn to_operation(&self, operation_id: impl Into<String>) -> Operation {
        Operation::builder()
            .operation_id(Some(operation_id.into()))
            .request_body(self.to_request_body())
            .responses(self.to_responses())
            .build()
    }
}

fn contents(section: &ContentSection) -> impl Iterator<Item = (&str, Content)> {
    section.content().iter().map(|(key, entry)| {
        let content = Content::builder().example(entry.example().cloned()).build();
        (key.as_str(), content)
    })
}

fn status_description(status: &str) -> String {
    status
        .parse::<u16>()
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .and_then(|code| code.canonical_reason())
        .map_or_else(|| format!("Status {status}"), ToString::to_string)
}
