/// Which half of a recorded exchange is being documented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ExampleSide {
    /// The request sent by the test.
    #[display("request")]
    Request,
    /// The response returned by the server.
    #[display("response")]
    Response,
}

/// Errors that can occur when printing an [`Example`](crate::Example) into an
/// [`ApiDocument`](crate::ApiDocument).
///
/// Every variant carries enough context (resource, description, status, side)
/// to locate the offending captured exchange in the test suite.
#[derive(Debug, derive_more::Error, derive_more::Display)]
pub enum ExampleDocError {
    /// A non-empty body is not valid JSON.
    ///
    /// The example contributes nothing for the failing side.
    #[display(
        "Invalid JSON {side} body for '{resource_name}' ({description}), status {status}: {source}"
    )]
    BodyParse {
        /// The side whose body failed to parse.
        side: ExampleSide,
        /// The response status of the example.
        status: u16,
        /// The example description.
        description: String,
        /// The documented resource name.
        resource_name: String,
        /// The underlying JSON decoding error.
        source: serde_json::Error,
    },
}
