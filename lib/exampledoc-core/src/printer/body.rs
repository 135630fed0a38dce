use serde_json::Value;
use tracing::trace;

/// Resolves a raw captured body into an example value.
///
/// An empty body yields `Ok(None)`: the exchange has no example. Any other
/// body is decoded as JSON and returned as-is, nested structure and key order
/// included.
///
/// # Errors
///
/// Returns the decoding error when a non-empty body is not valid JSON.
pub fn resolve_body(raw: &str) -> Result<Option<Value>, serde_json::Error> {
    if raw.is_empty() {
        trace!("skip example for empty body");
        return Ok(None);
    }

    let value = serde_json::from_str(raw)?;
    Ok(Some(value))
}
