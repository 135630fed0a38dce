use std::collections::BTreeMap;

use crate::example::ExampleHeaders;

/// The header that always takes part in a documentation key when present.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Chooses which headers of a captured exchange distinguish its documentation.
///
/// A header is selected when its name is exactly [`CONTENT_TYPE`], or when a
/// whitelist is configured and contains its name. Matching is exact and
/// case-sensitive: a whitelist entry `Cache-Control` does not select a header
/// stored as `cache-control`.
///
/// The selection is sorted by header name (byte order) and holds each name once.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderSelector<'a> {
    whitelist: Option<&'a [String]>,
}

impl<'a> HeaderSelector<'a> {
    /// Creates a selector for the given whitelist.
    pub fn new(whitelist: Option<&'a [String]>) -> Self {
        Self { whitelist }
    }

    /// Selects the documented headers, sorted by name.
    ///
    /// An empty result is valid: the exchange has no distinguishing headers.
    pub fn select<'h>(&self, headers: &'h ExampleHeaders) -> Vec<(&'h str, &'h str)> {
        headers
            .iter()
            .filter(|(name, _)| self.is_selected(name))
            .collect::<BTreeMap<_, _>>()
            .into_iter()
            .collect()
    }

    fn is_selected(&self, name: &str) -> bool {
        name == CONTENT_TYPE
            || self
                .whitelist
                .is_some_and(|whitelist| whitelist.iter().any(|allowed| allowed == name))
    }
}
