use serde::{Deserialize, Serialize};

/// Settings read by the [`ExamplePrinter`](crate::ExamplePrinter).
///
/// The configuration is an explicit value handed to each printer instead of
/// process-wide state, so independent test runs never observe each other's
/// settings.
///
/// # Example
///
/// ```rust
/// use exampledoc_core::PrinterConfig;
///
/// let config = PrinterConfig::new()
///     .with_headers_whitelist(["X-Auth-Token", "Content-Encoding"]);
///
/// assert_eq!(
///     config.headers_whitelist(),
///     Some(&["X-Auth-Token".to_string(), "Content-Encoding".to_string()][..])
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    headers_whitelist: Option<Vec<String>>,
}

impl PrinterConfig {
    /// Creates a configuration without any header whitelist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header names that participate in documentation keys
    /// in addition to `Content-Type`.
    ///
    /// Names are matched exactly and case-sensitively.
    #[must_use]
    pub fn with_headers_whitelist<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers_whitelist = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Removes any configured header whitelist.
    #[must_use]
    pub fn without_headers_whitelist(mut self) -> Self {
        self.headers_whitelist = None;
        self
    }

    /// Returns the configured whitelist, or `None` when none is configured.
    pub fn headers_whitelist(&self) -> Option<&[String]> {
        self.headers_whitelist.as_deref()
    }
}
