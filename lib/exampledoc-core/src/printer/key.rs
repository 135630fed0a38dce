use serde::Serialize;

/// The string indexing a content map: one `Name: value` line per selected header.
///
/// The empty key is legitimate and stands for "no distinguishing headers".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(transparent)]
pub struct DocumentationKey(String);

impl DocumentationKey {
    /// Joins the selected headers, in the given order, with a single `\n`.
    pub fn format<'a, I>(selected: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let lines = selected
            .into_iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>();
        Self(lines.join("\n"))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks if the key has no header line.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<DocumentationKey> for String {
    fn from(key: DocumentationKey) -> Self {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_yields_empty_key() {
        let key = DocumentationKey::format([]);

        assert!(key.is_empty());
        assert_eq!(key.as_str(), "");
    }

    #[test]
    fn test_single_header_line() {
        let key = DocumentationKey::format([("Content-Type", "application/json")]);

        assert_eq!(key.to_string(), "Content-Type: application/json");
    }

    #[test]
    fn test_lines_keep_the_given_order() {
        let key = DocumentationKey::format([
            ("Content-Encoding", "gzip"),
            ("Content-Type", "application/json"),
        ]);

        insta::assert_snapshot!(key, @r"
        Content-Encoding: gzip
        Content-Type: application/json
        ");
    }

    #[test]
    fn test_value_is_written_verbatim() {
        let key = DocumentationKey::format([("Content-Type", "application/json; charset=utf-8")]);

        assert_eq!(String::from(key), "Content-Type: application/json; charset=utf-8");
    }
}
