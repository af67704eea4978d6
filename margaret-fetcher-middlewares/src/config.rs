//! JSON parser configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the [`ParseJson`](crate::ParseJson) middleware.
///
/// The default configuration only treats two responses as empty: a
/// `204 No Content` status and an explicit `Content-Length: 0` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseJsonConfig {
    /// Map a body whose text is empty to `data = None` instead of failing.
    pub empty_body_as_null: bool,
    /// Number of body characters included in the debug event when a body
    /// fails to parse. Zero, the default, keeps body contents out of logs.
    pub error_preview_len: usize,
}

impl Default for ParseJsonConfig {
    fn default() -> Self {
        Self {
            empty_body_as_null: false,
            error_preview_len: 0,
        }
    }
}

impl ParseJsonConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether an empty body text yields `data = None`.
    #[must_use]
    pub fn empty_body_as_null(mut self, enabled: bool) -> Self {
        self.empty_body_as_null = enabled;
        self
    }

    /// Set the body preview length used when logging parse failures.
    #[must_use]
    pub fn error_preview_len(mut self, len: usize) -> Self {
        self.error_preview_len = len;
        self
    }

    /// Config that treats any textually empty body as `null`.
    pub fn lenient() -> Self {
        Self::new().empty_body_as_null(true)
    }

    /// Truncate `body` to the configured preview length.
    pub(crate) fn preview<'a>(&self, body: &'a str) -> &'a str {
        match body.char_indices().nth(self.error_preview_len) {
            Some((idx, _)) => &body[..idx],
            None => body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_keep_narrow_empty_check() {
        let config = ParseJsonConfig::default();
        assert!(!config.empty_body_as_null);
        assert_eq!(config.error_preview_len, 0);
        assert_eq!(config.preview("{\"secret\": 1}"), "");
    }

    #[test]
    fn test_builder() {
        let config = ParseJsonConfig::new()
            .empty_body_as_null(true)
            .error_preview_len(4);

        assert!(config.empty_body_as_null);
        assert_eq!(config.error_preview_len, 4);
        assert!(ParseJsonConfig::lenient().empty_body_as_null);
    }

    #[test]
    fn test_preview() {
        let config = ParseJsonConfig::new().error_preview_len(3);
        assert_eq!(config.preview("<html>"), "<ht");
        assert_eq!(config.preview("ab"), "ab");
        assert_eq!(config.preview("héllo"), "hél");

        let config = ParseJsonConfig::new().error_preview_len(0);
        assert_eq!(config.preview("anything"), "");
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ParseJsonConfig =
            serde_json::from_str(r#"{"empty_body_as_null": true}"#).unwrap();
        assert!(config.empty_body_as_null);
        assert_eq!(config.error_preview_len, 0);
    }
}
