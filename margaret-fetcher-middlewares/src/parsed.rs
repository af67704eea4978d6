//! Output of the JSON body parser.

use crate::error::{MiddlewareError, MiddlewareResult};
use crate::response::HeaderLookup;
use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// A response whose body has been parsed.
///
/// Carries the original status, headers and URL plus `data`, which is
/// `None` exactly when the response was empty by convention (`204` or
/// `Content-Length: 0`).
#[derive(Debug, Clone)]
pub struct ParsedResponse<H = HeaderMap> {
    status: StatusCode,
    headers: H,
    url: Option<Url>,
    data: Option<JsonValue>,
}

impl<H: HeaderLookup> ParsedResponse<H> {
    /// Create a parsed response.
    pub fn new(status: StatusCode, headers: H, url: Option<Url>, data: Option<JsonValue>) -> Self {
        Self {
            status,
            headers,
            url,
            data,
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &H {
        &self.headers
    }

    /// Look up a single header, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get_header(name)
    }

    /// URL of the exchange, if known.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Parsed body, `None` for empty responses.
    pub fn data(&self) -> Option<&JsonValue> {
        self.data.as_ref()
    }

    /// Take ownership of the parsed body.
    pub fn into_data(self) -> Option<JsonValue> {
        self.data
    }

    /// Check whether the response carried no body.
    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }

    /// Deserialize `data` into `T`.
    ///
    /// Empty responses yield `Ok(None)`.
    pub fn json<T: DeserializeOwned>(&self) -> MiddlewareResult<Option<T>> {
        self.data
            .as_ref()
            .map(|value| T::deserialize(value).map_err(MiddlewareError::Deserialize))
            .transpose()
    }

    /// Split into metadata and data.
    pub fn into_parts(self) -> (StatusCode, H, Option<Url>, Option<JsonValue>) {
        (self.status, self.headers, self.url, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Foo {
        foo: String,
    }

    fn parsed(data: Option<JsonValue>) -> ParsedResponse {
        ParsedResponse::new(StatusCode::OK, HeaderMap::new(), None, data)
    }

    #[test]
    fn test_accessors() {
        let response = parsed(Some(json!({"foo": "bar"})));
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!response.is_empty());
        assert_eq!(response.data(), Some(&json!({"foo": "bar"})));
        assert_eq!(response.header("content-type"), None);
        assert_eq!(response.into_data(), Some(json!({"foo": "bar"})));
    }

    #[test]
    fn test_typed_json() {
        let response = parsed(Some(json!({"foo": "bar"})));
        let foo: Option<Foo> = response.json().unwrap();
        assert_eq!(foo, Some(Foo { foo: "bar".into() }));
    }

    #[test]
    fn test_typed_json_empty() {
        let response = parsed(None);
        assert!(response.is_empty());
        assert_eq!(response.json::<Foo>().unwrap(), None);
    }

    #[test]
    fn test_typed_json_mismatch() {
        let response = parsed(Some(json!([1, 2, 3])));
        let err = response.json::<Foo>().unwrap_err();
        assert!(matches!(err, MiddlewareError::Deserialize(_)));
    }
}
