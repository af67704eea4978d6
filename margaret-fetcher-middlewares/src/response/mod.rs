//! Response abstractions consumed by middlewares.
//!
//! A middleware only needs three things from a response: its status, a
//! case-insensitive header lookup, and a way to read the body once.
//! [`FetchResponse`] captures exactly that, so any transport can feed the
//! pipeline. Implementations ship for [`reqwest::Response`] and for
//! [`BufferedResponse`].

mod buffered;
mod reqwest_impl;

pub use buffered::BufferedResponse;

use crate::error::MiddlewareResult;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};

/// Case-insensitive header lookup.
pub trait HeaderLookup {
    /// Get a header value by name, ignoring ASCII case.
    ///
    /// Returns `None` when the header is absent or its value is not
    /// visible ASCII.
    fn get_header(&self, name: &str) -> Option<&str>;

    /// Check whether a header is present.
    fn has_header(&self, name: &str) -> bool {
        self.get_header(name).is_some()
    }
}

impl HeaderLookup for HeaderMap {
    fn get_header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.to_str().ok())
    }
}

impl<H: HeaderLookup + ?Sized> HeaderLookup for &H {
    fn get_header(&self, name: &str) -> Option<&str> {
        (**self).get_header(name)
    }
}

/// An HTTP response whose body can be read exactly once.
///
/// Reading the body consumes the response, so a second read is a compile
/// error for owned values.
#[async_trait]
pub trait FetchResponse: Send + Sized + 'static {
    /// Header collection carried by this response.
    type Headers: HeaderLookup + Clone + Send + Sync + 'static;

    /// HTTP status code.
    fn status(&self) -> StatusCode;

    /// Response headers.
    fn headers(&self) -> &Self::Headers;

    /// Final URL of the exchange, when the transport knows it.
    fn url(&self) -> Option<&Url> {
        None
    }

    /// Read the full body as text.
    async fn read_text(self) -> MiddlewareResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("0"));

        assert_eq!(headers.get_header("Content-Length"), Some("0"));
        assert_eq!(headers.get_header("content-length"), Some("0"));
        assert_eq!(headers.get_header("CONTENT-LENGTH"), Some("0"));
        assert!(!headers.has_header("content-type"));
    }

    #[test]
    fn test_header_lookup_rejects_opaque_values() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_bytes(b"caf\xe9").unwrap());

        assert_eq!(headers.get_header("content-type"), None);
    }

    #[test]
    fn test_header_lookup_invalid_name() {
        let headers = HeaderMap::new();
        assert_eq!(headers.get_header("not a header"), None);
    }

    #[test]
    fn test_header_lookup_through_reference() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("12"));

        let by_ref = &headers;
        assert_eq!(by_ref.get_header("Content-Length"), Some("12"));
    }
}
