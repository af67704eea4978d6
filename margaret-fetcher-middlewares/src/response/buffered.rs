//! In-memory response with a one-shot body.

use super::FetchResponse;
use crate::error::{MiddlewareError, MiddlewareResult};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{StatusCode, Url};

/// A response whose body is already in memory.
///
/// The body is held until the first read and dropped afterwards, so a
/// second [`take_text`](Self::take_text) fails with
/// [`MiddlewareError::BodyConsumed`]. A clone copies the metadata only and
/// starts out consumed.
///
/// # Example
///
/// ```ignore
/// use margaret_fetcher_middlewares::BufferedResponse;
/// use reqwest::StatusCode;
///
/// let response = BufferedResponse::new(StatusCode::OK).body(r#"{"foo":"bar"}"#);
/// ```
#[derive(Debug)]
pub struct BufferedResponse {
    status: StatusCode,
    headers: HeaderMap,
    url: Option<Url>,
    body: Option<Bytes>,
}

impl BufferedResponse {
    /// Create a response with an empty body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            url: None,
            body: Some(Bytes::new()),
        }
    }

    /// Create a `200 OK` response with the given body.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::OK).body(body)
    }

    /// Set the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Add a header, keeping earlier values for the same name.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Replace all headers.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Set the URL the response came from.
    #[must_use]
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    /// Check whether the body has already been read.
    pub fn is_consumed(&self) -> bool {
        self.body.is_none()
    }

    /// Take the body as text, leaving the response drained.
    ///
    /// Invalid UTF-8 is replaced the same way `reqwest` decodes text.
    pub fn take_text(&mut self) -> MiddlewareResult<String> {
        let bytes = self.body.take().ok_or(MiddlewareError::BodyConsumed)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Clone for BufferedResponse {
    fn clone(&self) -> Self {
        Self {
            status: self.status,
            headers: self.headers.clone(),
            url: self.url.clone(),
            body: None,
        }
    }
}

#[async_trait]
impl FetchResponse for BufferedResponse {
    type Headers = HeaderMap;

    fn status(&self) -> StatusCode {
        self.status
    }

    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    async fn read_text(mut self) -> MiddlewareResult<String> {
        self.take_text()
    }
}
