//! JSON body parsing middleware.
//!
//! Normalizes empty responses to `data = None` and parses everything else
//! as JSON. Exactly two responses count as empty:
//!
//! 1. status `204 No Content` (the body is never read);
//! 2. a `Content-Length` header whose value is `"0"`, as servers commonly
//!    send with `201 Created`.
//!
//! Any other response has its body read and parsed. A zero-length body
//! that matched neither check fails with
//! [`MiddlewareError::MalformedJson`] unless
//! [`ParseJsonConfig::empty_body_as_null`] is enabled.

use crate::config::ParseJsonConfig;
use crate::error::{MiddlewareError, MiddlewareResult};
use crate::middleware::{Chain, ResponseMiddleware};
use crate::parsed::ParsedResponse;
use crate::response::{FetchResponse, HeaderLookup};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value as JsonValue;
use tracing::{debug, trace};

/// Parse a response body as JSON using the default configuration.
///
/// # Example
///
/// ```ignore
/// use margaret_fetcher_middlewares::parse_json;
///
/// let response = reqwest::get("https://api.example.com/foo").await?;
/// let parsed = parse_json(response).await?;
/// println!("{:?}", parsed.data());
/// ```
pub async fn parse_json<R: FetchResponse>(
    response: R,
) -> MiddlewareResult<ParsedResponse<R::Headers>> {
    ParseJson::new().parse(response).await
}

/// Parse a response body as JSON with a custom configuration.
pub async fn parse_json_with<R: FetchResponse>(
    config: &ParseJsonConfig,
    response: R,
) -> MiddlewareResult<ParsedResponse<R::Headers>> {
    parse_with_config(config, response).await
}

/// Middleware that parses response bodies as JSON.
#[derive(Debug, Clone, Default)]
pub struct ParseJson {
    config: ParseJsonConfig,
}

impl ParseJson {
    /// Create a parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom configuration.
    pub fn with_config(config: ParseJsonConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ParseJsonConfig {
        &self.config
    }

    /// Parse a single response.
    pub async fn parse<R: FetchResponse>(
        &self,
        response: R,
    ) -> MiddlewareResult<ParsedResponse<R::Headers>> {
        parse_with_config(&self.config, response).await
    }

    /// Run `next` on the parsed response.
    pub fn then<B>(self, next: B) -> Chain<Self, B> {
        Chain::new(self, next)
    }
}

#[async_trait]
impl<R: FetchResponse> ResponseMiddleware<R> for ParseJson {
    type Output = ParsedResponse<R::Headers>;

    async fn handle(&self, response: R) -> MiddlewareResult<Self::Output> {
        self.parse(response).await
    }

    fn name(&self) -> &'static str {
        "parse_json"
    }
}

async fn parse_with_config<R: FetchResponse>(
    config: &ParseJsonConfig,
    response: R,
) -> MiddlewareResult<ParsedResponse<R::Headers>> {
    let status = response.status();
    let headers = response.headers().clone();
    let url = response.url().cloned();

    if is_known_empty(status, &headers) {
        debug!(status = status.as_u16(), "Empty response, skipping body");
        return Ok(ParsedResponse::new(status, headers, url, None));
    }

    let raw = response.read_text().await?;
    let text = strip_bom(&raw);

    if text.is_empty() && config.empty_body_as_null {
        debug!(status = status.as_u16(), "Empty body treated as null");
        return Ok(ParsedResponse::new(status, headers, url, None));
    }

    let data = serde_json::from_str::<JsonValue>(text).map_err(|source| {
        debug!(
            status = status.as_u16(),
            bytes = text.len(),
            preview = config.preview(text),
            error = %source,
            "Response body is not valid JSON"
        );
        MiddlewareError::malformed_json(status.as_u16(), source)
    })?;

    trace!(status = status.as_u16(), bytes = text.len(), "Parsed JSON body");

    Ok(ParsedResponse::new(status, headers, url, Some(data)))
}

/// Drop a leading UTF-8 byte order mark, as the Fetch `text()` decoder does.
fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Check the two conventions that mark a response as having no body.
fn is_known_empty<H: HeaderLookup>(status: StatusCode, headers: &H) -> bool {
    status == StatusCode::NO_CONTENT || headers.get_header("Content-Length") == Some("0")
}
