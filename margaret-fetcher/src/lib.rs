//! # margaret-fetcher
//!
//! Composable response middlewares for fetch-style HTTP pipelines.
//!
//! A fetch call hands back a raw response; the middlewares in this crate
//! turn it into something the application can use. Today that means JSON
//! body parsing with consistent handling of empty responses.
//!
//! ## Quick Start
//!
//! ```ignore
//! use margaret_fetcher::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let response = reqwest::get("https://api.example.com/users/1").await?;
//!     let parsed = parse_json(response).await?;
//!
//!     println!("{} -> {:?}", parsed.status(), parsed.data());
//!     Ok(())
//! }
//! ```
//!
//! ## Empty Responses
//!
//! `data` is `None` for `204 No Content` and for any response with
//! `Content-Length: 0`. Every other response is parsed, so an empty `200`
//! without a length header is reported as malformed JSON.
//!
//! ## Architecture
//!
//! - [`margaret_fetcher_middlewares`] - Response abstraction, JSON parser,
//!   middleware trait and combinators

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// ============================================================================
// Crate Re-exports
// ============================================================================

/// Response middlewares.
pub use margaret_fetcher_middlewares as middlewares;

/// HTTP types used by the response abstraction.
pub use reqwest;

/// JSON value type carried in `data`.
pub use serde_json::Value as JsonValue;

// ============================================================================
// Type Re-exports (Flat)
// ============================================================================

pub use margaret_fetcher_middlewares::{
    parse_json, parse_json_with, BufferedResponse, Chain, FetchResponse, FnMiddleware,
    HeaderLookup, MiddlewareError, MiddlewareResult, ParseJson, ParseJsonConfig, ParsedResponse,
    ResponseMiddleware,
};

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient prelude for common imports.
///
/// ```ignore
/// use margaret_fetcher::prelude::*;
/// ```
pub mod prelude {
    pub use crate::middlewares::prelude::*;
    pub use crate::middlewares::{BufferedResponse, HeaderLookup};
    pub use crate::JsonValue;
}
