//! # margaret-fetcher-middlewares
//!
//! Response post-processing middlewares for margaret-fetcher.
//!
//! The central piece is [`ParseJson`], which turns a raw HTTP response into
//! a [`ParsedResponse`] carrying the JSON body as `data`. Responses that are
//! empty by convention get `data = None`:
//!
//! - status `204 No Content`;
//! - a `Content-Length: 0` header (common on `201 Created`).
//!
//! Everything else is read once and parsed. Invalid JSON and body read
//! failures surface as [`MiddlewareError`].
//!
//! ## Core Concepts
//!
//! - **[`FetchResponse`]**: Anything with a status, headers and a one-shot body
//! - **[`ParseJson`]** / **[`parse_json`]**: The JSON body parser
//! - **[`ResponseMiddleware`]**: A single pipeline step
//! - **[`Chain`]**: Two steps run in sequence
//! - **[`FnMiddleware`]**: A step built from an async closure
//!
//! ## Example
//!
//! ```ignore
//! use margaret_fetcher_middlewares::parse_json;
//!
//! let response = reqwest::get("https://api.example.com/foo").await?;
//! let parsed = parse_json(response).await?;
//!
//! match parsed.data() {
//!     Some(value) => println!("got {value}"),
//!     None => println!("no content"),
//! }
//! ```
//!
//! ## Pipelines
//!
//! ```ignore
//! use margaret_fetcher_middlewares::{FnMiddleware, ParseJson, ParsedResponse, ResponseMiddleware};
//!
//! let pipeline = ParseJson::new().then(FnMiddleware::new("items", |r: ParsedResponse| async move {
//!     Ok(r.json::<Vec<String>>()?.unwrap_or_default())
//! }));
//!
//! let items = pipeline.handle(reqwest::get(url).await?).await?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod middleware;
pub mod parse_json;
pub mod parsed;
pub mod response;

// Re-exports
pub use config::ParseJsonConfig;
pub use error::{MiddlewareError, MiddlewareResult};
pub use middleware::{Chain, FnMiddleware, ResponseMiddleware};
pub use parse_json::{parse_json, parse_json_with, ParseJson};
pub use parsed::ParsedResponse;
pub use response::{BufferedResponse, FetchResponse, HeaderLookup};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        parse_json, FetchResponse, FnMiddleware, MiddlewareError, MiddlewareResult, ParseJson,
        ParseJsonConfig, ParsedResponse, ResponseMiddleware,
    };
}
