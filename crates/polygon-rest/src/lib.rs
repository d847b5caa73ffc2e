//! # Polygon REST
//!
//! Raw-response client and endpoint catalog for the Polygon.io market data API.
//!
//! The crate deliberately does *not* model response payloads. Every endpoint
//! is described by a typed request struct that knows its URL path and query
//! parameters; the client performs a single GET and hands the JSON body back
//! exactly as the API produced it. Callers that want typed data can layer
//! their own deserialization on top.
//!
//! ## Example
//!
//! ```rust
//! use polygon_rest::endpoints::GetPreviousCloseAggRequest;
//! use polygon_rest::{query_pairs, Endpoint};
//!
//! let request = GetPreviousCloseAggRequest {
//!     ticker: "AAPL".to_string(),
//!     adjusted: Some(true),
//!     params: None,
//! };
//!
//! assert_eq!(request.path().unwrap(), "/v2/aggs/ticker/AAPL/prev");
//! assert_eq!(
//!     query_pairs(&request).unwrap(),
//!     vec![("adjusted".to_string(), "true".to_string())],
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::uninlined_format_args)]

pub mod client;
pub mod endpoints;
pub mod error;
pub mod query;
pub mod types;

pub use client::{PolygonClient, RestTransport, DEFAULT_BASE_URL};
pub use endpoints::Endpoint;
pub use error::{RestError, RestResult};
pub use query::query_pairs;
pub use types::TimeInput;
