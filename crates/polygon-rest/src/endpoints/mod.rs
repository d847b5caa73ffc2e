//! Declarative catalog of Polygon REST endpoints.
//!
//! One request struct per endpoint, grouped into modules by API family.
//! Each struct lists the endpoint's parameters as typed fields (required
//! parameters are non-optional), names the fields its URL path consumes,
//! and renders that path. Query rendering is shared across the whole
//! catalog; see [`crate::query`].

mod aggs;
mod benzinga;
mod economy;
mod fundamentals;
mod futures;
mod reference;
mod snapshots;
mod ticks;

pub use aggs::*;
pub use benzinga::*;
pub use economy::*;
pub use fundamentals::*;
pub use futures::*;
pub use reference::*;
pub use snapshots::*;
pub use ticks::*;

use serde::Serialize;

use crate::error::{RestError, RestResult};

/// A single REST endpoint: a typed request that knows its URL path.
///
/// Implementations also validate their required parameters in [`path`],
/// which runs before any request is sent. `PATH_FIELDS` lists the
/// *serialized* names of the fields the path consumes (after any serde
/// renames), so the shared query renderer can skip them.
///
/// [`path`]: Endpoint::path
pub trait Endpoint: Serialize {
    /// Serialized names of fields interpolated into the URL path.
    const PATH_FIELDS: &'static [&'static str];

    /// Renders the URL path, validating required parameters.
    fn path(&self) -> RestResult<String>;
}

/// Percent-encodes one path segment, rejecting empty values.
pub(crate) fn path_segment(name: &'static str, value: &str) -> RestResult<String> {
    if value.trim().is_empty() {
        return Err(RestError::missing_parameter(name));
    }
    Ok(urlencoding::encode(value).into_owned())
}

/// Rejects empty values for parameters the API requires in the query string.
pub(crate) fn required(name: &'static str, value: &str) -> RestResult<()> {
    if value.trim().is_empty() {
        return Err(RestError::missing_parameter(name));
    }
    Ok(())
}
