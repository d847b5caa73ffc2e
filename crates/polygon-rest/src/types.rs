//! Loosely-typed wire values shared across endpoint requests.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A date or timestamp parameter, forwarded to the API exactly as received.
///
/// Polygon accepts calendar strings (`2024-01-02`, RFC 3339 datetimes) and
/// integer epoch timestamps for most time filters. Both shapes are carried
/// through without normalization; the API decides what they mean for a given
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TimeInput {
    /// Integer epoch timestamp (the unit is endpoint-specific).
    Epoch(i64),
    /// Date or datetime string.
    Text(String),
}

impl TimeInput {
    /// Renders the value as it appears in a URL path or query pair.
    #[must_use]
    pub fn to_query_value(&self) -> String {
        match self {
            Self::Epoch(epoch) => epoch.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<i64> for TimeInput {
    fn from(epoch: i64) -> Self {
        Self::Epoch(epoch)
    }
}

impl From<String> for TimeInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for TimeInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}
