//! Federal economic data endpoints.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Endpoint;
use crate::error::RestResult;
use crate::types::TimeInput;

/// Daily treasury yield curve values.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListTreasuryYieldsRequest {
    /// Exact calendar date.
    pub date: Option<TimeInput>,
    /// Comma-separated list of calendar dates.
    pub date_any_of: Option<String>,
    /// Dates strictly before this value.
    pub date_lt: Option<TimeInput>,
    /// Dates at or before this value.
    pub date_lte: Option<TimeInput>,
    /// Dates strictly after this value.
    pub date_gt: Option<TimeInput>,
    /// Dates at or after this value.
    pub date_gte: Option<TimeInput>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Sort order (`asc` or `desc`).
    pub order: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListTreasuryYieldsRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/fed/v1/treasury-yields".to_string())
    }
}

/// Consumer price index and related inflation series.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListInflationRequest {
    /// Exact calendar date.
    pub date: Option<TimeInput>,
    /// Comma-separated list of calendar dates.
    pub date_any_of: Option<String>,
    /// Dates strictly after this value.
    pub date_gt: Option<TimeInput>,
    /// Dates at or after this value.
    pub date_gte: Option<TimeInput>,
    /// Dates strictly before this value.
    pub date_lt: Option<TimeInput>,
    /// Dates at or before this value.
    pub date_lte: Option<TimeInput>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListInflationRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/fed/v1/inflation".to_string())
    }
}
