//! Futures market endpoints.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{path_segment, required, Endpoint};
use crate::error::RestResult;
use crate::types::TimeInput;

/// Aggregate bars for a futures contract.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListFuturesAggregatesRequest {
    /// Futures contract ticker.
    pub ticker: String,
    /// Bar resolution (`1Min`, `1H`, `1D`, ...).
    pub resolution: String,
    /// Exact window start timestamp.
    pub window_start: Option<String>,
    /// Window starts strictly before this value.
    pub window_start_lt: Option<String>,
    /// Window starts at or before this value.
    pub window_start_lte: Option<String>,
    /// Window starts strictly after this value.
    pub window_start_gt: Option<String>,
    /// Window starts at or after this value.
    pub window_start_gte: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListFuturesAggregatesRequest {
    const PATH_FIELDS: &'static [&'static str] = &["ticker"];

    fn path(&self) -> RestResult<String> {
        required("resolution", &self.resolution)?;
        Ok(format!(
            "/futures/vX/aggs/{}",
            path_segment("ticker", &self.ticker)?
        ))
    }
}

/// Futures contracts and their lifecycle dates.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListFuturesContractsRequest {
    /// Product code the contracts belong to.
    pub product_code: Option<String>,
    /// First trade date filter.
    pub first_trade_date: Option<TimeInput>,
    /// Last trade date filter.
    pub last_trade_date: Option<TimeInput>,
    /// Point in time the contract list is valid for.
    pub as_of: Option<TimeInput>,
    /// Whether the contract is active (`true`, `false`, `all`).
    pub active: Option<String>,
    /// Contract type (`single`, `combo`).
    #[serde(rename = "type")]
    pub type_: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListFuturesContractsRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/futures/vX/contracts".to_string())
    }
}

/// Details for one futures contract.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetFuturesContractDetailsRequest {
    /// Futures contract ticker.
    pub ticker: String,
    /// Point in time the details are valid for.
    pub as_of: Option<TimeInput>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetFuturesContractDetailsRequest {
    const PATH_FIELDS: &'static [&'static str] = &["ticker"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/futures/vX/contracts/{}",
            path_segment("ticker", &self.ticker)?
        ))
    }
}

/// Futures products (the tradable definitions behind contracts).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListFuturesProductsRequest {
    /// Exact product name.
    pub name: Option<String>,
    /// Partial match on product name.
    pub name_search: Option<String>,
    /// Point in time the product list is valid for.
    pub as_of: Option<TimeInput>,
    /// Trading venue filter.
    pub trading_venue: Option<String>,
    /// Sector filter.
    pub sector: Option<String>,
    /// Sub-sector filter.
    pub sub_sector: Option<String>,
    /// Asset class filter.
    pub asset_class: Option<String>,
    /// Asset sub-class filter.
    pub asset_sub_class: Option<String>,
    /// Product type (`single`, `combo`).
    #[serde(rename = "type")]
    pub type_: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListFuturesProductsRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/futures/vX/products".to_string())
    }
}

/// Details for one futures product.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetFuturesProductDetailsRequest {
    /// Product code (e.g. `ES`).
    pub product_code: String,
    /// Product type (`single`, `combo`).
    #[serde(rename = "type")]
    pub type_: Option<String>,
    /// Point in time the details are valid for.
    pub as_of: Option<TimeInput>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetFuturesProductDetailsRequest {
    const PATH_FIELDS: &'static [&'static str] = &["product_code"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/futures/vX/products/{}",
            path_segment("product_code", &self.product_code)?
        ))
    }
}

/// Tick-level quotes for a futures contract.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListFuturesQuotesRequest {
    /// Futures contract ticker.
    pub ticker: String,
    /// Exact timestamp filter.
    pub timestamp: Option<String>,
    /// Timestamps strictly before this value.
    pub timestamp_lt: Option<String>,
    /// Timestamps at or before this value.
    pub timestamp_lte: Option<String>,
    /// Timestamps strictly after this value.
    pub timestamp_gt: Option<String>,
    /// Timestamps at or after this value.
    pub timestamp_gte: Option<String>,
    /// Exact session end date.
    pub session_end_date: Option<String>,
    /// Session end dates strictly before this value.
    pub session_end_date_lt: Option<String>,
    /// Session end dates at or before this value.
    pub session_end_date_lte: Option<String>,
    /// Session end dates strictly after this value.
    pub session_end_date_gt: Option<String>,
    /// Session end dates at or after this value.
    pub session_end_date_gte: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListFuturesQuotesRequest {
    const PATH_FIELDS: &'static [&'static str] = &["ticker"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/futures/vX/quotes/{}",
            path_segment("ticker", &self.ticker)?
        ))
    }
}

/// Tick-level trades for a futures contract.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListFuturesTradesRequest {
    /// Futures contract ticker.
    pub ticker: String,
    /// Exact timestamp filter.
    pub timestamp: Option<String>,
    /// Timestamps strictly before this value.
    pub timestamp_lt: Option<String>,
    /// Timestamps at or before this value.
    pub timestamp_lte: Option<String>,
    /// Timestamps strictly after this value.
    pub timestamp_gt: Option<String>,
    /// Timestamps at or after this value.
    pub timestamp_gte: Option<String>,
    /// Exact session end date.
    pub session_end_date: Option<String>,
    /// Session end dates strictly before this value.
    pub session_end_date_lt: Option<String>,
    /// Session end dates at or before this value.
    pub session_end_date_lte: Option<String>,
    /// Session end dates strictly after this value.
    pub session_end_date_gt: Option<String>,
    /// Session end dates at or after this value.
    pub session_end_date_gte: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListFuturesTradesRequest {
    const PATH_FIELDS: &'static [&'static str] = &["ticker"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/futures/vX/trades/{}",
            path_segment("ticker", &self.ticker)?
        ))
    }
}

/// Trading session schedules across products.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListFuturesSchedulesRequest {
    /// Session end date the schedules apply to.
    pub session_end_date: Option<String>,
    /// Trading venue filter.
    pub trading_venue: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListFuturesSchedulesRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/futures/vX/schedules".to_string())
    }
}

/// Trading session schedules for one product.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListFuturesSchedulesByProductCodeRequest {
    /// Product code (e.g. `ES`).
    pub product_code: String,
    /// Exact session end date.
    pub session_end_date: Option<String>,
    /// Session end dates strictly before this value.
    pub session_end_date_lt: Option<String>,
    /// Session end dates at or before this value.
    pub session_end_date_lte: Option<String>,
    /// Session end dates strictly after this value.
    pub session_end_date_gt: Option<String>,
    /// Session end dates at or after this value.
    pub session_end_date_gte: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListFuturesSchedulesByProductCodeRequest {
    const PATH_FIELDS: &'static [&'static str] = &["product_code"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/futures/vX/products/{}/schedules",
            path_segment("product_code", &self.product_code)?
        ))
    }
}

/// Market status per futures product.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListFuturesMarketStatusesRequest {
    /// Comma-separated list of product codes.
    pub product_code_any_of: Option<String>,
    /// Exact product code.
    pub product_code: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListFuturesMarketStatusesRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/futures/vX/market-status".to_string())
    }
}

/// Snapshot of futures contracts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetFuturesSnapshotRequest {
    /// Exact contract ticker.
    pub ticker: Option<String>,
    /// Comma-separated list of contract tickers.
    pub ticker_any_of: Option<String>,
    /// Tickers lexically after this value.
    pub ticker_gt: Option<String>,
    /// Tickers at or lexically after this value.
    pub ticker_gte: Option<String>,
    /// Tickers lexically before this value.
    pub ticker_lt: Option<String>,
    /// Tickers at or lexically before this value.
    pub ticker_lte: Option<String>,
    /// Exact product code.
    pub product_code: Option<String>,
    /// Comma-separated list of product codes.
    pub product_code_any_of: Option<String>,
    /// Product codes lexically after this value.
    pub product_code_gt: Option<String>,
    /// Product codes at or lexically after this value.
    pub product_code_gte: Option<String>,
    /// Product codes lexically before this value.
    pub product_code_lt: Option<String>,
    /// Product codes at or lexically before this value.
    pub product_code_lte: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetFuturesSnapshotRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/futures/vX/snapshot".to_string())
    }
}
