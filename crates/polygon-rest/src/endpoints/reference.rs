//! Reference data endpoints: tickers, news, corporate actions, market metadata.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{path_segment, Endpoint};
use crate::error::RestResult;
use crate::types::TimeInput;

/// Upcoming market holidays and their open/close times.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetMarketHolidaysRequest {
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetMarketHolidaysRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/v1/marketstatus/upcoming".to_string())
    }
}

/// Current trading status of the exchanges.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetMarketStatusRequest {
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetMarketStatusRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/v1/marketstatus/now".to_string())
    }
}

/// Ticker symbols known to Polygon.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListTickersRequest {
    /// Exact ticker symbol.
    pub ticker: Option<String>,
    /// Ticker type (see the ticker types endpoint).
    #[serde(rename = "type")]
    pub type_: Option<String>,
    /// Market filter (`stocks`, `crypto`, `fx`, `otc`, `indices`).
    pub market: Option<String>,
    /// Primary exchange MIC code.
    pub exchange: Option<String>,
    /// CUSIP identifier.
    pub cusip: Option<String>,
    /// SEC CIK number.
    pub cik: Option<String>,
    /// Point in time the symbol list is valid for.
    pub date: Option<TimeInput>,
    /// Full-text search over ticker and company name.
    pub search: Option<String>,
    /// Whether the symbol is actively traded.
    pub active: Option<bool>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Sort order (`asc` or `desc`).
    pub order: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListTickersRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/v3/reference/tickers".to_string())
    }
}

/// Detailed reference data for one ticker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetTickerDetailsRequest {
    /// Ticker symbol.
    pub ticker: String,
    /// Point in time the details are valid for.
    pub date: Option<TimeInput>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetTickerDetailsRequest {
    const PATH_FIELDS: &'static [&'static str] = &["ticker"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/v3/reference/tickers/{}",
            path_segment("ticker", &self.ticker)?
        ))
    }
}

/// News articles mentioning a ticker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListTickerNewsRequest {
    /// Ticker symbol.
    pub ticker: Option<String>,
    /// Publication time filter.
    pub published_utc: Option<TimeInput>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Sort order (`asc` or `desc`).
    pub order: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListTickerNewsRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/v2/reference/news".to_string())
    }
}

/// Ticker types Polygon classifies symbols into.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetTickerTypesRequest {
    /// Asset class filter (`stocks`, `options`, `crypto`, `fx`, `indices`).
    pub asset_class: Option<String>,
    /// Locale filter (`us` or `global`).
    pub locale: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetTickerTypesRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/v3/reference/tickers/types".to_string())
    }
}

/// Historical stock splits.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListSplitsRequest {
    /// Ticker symbol.
    pub ticker: Option<String>,
    /// Date the split took effect.
    pub execution_date: Option<TimeInput>,
    /// Whether to only return reverse splits.
    pub reverse_split: Option<bool>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListSplitsRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/v3/reference/splits".to_string())
    }
}

/// Historical cash dividends.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListDividendsRequest {
    /// Ticker symbol.
    pub ticker: Option<String>,
    /// Ex-dividend date filter.
    pub ex_dividend_date: Option<TimeInput>,
    /// Payouts per year (0 one-time, 1 annual, 2 bi-annual, 4 quarterly, 12 monthly).
    pub frequency: Option<u32>,
    /// Dividend type (`CD`, `SC`, `LT`, `ST`).
    pub dividend_type: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListDividendsRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/v3/reference/dividends".to_string())
    }
}

/// Trade and quote condition codes per SIP.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListConditionsRequest {
    /// Asset class filter.
    pub asset_class: Option<String>,
    /// Data type the condition applies to (`trade` or `quote`).
    pub data_type: Option<String>,
    /// Condition identifier.
    pub id: Option<u32>,
    /// SIP the condition comes from (`CTA`, `UTP`, `OPRA`).
    pub sip: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListConditionsRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/v3/reference/conditions".to_string())
    }
}

/// Exchanges and market centers Polygon covers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetExchangesRequest {
    /// Asset class filter.
    pub asset_class: Option<String>,
    /// Locale filter (`us` or `global`).
    pub locale: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetExchangesRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/v3/reference/exchanges".to_string())
    }
}
