//! Tick-level endpoints: trades, quotes and currency conversion.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{path_segment, Endpoint};
use crate::error::RestResult;
use crate::types::TimeInput;

/// Tick-by-tick trades for a ticker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListTradesRequest {
    /// Ticker symbol.
    pub ticker: String,
    /// Exact timestamp filter.
    pub timestamp: Option<TimeInput>,
    /// Timestamps strictly before this value.
    pub timestamp_lt: Option<TimeInput>,
    /// Timestamps at or before this value.
    pub timestamp_lte: Option<TimeInput>,
    /// Timestamps strictly after this value.
    pub timestamp_gt: Option<TimeInput>,
    /// Timestamps at or after this value.
    pub timestamp_gte: Option<TimeInput>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Sort order (`asc` or `desc`).
    pub order: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListTradesRequest {
    const PATH_FIELDS: &'static [&'static str] = &["ticker"];

    fn path(&self) -> RestResult<String> {
        Ok(format!("/v3/trades/{}", path_segment("ticker", &self.ticker)?))
    }
}

/// Most recent trade for a ticker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetLastTradeRequest {
    /// Ticker symbol.
    pub ticker: String,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetLastTradeRequest {
    const PATH_FIELDS: &'static [&'static str] = &["ticker"];

    fn path(&self) -> RestResult<String> {
        Ok(format!("/v2/last/trade/{}", path_segment("ticker", &self.ticker)?))
    }
}

/// Most recent trade for a crypto pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetLastCryptoTradeRequest {
    /// Base currency symbol (e.g. `BTC`).
    #[serde(rename = "from")]
    pub from_: String,
    /// Quote currency symbol (e.g. `USD`).
    pub to: String,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetLastCryptoTradeRequest {
    const PATH_FIELDS: &'static [&'static str] = &["from", "to"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/v1/last/crypto/{}/{}",
            path_segment("from", &self.from_)?,
            path_segment("to", &self.to)?,
        ))
    }
}

/// NBBO quotes for a ticker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListQuotesRequest {
    /// Ticker symbol.
    pub ticker: String,
    /// Exact timestamp filter.
    pub timestamp: Option<TimeInput>,
    /// Timestamps strictly before this value.
    pub timestamp_lt: Option<TimeInput>,
    /// Timestamps at or before this value.
    pub timestamp_lte: Option<TimeInput>,
    /// Timestamps strictly after this value.
    pub timestamp_gt: Option<TimeInput>,
    /// Timestamps at or after this value.
    pub timestamp_gte: Option<TimeInput>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Sort order (`asc` or `desc`).
    pub order: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListQuotesRequest {
    const PATH_FIELDS: &'static [&'static str] = &["ticker"];

    fn path(&self) -> RestResult<String> {
        Ok(format!("/v3/quotes/{}", path_segment("ticker", &self.ticker)?))
    }
}

/// Most recent NBBO quote for a ticker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetLastQuoteRequest {
    /// Ticker symbol.
    pub ticker: String,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetLastQuoteRequest {
    const PATH_FIELDS: &'static [&'static str] = &["ticker"];

    fn path(&self) -> RestResult<String> {
        Ok(format!("/v2/last/nbbo/{}", path_segment("ticker", &self.ticker)?))
    }
}

/// Most recent quote for a forex pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetLastForexQuoteRequest {
    /// Base currency symbol (e.g. `EUR`).
    #[serde(rename = "from")]
    pub from_: String,
    /// Quote currency symbol (e.g. `USD`).
    pub to: String,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetLastForexQuoteRequest {
    const PATH_FIELDS: &'static [&'static str] = &["from", "to"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/v1/last_quote/currencies/{}/{}",
            path_segment("from", &self.from_)?,
            path_segment("to", &self.to)?,
        ))
    }
}

/// Currency conversion at the current exchange rate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetRealTimeCurrencyConversionRequest {
    /// Currency to convert from (e.g. `USD`).
    #[serde(rename = "from")]
    pub from_: String,
    /// Currency to convert to (e.g. `EUR`).
    pub to: String,
    /// Amount to convert.
    pub amount: Option<f64>,
    /// Decimal precision of the converted amount.
    pub precision: Option<u32>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetRealTimeCurrencyConversionRequest {
    const PATH_FIELDS: &'static [&'static str] = &["from", "to"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/v1/conversion/{}/{}",
            path_segment("from", &self.from_)?,
            path_segment("to", &self.to)?,
        ))
    }
}
