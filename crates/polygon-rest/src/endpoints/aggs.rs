//! Aggregate bar (OHLC) endpoints.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{path_segment, Endpoint};
use crate::error::RestResult;
use crate::types::TimeInput;

/// Custom-window aggregate bars for a single ticker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetAggsRequest {
    /// Ticker symbol (e.g. `AAPL`, `X:BTCUSD`).
    pub ticker: String,
    /// Size of the time window.
    pub multiplier: i64,
    /// Unit of the time window (`minute`, `hour`, `day`, `week`, ...).
    pub timespan: String,
    /// Start of the range, as a date string or epoch timestamp.
    #[serde(rename = "from")]
    pub from_: TimeInput,
    /// End of the range, as a date string or epoch timestamp.
    pub to: TimeInput,
    /// Whether results are adjusted for splits.
    pub adjusted: Option<bool>,
    /// Sort order by timestamp (`asc` or `desc`).
    pub sort: Option<String>,
    /// Maximum number of base aggregates used to build the response.
    pub limit: Option<u32>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetAggsRequest {
    const PATH_FIELDS: &'static [&'static str] = &["ticker", "multiplier", "timespan", "from", "to"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/v2/aggs/ticker/{}/range/{}/{}/{}/{}",
            path_segment("ticker", &self.ticker)?,
            self.multiplier,
            path_segment("timespan", &self.timespan)?,
            path_segment("from", &self.from_.to_query_value())?,
            path_segment("to", &self.to.to_query_value())?,
        ))
    }
}

/// Paged variant of [`GetAggsRequest`]; same route, same parameters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListAggsRequest {
    /// Ticker symbol (e.g. `AAPL`, `X:BTCUSD`).
    pub ticker: String,
    /// Size of the time window.
    pub multiplier: i64,
    /// Unit of the time window (`minute`, `hour`, `day`, `week`, ...).
    pub timespan: String,
    /// Start of the range, as a date string or epoch timestamp.
    #[serde(rename = "from")]
    pub from_: TimeInput,
    /// End of the range, as a date string or epoch timestamp.
    pub to: TimeInput,
    /// Whether results are adjusted for splits.
    pub adjusted: Option<bool>,
    /// Sort order by timestamp (`asc` or `desc`).
    pub sort: Option<String>,
    /// Maximum number of base aggregates used to build the response.
    pub limit: Option<u32>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListAggsRequest {
    const PATH_FIELDS: &'static [&'static str] = &["ticker", "multiplier", "timespan", "from", "to"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/v2/aggs/ticker/{}/range/{}/{}/{}/{}",
            path_segment("ticker", &self.ticker)?,
            self.multiplier,
            path_segment("timespan", &self.timespan)?,
            path_segment("from", &self.from_.to_query_value())?,
            path_segment("to", &self.to.to_query_value())?,
        ))
    }
}

/// Daily bars for the whole market on one date.
///
/// The route needs a locale and market type; both default the way the
/// API documents them (`us` stocks) when not given.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetGroupedDailyAggsRequest {
    /// Calendar date of the bars (`YYYY-MM-DD`).
    pub date: String,
    /// Whether results are adjusted for splits.
    pub adjusted: Option<bool>,
    /// Whether OTC securities are included.
    pub include_otc: Option<bool>,
    /// Market locale (defaults to `us`).
    pub locale: Option<String>,
    /// Market type (defaults to `stocks`).
    pub market_type: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetGroupedDailyAggsRequest {
    const PATH_FIELDS: &'static [&'static str] = &["locale", "market_type", "date"];

    fn path(&self) -> RestResult<String> {
        let locale = self.locale.as_deref().unwrap_or("us");
        let market_type = self.market_type.as_deref().unwrap_or("stocks");
        Ok(format!(
            "/v2/aggs/grouped/locale/{}/market/{}/{}",
            path_segment("locale", locale)?,
            path_segment("market_type", market_type)?,
            path_segment("date", &self.date)?,
        ))
    }
}

/// Open, close and after-hours prices for one ticker on one date.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetDailyOpenCloseAggRequest {
    /// Ticker symbol.
    pub ticker: String,
    /// Calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// Whether results are adjusted for splits.
    pub adjusted: Option<bool>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetDailyOpenCloseAggRequest {
    const PATH_FIELDS: &'static [&'static str] = &["ticker", "date"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/v1/open-close/{}/{}",
            path_segment("ticker", &self.ticker)?,
            path_segment("date", &self.date)?,
        ))
    }
}

/// Previous trading day's OHLC for one ticker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetPreviousCloseAggRequest {
    /// Ticker symbol.
    pub ticker: String,
    /// Whether results are adjusted for splits.
    pub adjusted: Option<bool>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetPreviousCloseAggRequest {
    const PATH_FIELDS: &'static [&'static str] = &["ticker"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/v2/aggs/ticker/{}/prev",
            path_segment("ticker", &self.ticker)?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggs_path_accepts_dates_and_epochs() {
        let request = GetAggsRequest {
            ticker: "AAPL".to_string(),
            multiplier: 5,
            timespan: "minute".to_string(),
            from_: TimeInput::from("2024-01-02"),
            to: TimeInput::from(1_704_412_800_000),
            adjusted: None,
            sort: None,
            limit: None,
            params: None,
        };
        assert_eq!(
            request.path().unwrap(),
            "/v2/aggs/ticker/AAPL/range/5/minute/2024-01-02/1704412800000"
        );
    }

    #[test]
    fn test_aggs_path_rejects_blank_ticker() {
        let request = GetAggsRequest {
            ticker: String::new(),
            multiplier: 1,
            timespan: "day".to_string(),
            from_: TimeInput::from("2024-01-02"),
            to: TimeInput::from("2024-01-05"),
            adjusted: None,
            sort: None,
            limit: None,
            params: None,
        };
        assert_eq!(
            request.path().unwrap_err().to_string(),
            "missing required parameter: ticker"
        );
    }

    #[test]
    fn test_grouped_daily_defaults_to_us_stocks() {
        let request = GetGroupedDailyAggsRequest {
            date: "2024-01-02".to_string(),
            adjusted: None,
            include_otc: None,
            locale: None,
            market_type: None,
            params: None,
        };
        assert_eq!(
            request.path().unwrap(),
            "/v2/aggs/grouped/locale/us/market/stocks/2024-01-02"
        );

        let overridden = GetGroupedDailyAggsRequest {
            locale: Some("global".to_string()),
            market_type: Some("crypto".to_string()),
            ..request
        };
        assert_eq!(
            overridden.path().unwrap(),
            "/v2/aggs/grouped/locale/global/market/crypto/2024-01-02"
        );
    }

    #[test]
    fn test_daily_open_close_path() {
        let request = GetDailyOpenCloseAggRequest {
            ticker: "AAPL".to_string(),
            date: "2024-01-02".to_string(),
            adjusted: Some(true),
            params: None,
        };
        assert_eq!(request.path().unwrap(), "/v1/open-close/AAPL/2024-01-02");
    }
}
