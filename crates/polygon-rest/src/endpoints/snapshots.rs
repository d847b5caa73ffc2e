//! Market snapshot endpoints.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{path_segment, required, Endpoint};
use crate::error::RestResult;

/// Locale segment the v2 snapshot routes use for a market type.
fn snapshot_locale(market_type: &str) -> &'static str {
    match market_type {
        "crypto" | "forex" => "global",
        _ => "us",
    }
}

/// Unified snapshot across asset classes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListUniversalSnapshotsRequest {
    /// Asset class to snapshot (`stocks`, `options`, `fx`, `crypto`, `indices`).
    #[serde(rename = "type")]
    pub type_: String,
    /// Ticker symbols to include.
    pub ticker_any_of: Option<Vec<String>>,
    /// Sort order (`asc` or `desc`).
    pub order: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListUniversalSnapshotsRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        required("type", &self.type_)?;
        Ok("/v3/snapshot".to_string())
    }
}

/// Snapshot of every ticker in one market.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetSnapshotAllRequest {
    /// Market type (`stocks`, `crypto`, `forex`, ...). Decides the locale segment.
    pub market_type: String,
    /// Restrict the snapshot to these tickers.
    pub tickers: Option<Vec<String>>,
    /// Whether OTC securities are included.
    pub include_otc: Option<bool>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetSnapshotAllRequest {
    const PATH_FIELDS: &'static [&'static str] = &["market_type"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/v2/snapshot/locale/{}/markets/{}/tickers",
            snapshot_locale(&self.market_type),
            path_segment("market_type", &self.market_type)?,
        ))
    }
}

/// Top market movers in one direction.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetSnapshotDirectionRequest {
    /// Market type (`stocks`, `crypto`, `forex`, ...).
    pub market_type: String,
    /// Mover direction (`gainers` or `losers`).
    pub direction: String,
    /// Whether OTC securities are included.
    pub include_otc: Option<bool>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetSnapshotDirectionRequest {
    const PATH_FIELDS: &'static [&'static str] = &["market_type", "direction"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/v2/snapshot/locale/{}/markets/{}/{}",
            snapshot_locale(&self.market_type),
            path_segment("market_type", &self.market_type)?,
            path_segment("direction", &self.direction)?,
        ))
    }
}

/// Snapshot of a single ticker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetSnapshotTickerRequest {
    /// Market type (`stocks`, `crypto`, `forex`, ...).
    pub market_type: String,
    /// Ticker symbol.
    pub ticker: String,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetSnapshotTickerRequest {
    const PATH_FIELDS: &'static [&'static str] = &["market_type", "ticker"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/v2/snapshot/locale/{}/markets/{}/tickers/{}",
            snapshot_locale(&self.market_type),
            path_segment("market_type", &self.market_type)?,
            path_segment("ticker", &self.ticker)?,
        ))
    }
}

/// Snapshot of a single option contract.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetSnapshotOptionRequest {
    /// Underlying ticker symbol (e.g. `AAPL`).
    pub underlying_asset: String,
    /// Option contract ticker (e.g. `O:AAPL230616C00150000`).
    pub option_contract: String,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetSnapshotOptionRequest {
    const PATH_FIELDS: &'static [&'static str] = &["underlying_asset", "option_contract"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/v3/snapshot/options/{}/{}",
            path_segment("underlying_asset", &self.underlying_asset)?,
            path_segment("option_contract", &self.option_contract)?,
        ))
    }
}

/// Level 2 order book snapshot for a crypto ticker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetSnapshotCryptoBookRequest {
    /// Crypto ticker symbol (e.g. `X:BTCUSD`).
    pub ticker: String,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for GetSnapshotCryptoBookRequest {
    const PATH_FIELDS: &'static [&'static str] = &["ticker"];

    fn path(&self) -> RestResult<String> {
        Ok(format!(
            "/v2/snapshot/locale/global/markets/crypto/tickers/{}/book",
            path_segment("ticker", &self.ticker)?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::query_pairs;

    #[test]
    fn test_locale_follows_market_type() {
        assert_eq!(snapshot_locale("crypto"), "global");
        assert_eq!(snapshot_locale("forex"), "global");
        assert_eq!(snapshot_locale("stocks"), "us");
        assert_eq!(snapshot_locale("otc"), "us");
    }

    #[test]
    fn test_snapshot_all_path_and_query() {
        let request = GetSnapshotAllRequest {
            market_type: "stocks".to_string(),
            tickers: Some(vec!["AAPL".to_string(), "MSFT".to_string()]),
            include_otc: Some(false),
            params: None,
        };
        assert_eq!(
            request.path().unwrap(),
            "/v2/snapshot/locale/us/markets/stocks/tickers"
        );

        let pairs = query_pairs(&request).unwrap();
        assert!(pairs.contains(&("tickers".to_string(), "AAPL,MSFT".to_string())));
        assert!(pairs.contains(&("include_otc".to_string(), "false".to_string())));
    }

    #[test]
    fn test_crypto_routes_use_global_locale() {
        let direction = GetSnapshotDirectionRequest {
            market_type: "crypto".to_string(),
            direction: "gainers".to_string(),
            include_otc: None,
            params: None,
        };
        assert_eq!(
            direction.path().unwrap(),
            "/v2/snapshot/locale/global/markets/crypto/gainers"
        );

        let book = GetSnapshotCryptoBookRequest {
            ticker: "X:BTCUSD".to_string(),
            params: None,
        };
        assert_eq!(
            book.path().unwrap(),
            "/v2/snapshot/locale/global/markets/crypto/tickers/X%3ABTCUSD/book"
        );
    }

    #[test]
    fn test_universal_snapshot_requires_type() {
        let request = ListUniversalSnapshotsRequest {
            type_: String::new(),
            ticker_any_of: None,
            order: None,
            limit: None,
            sort: None,
            params: None,
        };
        assert_eq!(
            request.path().unwrap_err().to_string(),
            "missing required parameter: type"
        );

        let valid = ListUniversalSnapshotsRequest {
            type_: "stocks".to_string(),
            ticker_any_of: Some(vec!["AAPL".to_string(), "TSLA".to_string()]),
            ..request
        };
        assert_eq!(valid.path().unwrap(), "/v3/snapshot");
        let pairs = query_pairs(&valid).unwrap();
        assert!(pairs.contains(&("type".to_string(), "stocks".to_string())));
        assert!(pairs.contains(&("ticker.any_of".to_string(), "AAPL,TSLA".to_string())));
    }

    #[test]
    fn test_option_snapshot_path() {
        let request = GetSnapshotOptionRequest {
            underlying_asset: "AAPL".to_string(),
            option_contract: "O:AAPL230616C00150000".to_string(),
            params: None,
        };
        assert_eq!(
            request.path().unwrap(),
            "/v3/snapshot/options/AAPL/O%3AAAPL230616C00150000"
        );
    }
}
