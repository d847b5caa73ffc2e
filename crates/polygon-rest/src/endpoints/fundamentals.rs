//! Company fundamentals: financial statements, IPOs, short data.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Endpoint;
use crate::error::RestResult;
use crate::types::TimeInput;

/// Financial statements extracted from SEC filings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListStockFinancialsRequest {
    /// Ticker symbol.
    pub ticker: Option<String>,
    /// SEC CIK number.
    pub cik: Option<String>,
    /// Exact company name.
    pub company_name: Option<String>,
    /// Partial match on company name.
    pub company_name_search: Option<String>,
    /// Standard industrial classification code.
    pub sic: Option<String>,
    /// Exact filing date.
    pub filing_date: Option<TimeInput>,
    /// Filing dates strictly before this value.
    pub filing_date_lt: Option<TimeInput>,
    /// Filing dates at or before this value.
    pub filing_date_lte: Option<TimeInput>,
    /// Filing dates strictly after this value.
    pub filing_date_gt: Option<TimeInput>,
    /// Filing dates at or after this value.
    pub filing_date_gte: Option<TimeInput>,
    /// Exact period-of-report date.
    pub period_of_report_date: Option<TimeInput>,
    /// Report periods strictly before this value.
    pub period_of_report_date_lt: Option<TimeInput>,
    /// Report periods at or before this value.
    pub period_of_report_date_lte: Option<TimeInput>,
    /// Report periods strictly after this value.
    pub period_of_report_date_gt: Option<TimeInput>,
    /// Report periods at or after this value.
    pub period_of_report_date_gte: Option<TimeInput>,
    /// Reporting timeframe (`annual` or `quarterly`).
    pub timeframe: Option<String>,
    /// Whether the response cites the filing data points came from.
    pub include_sources: Option<bool>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Sort order (`asc` or `desc`).
    pub order: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListStockFinancialsRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/vX/reference/financials".to_string())
    }
}

/// Upcoming and historical initial public offerings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListIposRequest {
    /// Ticker symbol.
    pub ticker: Option<String>,
    /// Exact listing date.
    pub listing_date: Option<TimeInput>,
    /// Listing dates strictly before this value.
    pub listing_date_lt: Option<TimeInput>,
    /// Listing dates at or before this value.
    pub listing_date_lte: Option<TimeInput>,
    /// Listing dates strictly after this value.
    pub listing_date_gt: Option<TimeInput>,
    /// Listing dates at or after this value.
    pub listing_date_gte: Option<TimeInput>,
    /// Offering status (`new`, `pending`, `history`, ...).
    pub ipo_status: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Sort order (`asc` or `desc`).
    pub order: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListIposRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/vX/reference/ipos".to_string())
    }
}

/// Bi-monthly short interest reports.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListShortInterestRequest {
    /// Ticker symbol.
    pub ticker: Option<String>,
    /// Exact settlement date.
    pub settlement_date: Option<TimeInput>,
    /// Settlement dates strictly before this value.
    pub settlement_date_lt: Option<TimeInput>,
    /// Settlement dates at or before this value.
    pub settlement_date_lte: Option<TimeInput>,
    /// Settlement dates strictly after this value.
    pub settlement_date_gt: Option<TimeInput>,
    /// Settlement dates at or after this value.
    pub settlement_date_gte: Option<TimeInput>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Sort order (`asc` or `desc`).
    pub order: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListShortInterestRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/stocks/v1/short-interest".to_string())
    }
}

/// Daily short volume totals per venue.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListShortVolumeRequest {
    /// Ticker symbol.
    pub ticker: Option<String>,
    /// Exact trade date.
    pub date: Option<TimeInput>,
    /// Trade dates strictly before this value.
    pub date_lt: Option<TimeInput>,
    /// Trade dates at or before this value.
    pub date_lte: Option<TimeInput>,
    /// Trade dates strictly after this value.
    pub date_gt: Option<TimeInput>,
    /// Trade dates at or after this value.
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

impl Endpoint for ListShortVolumeRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/stocks/v1/short-volume".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::query_pairs;

    #[test]
    fn test_financials_renames_range_and_search_filters() {
        let request = ListStockFinancialsRequest {
            ticker: Some("AAPL".to_string()),
            cik: None,
            company_name: None,
            company_name_search: Some("apple".to_string()),
            sic: None,
            filing_date: None,
            filing_date_lt: None,
            filing_date_lte: None,
            filing_date_gt: None,
            filing_date_gte: Some(TimeInput::from("2024-01-01")),
            period_of_report_date: None,
            period_of_report_date_lt: None,
            period_of_report_date_lte: None,
            period_of_report_date_gt: None,
            period_of_report_date_gte: None,
            timeframe: Some("quarterly".to_string()),
            include_sources: None,
            limit: None,
            sort: None,
            order: None,
            params: None,
        };

        assert_eq!(request.path().unwrap(), "/vX/reference/financials");
        let pairs = query_pairs(&request).unwrap();
        assert!(pairs.contains(&("company_name.search".to_string(), "apple".to_string())));
        assert!(pairs.contains(&("filing_date.gte".to_string(), "2024-01-01".to_string())));
        assert!(pairs.contains(&("timeframe".to_string(), "quarterly".to_string())));
    }

    #[test]
    fn test_short_data_paths() {
        let interest = ListShortInterestRequest {
            ticker: None,
            settlement_date: None,
            settlement_date_lt: None,
            settlement_date_lte: None,
            settlement_date_gt: None,
            settlement_date_gte: None,
            limit: None,
            sort: None,
            order: None,
            params: None,
        };
        assert_eq!(interest.path().unwrap(), "/stocks/v1/short-interest");
        assert!(query_pairs(&interest).unwrap().is_empty());

        let volume = ListShortVolumeRequest {
            ticker: Some("TSLA".to_string()),
            date: Some(TimeInput::from("2024-03-15")),
            date_lt: None,
            date_lte: None,
            date_gt: None,
            date_gte: None,
            limit: Some(5),
            sort: None,
            order: None,
            params: None,
        };
        assert_eq!(volume.path().unwrap(), "/stocks/v1/short-volume");
        let pairs = query_pairs(&volume).unwrap();
        assert!(pairs.contains(&("date".to_string(), "2024-03-15".to_string())));
    }
}
