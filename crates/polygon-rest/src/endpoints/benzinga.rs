//! Benzinga research endpoints: analyst coverage, earnings, guidance, news.
//!
//! These routes expose large filter families. Every filter keeps the flat
//! `name_gt` / `name_any_of` spelling here; the shared query renderer folds
//! them into the dotted form the API expects.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{required, Endpoint};
use crate::error::RestResult;
use crate::types::TimeInput;

/// Analyst insights and their rationale.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListBenzingaAnalystInsightsRequest {
    /// Exact insight date.
    pub date: Option<TimeInput>,
    /// Comma-separated list of insight dates.
    pub date_any_of: Option<String>,
    /// Dates strictly after this value.
    pub date_gt: Option<TimeInput>,
    /// Dates at or after this value.
    pub date_gte: Option<TimeInput>,
    /// Dates strictly before this value.
    pub date_lt: Option<TimeInput>,
    /// Dates at or before this value.
    pub date_lte: Option<TimeInput>,
    /// Exact ticker symbol.
    pub ticker: Option<String>,
    /// Comma-separated list of ticker symbols.
    pub ticker_any_of: Option<String>,
    /// Tickers lexically after this value.
    pub ticker_gt: Option<String>,
    /// Tickers at or lexically after this value.
    pub ticker_gte: Option<String>,
    /// Tickers lexically before this value.
    pub ticker_lt: Option<String>,
    /// Tickers at or lexically before this value.
    pub ticker_lte: Option<String>,
    /// Exact last-updated timestamp.
    pub last_updated: Option<String>,
    /// Comma-separated list of last-updated timestamps.
    pub last_updated_any_of: Option<String>,
    /// Last-updated strictly after this value.
    pub last_updated_gt: Option<String>,
    /// Last-updated at or after this value.
    pub last_updated_gte: Option<String>,
    /// Last-updated strictly before this value.
    pub last_updated_lt: Option<String>,
    /// Last-updated at or before this value.
    pub last_updated_lte: Option<String>,
    /// Exact firm name.
    pub firm: Option<String>,
    /// Comma-separated list of firm names.
    pub firm_any_of: Option<String>,
    /// Firms lexically after this value.
    pub firm_gt: Option<String>,
    /// Firms at or lexically after this value.
    pub firm_gte: Option<String>,
    /// Firms lexically before this value.
    pub firm_lt: Option<String>,
    /// Firms at or lexically before this value.
    pub firm_lte: Option<String>,
    /// Exact rating action.
    pub rating_action: Option<String>,
    /// Comma-separated list of rating actions.
    pub rating_action_any_of: Option<String>,
    /// Rating actions lexically after this value.
    pub rating_action_gt: Option<String>,
    /// Rating actions at or lexically after this value.
    pub rating_action_gte: Option<String>,
    /// Rating actions lexically before this value.
    pub rating_action_lt: Option<String>,
    /// Rating actions at or lexically before this value.
    pub rating_action_lte: Option<String>,
    /// Exact Benzinga firm identifier.
    pub benzinga_firm_id: Option<String>,
    /// Comma-separated list of Benzinga firm identifiers.
    pub benzinga_firm_id_any_of: Option<String>,
    /// Firm identifiers after this value.
    pub benzinga_firm_id_gt: Option<String>,
    /// Firm identifiers at or after this value.
    pub benzinga_firm_id_gte: Option<String>,
    /// Firm identifiers before this value.
    pub benzinga_firm_id_lt: Option<String>,
    /// Firm identifiers at or before this value.
    pub benzinga_firm_id_lte: Option<String>,
    /// Exact Benzinga rating identifier.
    pub benzinga_rating_id: Option<String>,
    /// Comma-separated list of Benzinga rating identifiers.
    pub benzinga_rating_id_any_of: Option<String>,
    /// Rating identifiers after this value.
    pub benzinga_rating_id_gt: Option<String>,
    /// Rating identifiers at or after this value.
    pub benzinga_rating_id_gte: Option<String>,
    /// Rating identifiers before this value.
    pub benzinga_rating_id_lt: Option<String>,
    /// Rating identifiers at or before this value.
    pub benzinga_rating_id_lte: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListBenzingaAnalystInsightsRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/benzinga/vX/analyst-insights".to_string())
    }
}

/// Analysts tracked by Benzinga.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListBenzingaAnalystsRequest {
    /// Exact Benzinga analyst identifier.
    pub benzinga_id: Option<String>,
    /// Comma-separated list of analyst identifiers.
    pub benzinga_id_any_of: Option<String>,
    /// Analyst identifiers after this value.
    pub benzinga_id_gt: Option<String>,
    /// Analyst identifiers at or after this value.
    pub benzinga_id_gte: Option<String>,
    /// Analyst identifiers before this value.
    pub benzinga_id_lt: Option<String>,
    /// Analyst identifiers at or before this value.
    pub benzinga_id_lte: Option<String>,
    /// Exact Benzinga firm identifier.
    pub benzinga_firm_id: Option<String>,
    /// Comma-separated list of firm identifiers.
    pub benzinga_firm_id_any_of: Option<String>,
    /// Firm identifiers after this value.
    pub benzinga_firm_id_gt: Option<String>,
    /// Firm identifiers at or after this value.
    pub benzinga_firm_id_gte: Option<String>,
    /// Firm identifiers before this value.
    pub benzinga_firm_id_lt: Option<String>,
    /// Firm identifiers at or before this value.
    pub benzinga_firm_id_lte: Option<String>,
    /// Exact firm name.
    pub firm_name: Option<String>,
    /// Comma-separated list of firm names.
    pub firm_name_any_of: Option<String>,
    /// Firm names lexically after this value.
    pub firm_name_gt: Option<String>,
    /// Firm names at or lexically after this value.
    pub firm_name_gte: Option<String>,
    /// Firm names lexically before this value.
    pub firm_name_lt: Option<String>,
    /// Firm names at or lexically before this value.
    pub firm_name_lte: Option<String>,
    /// Exact analyst full name.
    pub full_name: Option<String>,
    /// Comma-separated list of analyst full names.
    pub full_name_any_of: Option<String>,
    /// Full names lexically after this value.
    pub full_name_gt: Option<String>,
    /// Full names at or lexically after this value.
    pub full_name_gte: Option<String>,
    /// Full names lexically before this value.
    pub full_name_lt: Option<String>,
    /// Full names at or lexically before this value.
    pub full_name_lte: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListBenzingaAnalystsRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/benzinga/vX/analysts".to_string())
    }
}

/// Consensus rating and price target for one ticker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListBenzingaConsensusRatingsRequest {
    /// Ticker symbol the consensus is computed for.
    pub ticker: String,
    /// Exact consensus date.
    pub date: Option<TimeInput>,
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
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListBenzingaConsensusRatingsRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        required("ticker", &self.ticker)?;
        Ok("/benzinga/vX/consensus-ratings".to_string())
    }
}

/// Earnings announcements with estimates and surprises.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListBenzingaEarningsRequest {
    /// Exact announcement date.
    pub date: Option<TimeInput>,
    /// Comma-separated list of announcement dates.
    pub date_any_of: Option<String>,
    /// Dates strictly after this value.
    pub date_gt: Option<TimeInput>,
    /// Dates at or after this value.
    pub date_gte: Option<TimeInput>,
    /// Dates strictly before this value.
    pub date_lt: Option<TimeInput>,
    /// Dates at or before this value.
    pub date_lte: Option<TimeInput>,
    /// Exact ticker symbol.
    pub ticker: Option<String>,
    /// Comma-separated list of ticker symbols.
    pub ticker_any_of: Option<String>,
    /// Tickers lexically after this value.
    pub ticker_gt: Option<String>,
    /// Tickers at or lexically after this value.
    pub ticker_gte: Option<String>,
    /// Tickers lexically before this value.
    pub ticker_lt: Option<String>,
    /// Tickers at or lexically before this value.
    pub ticker_lte: Option<String>,
    /// Exact importance level (0-5).
    pub importance: Option<u32>,
    /// Comma-separated list of importance levels.
    pub importance_any_of: Option<String>,
    /// Importance strictly above this value.
    pub importance_gt: Option<u32>,
    /// Importance at or above this value.
    pub importance_gte: Option<u32>,
    /// Importance strictly below this value.
    pub importance_lt: Option<u32>,
    /// Importance at or below this value.
    pub importance_lte: Option<u32>,
    /// Exact last-updated timestamp.
    pub last_updated: Option<String>,
    /// Comma-separated list of last-updated timestamps.
    pub last_updated_any_of: Option<String>,
    /// Last-updated strictly after this value.
    pub last_updated_gt: Option<String>,
    /// Last-updated at or after this value.
    pub last_updated_gte: Option<String>,
    /// Last-updated strictly before this value.
    pub last_updated_lt: Option<String>,
    /// Last-updated at or before this value.
    pub last_updated_lte: Option<String>,
    /// Exact date status (`confirmed`, `projected`, ...).
    pub date_status: Option<String>,
    /// Comma-separated list of date statuses.
    pub date_status_any_of: Option<String>,
    /// Date statuses lexically after this value.
    pub date_status_gt: Option<String>,
    /// Date statuses at or lexically after this value.
    pub date_status_gte: Option<String>,
    /// Date statuses lexically before this value.
    pub date_status_lt: Option<String>,
    /// Date statuses at or lexically before this value.
    pub date_status_lte: Option<String>,
    /// Exact EPS surprise percentage.
    pub eps_surprise_percent: Option<f64>,
    /// Comma-separated list of EPS surprise percentages.
    pub eps_surprise_percent_any_of: Option<String>,
    /// EPS surprise strictly above this value.
    pub eps_surprise_percent_gt: Option<f64>,
    /// EPS surprise at or above this value.
    pub eps_surprise_percent_gte: Option<f64>,
    /// EPS surprise strictly below this value.
    pub eps_surprise_percent_lt: Option<f64>,
    /// EPS surprise at or below this value.
    pub eps_surprise_percent_lte: Option<f64>,
    /// Exact revenue surprise percentage.
    pub revenue_surprise_percent: Option<f64>,
    /// Comma-separated list of revenue surprise percentages.
    pub revenue_surprise_percent_any_of: Option<String>,
    /// Revenue surprise strictly above this value.
    pub revenue_surprise_percent_gt: Option<f64>,
    /// Revenue surprise at or above this value.
    pub revenue_surprise_percent_gte: Option<f64>,
    /// Revenue surprise strictly below this value.
    pub revenue_surprise_percent_lt: Option<f64>,
    /// Revenue surprise at or below this value.
    pub revenue_surprise_percent_lte: Option<f64>,
    /// Exact fiscal year.
    pub fiscal_year: Option<i32>,
    /// Comma-separated list of fiscal years.
    pub fiscal_year_any_of: Option<String>,
    /// Fiscal years strictly after this value.
    pub fiscal_year_gt: Option<i32>,
    /// Fiscal years at or after this value.
    pub fiscal_year_gte: Option<i32>,
    /// Fiscal years strictly before this value.
    pub fiscal_year_lt: Option<i32>,
    /// Fiscal years at or before this value.
    pub fiscal_year_lte: Option<i32>,
    /// Exact fiscal period (`Q1`, `Q2`, `FY`, ...).
    pub fiscal_period: Option<String>,
    /// Comma-separated list of fiscal periods.
    pub fiscal_period_any_of: Option<String>,
    /// Fiscal periods lexically after this value.
    pub fiscal_period_gt: Option<String>,
    /// Fiscal periods at or lexically after this value.
    pub fiscal_period_gte: Option<String>,
    /// Fiscal periods lexically before this value.
    pub fiscal_period_lt: Option<String>,
    /// Fiscal periods at or lexically before this value.
    pub fiscal_period_lte: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListBenzingaEarningsRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/benzinga/vX/earnings".to_string())
    }
}

/// Research firms tracked by Benzinga.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListBenzingaFirmsRequest {
    /// Exact Benzinga firm identifier.
    pub benzinga_id: Option<String>,
    /// Comma-separated list of firm identifiers.
    pub benzinga_id_any_of: Option<String>,
    /// Firm identifiers after this value.
    pub benzinga_id_gt: Option<String>,
    /// Firm identifiers at or after this value.
    pub benzinga_id_gte: Option<String>,
    /// Firm identifiers before this value.
    pub benzinga_id_lt: Option<String>,
    /// Firm identifiers at or before this value.
    pub benzinga_id_lte: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListBenzingaFirmsRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/benzinga/vX/firms".to_string())
    }
}

/// Company guidance announcements.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListBenzingaGuidanceRequest {
    /// Exact announcement date.
    pub date: Option<TimeInput>,
    /// Comma-separated list of announcement dates.
    pub date_any_of: Option<String>,
    /// Dates strictly after this value.
    pub date_gt: Option<TimeInput>,
    /// Dates at or after this value.
    pub date_gte: Option<TimeInput>,
    /// Dates strictly before this value.
    pub date_lt: Option<TimeInput>,
    /// Dates at or before this value.
    pub date_lte: Option<TimeInput>,
    /// Exact ticker symbol.
    pub ticker: Option<String>,
    /// Comma-separated list of ticker symbols.
    pub ticker_any_of: Option<String>,
    /// Tickers lexically after this value.
    pub ticker_gt: Option<String>,
    /// Tickers at or lexically after this value.
    pub ticker_gte: Option<String>,
    /// Tickers lexically before this value.
    pub ticker_lt: Option<String>,
    /// Tickers at or lexically before this value.
    pub ticker_lte: Option<String>,
    /// Exact positioning (`primary` or `secondary`).
    pub positioning: Option<String>,
    /// Comma-separated list of positioning values.
    pub positioning_any_of: Option<String>,
    /// Positioning values lexically after this value.
    pub positioning_gt: Option<String>,
    /// Positioning values at or lexically after this value.
    pub positioning_gte: Option<String>,
    /// Positioning values lexically before this value.
    pub positioning_lt: Option<String>,
    /// Positioning values at or lexically before this value.
    pub positioning_lte: Option<String>,
    /// Exact importance level (0-5).
    pub importance: Option<u32>,
    /// Comma-separated list of importance levels.
    pub importance_any_of: Option<String>,
    /// Importance strictly above this value.
    pub importance_gt: Option<u32>,
    /// Importance at or above this value.
    pub importance_gte: Option<u32>,
    /// Importance strictly below this value.
    pub importance_lt: Option<u32>,
    /// Importance at or below this value.
    pub importance_lte: Option<u32>,
    /// Exact last-updated timestamp.
    pub last_updated: Option<String>,
    /// Comma-separated list of last-updated timestamps.
    pub last_updated_any_of: Option<String>,
    /// Last-updated strictly after this value.
    pub last_updated_gt: Option<String>,
    /// Last-updated at or after this value.
    pub last_updated_gte: Option<String>,
    /// Last-updated strictly before this value.
    pub last_updated_lt: Option<String>,
    /// Last-updated at or before this value.
    pub last_updated_lte: Option<String>,
    /// Exact fiscal year.
    pub fiscal_year: Option<i32>,
    /// Comma-separated list of fiscal years.
    pub fiscal_year_any_of: Option<String>,
    /// Fiscal years strictly after this value.
    pub fiscal_year_gt: Option<i32>,
    /// Fiscal years at or after this value.
    pub fiscal_year_gte: Option<i32>,
    /// Fiscal years strictly before this value.
    pub fiscal_year_lt: Option<i32>,
    /// Fiscal years at or before this value.
    pub fiscal_year_lte: Option<i32>,
    /// Exact fiscal period (`Q1`, `Q2`, `FY`, ...).
    pub fiscal_period: Option<String>,
    /// Comma-separated list of fiscal periods.
    pub fiscal_period_any_of: Option<String>,
    /// Fiscal periods lexically after this value.
    pub fiscal_period_gt: Option<String>,
    /// Fiscal periods at or lexically after this value.
    pub fiscal_period_gte: Option<String>,
    /// Fiscal periods lexically before this value.
    pub fiscal_period_lt: Option<String>,
    /// Fiscal periods at or lexically before this value.
    pub fiscal_period_lte: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListBenzingaGuidanceRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/benzinga/vX/guidance".to_string())
    }
}

/// Benzinga newswire articles.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListBenzingaNewsRequest {
    /// Exact publication timestamp.
    pub published: Option<String>,
    /// Comma-separated list of publication timestamps.
    pub published_any_of: Option<String>,
    /// Published strictly after this value.
    pub published_gt: Option<String>,
    /// Published at or after this value.
    pub published_gte: Option<String>,
    /// Published strictly before this value.
    pub published_lt: Option<String>,
    /// Published at or before this value.
    pub published_lte: Option<String>,
    /// Exact last-updated timestamp.
    pub last_updated: Option<String>,
    /// Comma-separated list of last-updated timestamps.
    pub last_updated_any_of: Option<String>,
    /// Last-updated strictly after this value.
    pub last_updated_gt: Option<String>,
    /// Last-updated at or after this value.
    pub last_updated_gte: Option<String>,
    /// Last-updated strictly before this value.
    pub last_updated_lt: Option<String>,
    /// Last-updated at or before this value.
    pub last_updated_lte: Option<String>,
    /// Articles tagged with exactly these tickers.
    pub tickers: Option<String>,
    /// Articles tagged with all of these tickers.
    pub tickers_all_of: Option<String>,
    /// Articles tagged with any of these tickers.
    pub tickers_any_of: Option<String>,
    /// Articles in exactly these channels.
    pub channels: Option<String>,
    /// Articles in all of these channels.
    pub channels_all_of: Option<String>,
    /// Articles in any of these channels.
    pub channels_any_of: Option<String>,
    /// Articles with exactly these tags.
    pub tags: Option<String>,
    /// Articles with all of these tags.
    pub tags_all_of: Option<String>,
    /// Articles with any of these tags.
    pub tags_any_of: Option<String>,
    /// Exact author name.
    pub author: Option<String>,
    /// Comma-separated list of author names.
    pub author_any_of: Option<String>,
    /// Authors lexically after this value.
    pub author_gt: Option<String>,
    /// Authors at or lexically after this value.
    pub author_gte: Option<String>,
    /// Authors lexically before this value.
    pub author_lt: Option<String>,
    /// Authors at or lexically before this value.
    pub author_lte: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListBenzingaNewsRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/benzinga/vX/news".to_string())
    }
}

/// Individual analyst ratings with price targets.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListBenzingaRatingsRequest {
    /// Exact rating date.
    pub date: Option<TimeInput>,
    /// Comma-separated list of rating dates.
    pub date_any_of: Option<String>,
    /// Dates strictly after this value.
    pub date_gt: Option<TimeInput>,
    /// Dates at or after this value.
    pub date_gte: Option<TimeInput>,
    /// Dates strictly before this value.
    pub date_lt: Option<TimeInput>,
    /// Dates at or before this value.
    pub date_lte: Option<TimeInput>,
    /// Exact ticker symbol.
    pub ticker: Option<String>,
    /// Comma-separated list of ticker symbols.
    pub ticker_any_of: Option<String>,
    /// Tickers lexically after this value.
    pub ticker_gt: Option<String>,
    /// Tickers at or lexically after this value.
    pub ticker_gte: Option<String>,
    /// Tickers lexically before this value.
    pub ticker_lt: Option<String>,
    /// Tickers at or lexically before this value.
    pub ticker_lte: Option<String>,
    /// Exact importance level (0-5).
    pub importance: Option<u32>,
    /// Comma-separated list of importance levels.
    pub importance_any_of: Option<String>,
    /// Importance strictly above this value.
    pub importance_gt: Option<u32>,
    /// Importance at or above this value.
    pub importance_gte: Option<u32>,
    /// Importance strictly below this value.
    pub importance_lt: Option<u32>,
    /// Importance at or below this value.
    pub importance_lte: Option<u32>,
    /// Exact last-updated timestamp.
    pub last_updated: Option<String>,
    /// Comma-separated list of last-updated timestamps.
    pub last_updated_any_of: Option<String>,
    /// Last-updated strictly after this value.
    pub last_updated_gt: Option<String>,
    /// Last-updated at or after this value.
    pub last_updated_gte: Option<String>,
    /// Last-updated strictly before this value.
    pub last_updated_lt: Option<String>,
    /// Last-updated at or before this value.
    pub last_updated_lte: Option<String>,
    /// Exact rating action.
    pub rating_action: Option<String>,
    /// Comma-separated list of rating actions.
    pub rating_action_any_of: Option<String>,
    /// Rating actions lexically after this value.
    pub rating_action_gt: Option<String>,
    /// Rating actions at or lexically after this value.
    pub rating_action_gte: Option<String>,
    /// Rating actions lexically before this value.
    pub rating_action_lt: Option<String>,
    /// Rating actions at or lexically before this value.
    pub rating_action_lte: Option<String>,
    /// Exact price target action.
    pub price_target_action: Option<String>,
    /// Comma-separated list of price target actions.
    pub price_target_action_any_of: Option<String>,
    /// Price target actions lexically after this value.
    pub price_target_action_gt: Option<String>,
    /// Price target actions at or lexically after this value.
    pub price_target_action_gte: Option<String>,
    /// Price target actions lexically before this value.
    pub price_target_action_lt: Option<String>,
    /// Price target actions at or lexically before this value.
    pub price_target_action_lte: Option<String>,
    /// Exact Benzinga rating identifier.
    pub benzinga_id: Option<String>,
    /// Comma-separated list of rating identifiers.
    pub benzinga_id_any_of: Option<String>,
    /// Rating identifiers after this value.
    pub benzinga_id_gt: Option<String>,
    /// Rating identifiers at or after this value.
    pub benzinga_id_gte: Option<String>,
    /// Rating identifiers before this value.
    pub benzinga_id_lt: Option<String>,
    /// Rating identifiers at or before this value.
    pub benzinga_id_lte: Option<String>,
    /// Exact Benzinga analyst identifier.
    pub benzinga_analyst_id: Option<String>,
    /// Comma-separated list of analyst identifiers.
    pub benzinga_analyst_id_any_of: Option<String>,
    /// Analyst identifiers after this value.
    pub benzinga_analyst_id_gt: Option<String>,
    /// Analyst identifiers at or after this value.
    pub benzinga_analyst_id_gte: Option<String>,
    /// Analyst identifiers before this value.
    pub benzinga_analyst_id_lt: Option<String>,
    /// Analyst identifiers at or before this value.
    pub benzinga_analyst_id_lte: Option<String>,
    /// Exact Benzinga firm identifier.
    pub benzinga_firm_id: Option<String>,
    /// Comma-separated list of firm identifiers.
    pub benzinga_firm_id_any_of: Option<String>,
    /// Firm identifiers after this value.
    pub benzinga_firm_id_gt: Option<String>,
    /// Firm identifiers at or after this value.
    pub benzinga_firm_id_gte: Option<String>,
    /// Firm identifiers before this value.
    pub benzinga_firm_id_lt: Option<String>,
    /// Firm identifiers at or before this value.
    pub benzinga_firm_id_lte: Option<String>,
    /// Maximum number of results per page.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort: Option<String>,
    /// Additional query parameters forwarded verbatim.
    pub params: Option<Map<String, Value>>,
}

impl Endpoint for ListBenzingaRatingsRequest {
    const PATH_FIELDS: &'static [&'static str] = &[];

    fn path(&self) -> RestResult<String> {
        Ok("/benzinga/vX/ratings".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::query_pairs;

    fn earnings_request() -> ListBenzingaEarningsRequest {
        serde_json::from_str("{}").unwrap()
    }

    #[test]
    fn test_consensus_ratings_requires_ticker() {
        let request = ListBenzingaConsensusRatingsRequest {
            ticker: String::new(),
            date: None,
            date_gt: None,
            date_gte: None,
            date_lt: None,
            date_lte: None,
            limit: None,
            params: None,
        };
        assert_eq!(
            request.path().unwrap_err().to_string(),
            "missing required parameter: ticker"
        );

        let valid = ListBenzingaConsensusRatingsRequest {
            ticker: "AAPL".to_string(),
            ..request
        };
        assert_eq!(valid.path().unwrap(), "/benzinga/vX/consensus-ratings");
    }

    #[test]
    fn test_earnings_numeric_filters_render_like_the_rest() {
        let request = ListBenzingaEarningsRequest {
            importance_gte: Some(3),
            fiscal_year: Some(2024),
            eps_surprise_percent_gt: Some(1.5),
            fiscal_period_any_of: Some("Q1,Q2".to_string()),
            ..earnings_request()
        };

        let pairs = query_pairs(&request).unwrap();
        assert!(pairs.contains(&("importance.gte".to_string(), "3".to_string())));
        assert!(pairs.contains(&("fiscal_year".to_string(), "2024".to_string())));
        assert!(pairs.contains(&("eps_surprise_percent.gt".to_string(), "1.5".to_string())));
        assert!(pairs.contains(&("fiscal_period.any_of".to_string(), "Q1,Q2".to_string())));
    }

    #[test]
    fn test_news_set_filters_keep_their_stems() {
        let request = ListBenzingaNewsRequest {
            published: None,
            published_any_of: None,
            published_gt: Some("2024-01-01T00:00:00Z".to_string()),
            published_gte: None,
            published_lt: None,
            published_lte: None,
            last_updated: None,
            last_updated_any_of: None,
            last_updated_gt: None,
            last_updated_gte: None,
            last_updated_lt: None,
            last_updated_lte: None,
            tickers: None,
            tickers_all_of: Some("AAPL,MSFT".to_string()),
            tickers_any_of: None,
            channels: None,
            channels_all_of: None,
            channels_any_of: Some("earnings".to_string()),
            tags: None,
            tags_all_of: None,
            tags_any_of: None,
            author: None,
            author_any_of: None,
            author_gt: None,
            author_gte: None,
            author_lt: None,
            author_lte: None,
            limit: None,
            sort: None,
            params: None,
        };

        let pairs = query_pairs(&request).unwrap();
        assert!(pairs.contains(&("published.gt".to_string(), "2024-01-01T00:00:00Z".to_string())));
        assert!(pairs.contains(&("tickers.all_of".to_string(), "AAPL,MSFT".to_string())));
        assert!(pairs.contains(&("channels.any_of".to_string(), "earnings".to_string())));
    }
}
