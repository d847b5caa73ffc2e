//! MCP tool surface for the Polygon REST API.
//!
//! Every tool runs the same path: deserialize typed parameters, render the
//! endpoint's URL and query, make exactly one upstream call, and return the
//! JSON body verbatim. Failures never become protocol errors; they come
//! back as an `{"error": ...}` payload in the result text.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde_json::json;

use polygon_rest::endpoints::{
    GetAggsRequest, GetDailyOpenCloseAggRequest, GetExchangesRequest,
    GetFuturesContractDetailsRequest, GetFuturesProductDetailsRequest, GetFuturesSnapshotRequest,
    GetGroupedDailyAggsRequest, GetLastCryptoTradeRequest, GetLastForexQuoteRequest,
    GetLastQuoteRequest, GetLastTradeRequest, GetMarketHolidaysRequest, GetMarketStatusRequest,
    GetPreviousCloseAggRequest, GetRealTimeCurrencyConversionRequest, GetSnapshotAllRequest,
    GetSnapshotCryptoBookRequest, GetSnapshotDirectionRequest, GetSnapshotOptionRequest,
    GetSnapshotTickerRequest, GetTickerDetailsRequest, GetTickerTypesRequest, ListAggsRequest,
    ListBenzingaAnalystInsightsRequest, ListBenzingaAnalystsRequest,
    ListBenzingaConsensusRatingsRequest, ListBenzingaEarningsRequest, ListBenzingaFirmsRequest,
    ListBenzingaGuidanceRequest, ListBenzingaNewsRequest, ListBenzingaRatingsRequest,
    ListConditionsRequest, ListDividendsRequest, ListFuturesAggregatesRequest,
    ListFuturesContractsRequest, ListFuturesMarketStatusesRequest, ListFuturesProductsRequest,
    ListFuturesQuotesRequest, ListFuturesSchedulesByProductCodeRequest,
    ListFuturesSchedulesRequest, ListFuturesTradesRequest, ListInflationRequest, ListIposRequest,
    ListQuotesRequest, ListShortInterestRequest, ListShortVolumeRequest, ListSplitsRequest,
    ListStockFinancialsRequest, ListTickerNewsRequest, ListTickersRequest, ListTradesRequest,
    ListTreasuryYieldsRequest, ListUniversalSnapshotsRequest,
};
use polygon_rest::{query_pairs, Endpoint, PolygonClient, RestResult, RestTransport};

use crate::{SERVER_NAME, SERVER_VERSION};

/// MCP server fronting the Polygon REST API.
#[derive(Clone)]
pub struct PolygonMcpServer {
    /// Upstream transport shared by every tool call.
    upstream: Arc<dyn RestTransport>,
    /// Tool router for MCP tools.
    tool_router: ToolRouter<Self>,
}

impl PolygonMcpServer {
    /// Creates a server that talks to the production API with `api_key`.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_transport(Arc::new(PolygonClient::new(api_key)))
    }

    /// Creates a server over an arbitrary transport.
    #[must_use]
    pub fn with_transport(upstream: Arc<dyn RestTransport>) -> Self {
        Self {
            upstream,
            tool_router: Self::tool_router(),
        }
    }

    /// Names of every registered tool.
    #[must_use]
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }

    /// Runs one request through the shared fetch path, containing every
    /// failure as an error payload in the result text.
    async fn forward<E: Endpoint>(&self, request: &E) -> Result<CallToolResult, McpError> {
        let payload = match self.fetch(request).await {
            Ok(body) => body,
            Err(err) => {
                let message = format!("{:#}", anyhow::Error::new(err));
                tracing::warn!("tool call failed: {message}");
                json!({ "error": message }).to_string()
            }
        };
        Ok(CallToolResult::success(vec![Content::text(payload)]))
    }

    /// Renders the request, performs the single upstream GET, and checks
    /// the body is UTF-8 JSON before passing it through untouched.
    async fn fetch<E: Endpoint>(&self, request: &E) -> RestResult<String> {
        let path = request.path()?;
        let query = query_pairs(request)?;
        let bytes = self.upstream.get_raw(&path, &query).await?;
        let body = std::str::from_utf8(&bytes)?;
        serde_json::from_str::<serde_json::Value>(body)?;
        Ok(body.to_owned())
    }
}

#[tool_router]
impl PolygonMcpServer {
    // ============ Aggregates ============

    /// Custom-window aggregate bars for a ticker.
    #[tool(
        description = "Get aggregate bars for a ticker over a given date range in custom time window sizes"
    )]
    pub async fn get_aggs(
        &self,
        Parameters(request): Parameters<GetAggsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Paged variant of `get_aggs`.
    #[tool(description = "Iterate through aggregate bars for a ticker over a given date range")]
    pub async fn list_aggs(
        &self,
        Parameters(request): Parameters<ListAggsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Whole-market daily bars for one date.
    #[tool(description = "Get daily aggregate bars for the entire market on a given date")]
    pub async fn get_grouped_daily_aggs(
        &self,
        Parameters(request): Parameters<GetGroupedDailyAggsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Open/close summary for a ticker on one date.
    #[tool(description = "Get the open, close and afterhours prices for a ticker on a given date")]
    pub async fn get_daily_open_close_agg(
        &self,
        Parameters(request): Parameters<GetDailyOpenCloseAggRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Previous trading day's bar for a ticker.
    #[tool(description = "Get the previous trading day's OHLC for a ticker")]
    pub async fn get_previous_close_agg(
        &self,
        Parameters(request): Parameters<GetPreviousCloseAggRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    // ============ Trades & Quotes ============

    /// Tick-level trade history.
    #[tool(description = "List tick-level trades for a ticker")]
    pub async fn list_trades(
        &self,
        Parameters(request): Parameters<ListTradesRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Latest trade for a ticker.
    #[tool(description = "Get the most recent trade for a ticker")]
    pub async fn get_last_trade(
        &self,
        Parameters(request): Parameters<GetLastTradeRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Latest trade for a crypto pair.
    #[tool(description = "Get the most recent trade for a crypto currency pair")]
    pub async fn get_last_crypto_trade(
        &self,
        Parameters(request): Parameters<GetLastCryptoTradeRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Tick-level NBBO quote history.
    #[tool(description = "List NBBO quotes for a ticker")]
    pub async fn list_quotes(
        &self,
        Parameters(request): Parameters<ListQuotesRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Latest NBBO quote for a ticker.
    #[tool(description = "Get the most recent NBBO quote for a ticker")]
    pub async fn get_last_quote(
        &self,
        Parameters(request): Parameters<GetLastQuoteRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Latest quote for a forex pair.
    #[tool(description = "Get the most recent quote for a forex currency pair")]
    pub async fn get_last_forex_quote(
        &self,
        Parameters(request): Parameters<GetLastForexQuoteRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Currency conversion at the live rate.
    #[tool(description = "Convert an amount between currencies at the current exchange rate")]
    pub async fn get_real_time_currency_conversion(
        &self,
        Parameters(request): Parameters<GetRealTimeCurrencyConversionRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    // ============ Snapshots ============

    /// Unified snapshots across asset classes.
    #[tool(description = "Get unified snapshots across asset classes for the requested tickers")]
    pub async fn list_universal_snapshots(
        &self,
        Parameters(request): Parameters<ListUniversalSnapshotsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Snapshot of a whole market.
    #[tool(description = "Get snapshots of every ticker in a market, or a chosen subset")]
    pub async fn get_snapshot_all(
        &self,
        Parameters(request): Parameters<GetSnapshotAllRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Top gainers or losers in a market.
    #[tool(description = "Get the top market movers (gainers or losers) for a market")]
    pub async fn get_snapshot_direction(
        &self,
        Parameters(request): Parameters<GetSnapshotDirectionRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Snapshot of one ticker.
    #[tool(description = "Get the snapshot of a single ticker")]
    pub async fn get_snapshot_ticker(
        &self,
        Parameters(request): Parameters<GetSnapshotTickerRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Snapshot of one option contract.
    #[tool(description = "Get the snapshot of an option contract for an underlying asset")]
    pub async fn get_snapshot_option(
        &self,
        Parameters(request): Parameters<GetSnapshotOptionRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Crypto order book snapshot.
    #[tool(description = "Get the level 2 order book snapshot for a crypto ticker")]
    pub async fn get_snapshot_crypto_book(
        &self,
        Parameters(request): Parameters<GetSnapshotCryptoBookRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    // ============ Market Reference ============

    /// Upcoming holiday schedule.
    #[tool(description = "Get upcoming market holidays and their open/close times")]
    pub async fn get_market_holidays(
        &self,
        Parameters(request): Parameters<GetMarketHolidaysRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Live exchange status.
    #[tool(description = "Get the current trading status of the exchanges")]
    pub async fn get_market_status(
        &self,
        Parameters(request): Parameters<GetMarketStatusRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Symbol directory across markets.
    #[tool(description = "Query supported ticker symbols across stocks, indices, forex and crypto")]
    pub async fn list_tickers(
        &self,
        Parameters(request): Parameters<ListTickersRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Reference details for one symbol.
    #[tool(description = "Get detailed reference data for a ticker")]
    pub async fn get_ticker_details(
        &self,
        Parameters(request): Parameters<GetTickerDetailsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// News mentioning a ticker.
    #[tool(description = "Get recent news articles mentioning a ticker")]
    pub async fn list_ticker_news(
        &self,
        Parameters(request): Parameters<ListTickerNewsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Known ticker classifications.
    #[tool(description = "List the ticker types Polygon classifies symbols into")]
    pub async fn get_ticker_types(
        &self,
        Parameters(request): Parameters<GetTickerTypesRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Historical splits.
    #[tool(description = "List historical stock splits")]
    pub async fn list_splits(
        &self,
        Parameters(request): Parameters<ListSplitsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Historical dividends.
    #[tool(description = "List historical cash dividends")]
    pub async fn list_dividends(
        &self,
        Parameters(request): Parameters<ListDividendsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Condition code directory.
    #[tool(description = "List trade and quote condition codes per SIP")]
    pub async fn list_conditions(
        &self,
        Parameters(request): Parameters<ListConditionsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Exchange directory.
    #[tool(description = "List exchanges and market centers Polygon covers")]
    pub async fn get_exchanges(
        &self,
        Parameters(request): Parameters<GetExchangesRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    // ============ Fundamentals ============

    /// Financial statements from SEC filings.
    #[tool(description = "Get fundamental financial data extracted from SEC filings")]
    pub async fn list_stock_financials(
        &self,
        Parameters(request): Parameters<ListStockFinancialsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// IPO calendar and history.
    #[tool(description = "List upcoming and historical initial public offerings")]
    pub async fn list_ipos(
        &self,
        Parameters(request): Parameters<ListIposRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Short interest reports.
    #[tool(description = "Get bi-monthly short interest reports for stocks")]
    pub async fn list_short_interest(
        &self,
        Parameters(request): Parameters<ListShortInterestRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Daily short volume.
    #[tool(description = "Get daily short volume totals per venue")]
    pub async fn list_short_volume(
        &self,
        Parameters(request): Parameters<ListShortVolumeRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    // ============ Economy ============

    /// Treasury yield curve series.
    #[tool(description = "Get daily treasury yield curve values")]
    pub async fn list_treasury_yields(
        &self,
        Parameters(request): Parameters<ListTreasuryYieldsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Inflation series.
    #[tool(description = "Get consumer price index and related inflation series")]
    pub async fn list_inflation(
        &self,
        Parameters(request): Parameters<ListInflationRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    // ============ Benzinga Research ============

    /// Analyst insights with rationale.
    #[tool(description = "List Benzinga analyst insights (experimental)")]
    pub async fn list_benzinga_analyst_insights(
        &self,
        Parameters(request): Parameters<ListBenzingaAnalystInsightsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Analyst directory.
    #[tool(description = "List analysts tracked by Benzinga (experimental)")]
    pub async fn list_benzinga_analysts(
        &self,
        Parameters(request): Parameters<ListBenzingaAnalystsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Consensus rating for one ticker.
    #[tool(description = "Get Benzinga consensus ratings for a ticker (experimental)")]
    pub async fn list_benzinga_consensus_ratings(
        &self,
        Parameters(request): Parameters<ListBenzingaConsensusRatingsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Earnings calendar with surprises.
    #[tool(
        description = "List Benzinga earnings announcements with estimates and surprises (experimental)"
    )]
    pub async fn list_benzinga_earnings(
        &self,
        Parameters(request): Parameters<ListBenzingaEarningsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Research firm directory.
    #[tool(description = "List research firms tracked by Benzinga (experimental)")]
    pub async fn list_benzinga_firms(
        &self,
        Parameters(request): Parameters<ListBenzingaFirmsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Company guidance records.
    #[tool(description = "List Benzinga company guidance records (experimental)")]
    pub async fn list_benzinga_guidance(
        &self,
        Parameters(request): Parameters<ListBenzingaGuidanceRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Newswire articles.
    #[tool(description = "List Benzinga newswire articles (experimental)")]
    pub async fn list_benzinga_news(
        &self,
        Parameters(request): Parameters<ListBenzingaNewsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Individual analyst ratings.
    #[tool(description = "List Benzinga analyst ratings with price targets (experimental)")]
    pub async fn list_benzinga_ratings(
        &self,
        Parameters(request): Parameters<ListBenzingaRatingsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    // ============ Futures ============

    /// Aggregate bars for a futures contract.
    #[tool(description = "Get aggregate bars for a futures contract")]
    pub async fn list_futures_aggregates(
        &self,
        Parameters(request): Parameters<ListFuturesAggregatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Contract directory.
    #[tool(description = "List futures contracts and their lifecycle dates")]
    pub async fn list_futures_contracts(
        &self,
        Parameters(request): Parameters<ListFuturesContractsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Details for one contract.
    #[tool(description = "Get details for a single futures contract")]
    pub async fn get_futures_contract_details(
        &self,
        Parameters(request): Parameters<GetFuturesContractDetailsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Product directory.
    #[tool(description = "List futures products")]
    pub async fn list_futures_products(
        &self,
        Parameters(request): Parameters<ListFuturesProductsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Details for one product.
    #[tool(description = "Get details for a single futures product")]
    pub async fn get_futures_product_details(
        &self,
        Parameters(request): Parameters<GetFuturesProductDetailsRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Tick-level futures quotes.
    #[tool(description = "List tick-level quotes for a futures contract")]
    pub async fn list_futures_quotes(
        &self,
        Parameters(request): Parameters<ListFuturesQuotesRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Tick-level futures trades.
    #[tool(description = "List tick-level trades for a futures contract")]
    pub async fn list_futures_trades(
        &self,
        Parameters(request): Parameters<ListFuturesTradesRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Session schedules across products.
    #[tool(description = "List futures trading session schedules across products")]
    pub async fn list_futures_schedules(
        &self,
        Parameters(request): Parameters<ListFuturesSchedulesRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Session schedules for one product.
    #[tool(description = "List trading session schedules for a single futures product")]
    pub async fn list_futures_schedules_by_product_code(
        &self,
        Parameters(request): Parameters<ListFuturesSchedulesByProductCodeRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Market status per product.
    #[tool(description = "Get market status per futures product")]
    pub async fn list_futures_market_statuses(
        &self,
        Parameters(request): Parameters<ListFuturesMarketStatusesRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }

    /// Futures contract snapshots.
    #[tool(description = "Get snapshots of futures contracts")]
    pub async fn get_futures_snapshot(
        &self,
        Parameters(request): Parameters<GetFuturesSnapshotRequest>,
    ) -> Result<CallToolResult, McpError> {
        self.forward(&request).await
    }
}

#[tool_handler]
impl ServerHandler for PolygonMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
                title: Some("Polygon.io Market Data".to_string()),
                icons: None,
                website_url: Some("https://polygon.io".to_string()),
            },
            instructions: Some(
                "Query Polygon.io market data: aggregates, trades, quotes, snapshots, \
                 reference data, fundamentals, Benzinga research and futures. Tools return \
                 the upstream JSON verbatim; failures come back as an {\"error\": ...} payload \
                 in the result text."
                    .to_string(),
            ),
        }
    }
}
