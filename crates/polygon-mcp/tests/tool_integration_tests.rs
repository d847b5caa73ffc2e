//! Tool-level tests driving the server against a scripted transport.
//!
//! Tool results are checked through their serialized (wire) form, which is
//! what MCP clients actually see.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use serde_json::{json, Value};

use polygon_mcp::PolygonMcpServer;
use polygon_rest::endpoints::{
    GetAggsRequest, GetDailyOpenCloseAggRequest, GetPreviousCloseAggRequest,
    GetSnapshotAllRequest, ListTradesRequest, ListUniversalSnapshotsRequest,
};
use polygon_rest::{RestError, RestTransport, TimeInput};

/// What a scripted transport answers with.
enum Script {
    Body(Bytes),
    Fail(u16, String),
}

#[derive(Clone)]
struct RecordedCall {
    path: String,
    query: Vec<(String, String)>,
}

/// Records every upstream call and answers from a fixed script.
struct SpyTransport {
    script: Script,
    calls: Mutex<Vec<RecordedCall>>,
}

impl SpyTransport {
    fn replying(body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            script: Script::Body(Bytes::from_static(body.as_bytes())),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn replying_bytes(body: &'static [u8]) -> Arc<Self> {
        Arc::new(Self {
            script: Script::Body(Bytes::from_static(body)),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn failing(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            script: Script::Fail(status, body.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RestTransport for SpyTransport {
    async fn get_raw(&self, path: &str, query: &[(String, String)]) -> Result<Bytes, RestError> {
        self.calls.lock().unwrap().push(RecordedCall {
            path: path.to_string(),
            query: query.to_vec(),
        });
        match &self.script {
            Script::Body(bytes) => Ok(bytes.clone()),
            Script::Fail(status, body) => Err(RestError::status(*status, body.clone())),
        }
    }
}

/// Extracts the text payload from a tool result via its wire form.
fn result_text(result: &CallToolResult) -> String {
    let value = serde_json::to_value(result).expect("tool result should serialize");
    value["content"][0]["text"]
        .as_str()
        .expect("tool result should carry text content")
        .to_string()
}

/// Parses the `{"error": ...}` payload out of a tool result.
fn error_message(result: &CallToolResult) -> String {
    let payload: Value =
        serde_json::from_str(&result_text(result)).expect("payload should be JSON");
    payload["error"]
        .as_str()
        .expect("payload should carry an error message")
        .to_string()
}

fn daily_open_close(ticker: &str, date: &str) -> GetDailyOpenCloseAggRequest {
    GetDailyOpenCloseAggRequest {
        ticker: ticker.to_string(),
        date: date.to_string(),
        adjusted: None,
        params: None,
    }
}

// ===== PASS-THROUGH =====

#[tokio::test]
async fn tool_passes_arguments_down_and_body_back_verbatim() {
    let spy = SpyTransport::replying(r#"{"status":"OK","ticker":"AAPL","close":185.64}"#);
    let server = PolygonMcpServer::with_transport(spy.clone());

    let result = server
        .get_daily_open_close_agg(Parameters(daily_open_close("AAPL", "2024-01-02")))
        .await
        .expect("tool should answer");

    assert_eq!(
        result_text(&result),
        r#"{"status":"OK","ticker":"AAPL","close":185.64}"#
    );

    let calls = spy.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "/v1/open-close/AAPL/2024-01-02");
    assert!(calls[0].query.is_empty());
}

#[tokio::test]
async fn body_formatting_survives_the_round_trip() {
    // Key order and whitespace are exactly what the upstream sent.
    let body = "{\n  \"b\": 2,\n  \"a\": 1\n}";
    let spy = SpyTransport::replying_bytes(body.as_bytes());
    let server = PolygonMcpServer::with_transport(spy);

    let result = server
        .get_market_status(Parameters(serde_json::from_value(json!({})).unwrap()))
        .await
        .expect("tool should answer");

    assert_eq!(result_text(&result), body);
}

#[tokio::test]
async fn filters_and_paths_render_through_the_tool_layer() {
    let spy = SpyTransport::replying(r#"{"results":[]}"#);
    let server = PolygonMcpServer::with_transport(spy.clone());

    server
        .list_trades(Parameters(ListTradesRequest {
            ticker: "AAPL".to_string(),
            timestamp: None,
            timestamp_lt: None,
            timestamp_lte: None,
            timestamp_gt: None,
            timestamp_gte: Some(TimeInput::from(1_704_240_600_000_000_000)),
            limit: Some(5),
            sort: None,
            order: Some("asc".to_string()),
            params: None,
        }))
        .await
        .expect("tool should answer");

    let calls = spy.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "/v3/trades/AAPL");
    assert!(calls[0].query.contains(&(
        "timestamp.gte".to_string(),
        "1704240600000000000".to_string()
    )));
    assert!(calls[0]
        .query
        .contains(&("limit".to_string(), "5".to_string())));
    assert!(calls[0].query.iter().all(|(name, _)| name != "ticker"));
}

#[tokio::test]
async fn list_parameters_join_with_commas() {
    let spy = SpyTransport::replying("{}");
    let server = PolygonMcpServer::with_transport(spy.clone());

    server
        .get_snapshot_all(Parameters(GetSnapshotAllRequest {
            market_type: "stocks".to_string(),
            tickers: Some(vec!["AAPL".to_string(), "MSFT".to_string()]),
            include_otc: Some(false),
            params: None,
        }))
        .await
        .expect("tool should answer");

    let calls = spy.calls();
    assert_eq!(calls[0].path, "/v2/snapshot/locale/us/markets/stocks/tickers");
    assert!(calls[0]
        .query
        .contains(&("tickers".to_string(), "AAPL,MSFT".to_string())));
    assert!(calls[0]
        .query
        .contains(&("include_otc".to_string(), "false".to_string())));
}

#[tokio::test]
async fn extra_params_override_typed_fields() {
    let spy = SpyTransport::replying("{}");
    let server = PolygonMcpServer::with_transport(spy.clone());

    server
        .get_aggs(Parameters(GetAggsRequest {
            ticker: "AAPL".to_string(),
            multiplier: 1,
            timespan: "day".to_string(),
            from_: TimeInput::from("2024-01-02"),
            to: TimeInput::from("2024-01-05"),
            adjusted: Some(true),
            sort: None,
            limit: None,
            params: Some(
                json!({"adjusted": "false", "cursor": "abc"})
                    .as_object()
                    .cloned()
                    .unwrap(),
            ),
        }))
        .await
        .expect("tool should answer");

    let calls = spy.calls();
    let adjusted: Vec<_> = calls[0]
        .query
        .iter()
        .filter(|(name, _)| name == "adjusted")
        .collect();
    assert_eq!(adjusted.len(), 1);
    assert_eq!(adjusted[0].1, "false");
    assert!(calls[0]
        .query
        .contains(&("cursor".to_string(), "abc".to_string())));
}

// ===== ERROR CONTAINMENT =====

#[tokio::test]
async fn upstream_failure_becomes_an_error_payload() {
    let spy = SpyTransport::failing(599, "timeout");
    let server = PolygonMcpServer::with_transport(spy.clone());

    let result = server
        .get_previous_close_agg(Parameters(GetPreviousCloseAggRequest {
            ticker: "AAPL".to_string(),
            adjusted: None,
            params: None,
        }))
        .await
        .expect("failures must still produce a result");

    assert_eq!(error_message(&result), "timeout");
    assert_eq!(spy.calls().len(), 1);
}

#[tokio::test]
async fn upstream_error_body_is_forwarded_verbatim() {
    let spy = SpyTransport::failing(401, r#"{"status":"ERROR","message":"Unknown API Key"}"#);
    let server = PolygonMcpServer::with_transport(spy);

    let result = server
        .get_last_trade(Parameters(serde_json::from_value(json!({"ticker": "AAPL"})).unwrap()))
        .await
        .expect("failures must still produce a result");

    assert_eq!(
        error_message(&result),
        r#"{"status":"ERROR","message":"Unknown API Key"}"#
    );
}

#[tokio::test]
async fn missing_required_parameter_fails_before_any_call() {
    let spy = SpyTransport::replying("{}");
    let server = PolygonMcpServer::with_transport(spy.clone());

    let result = server
        .get_daily_open_close_agg(Parameters(daily_open_close("", "2024-01-02")))
        .await
        .expect("failures must still produce a result");

    assert_eq!(error_message(&result), "missing required parameter: ticker");
    assert!(spy.calls().is_empty());
}

#[tokio::test]
async fn required_query_parameters_are_validated_too() {
    let spy = SpyTransport::replying("{}");
    let server = PolygonMcpServer::with_transport(spy.clone());

    let result = server
        .list_universal_snapshots(Parameters(ListUniversalSnapshotsRequest {
            type_: "   ".to_string(),
            ticker_any_of: None,
            order: None,
            limit: None,
            sort: None,
            params: None,
        }))
        .await
        .expect("failures must still produce a result");

    assert_eq!(error_message(&result), "missing required parameter: type");
    assert!(spy.calls().is_empty());
}

#[tokio::test]
async fn malformed_upstream_json_is_reported_not_forwarded() {
    let spy = SpyTransport::replying("not json at all");
    let server = PolygonMcpServer::with_transport(spy.clone());

    let result = server
        .get_market_holidays(Parameters(serde_json::from_value(json!({})).unwrap()))
        .await
        .expect("failures must still produce a result");

    assert!(error_message(&result).contains("not valid JSON"));
    assert_eq!(spy.calls().len(), 1);
}

#[tokio::test]
async fn non_utf8_bodies_are_reported() {
    let spy = SpyTransport::replying_bytes(&[0xff, 0xfe, 0x00]);
    let server = PolygonMcpServer::with_transport(spy);

    let result = server
        .get_market_holidays(Parameters(serde_json::from_value(json!({})).unwrap()))
        .await
        .expect("failures must still produce a result");

    assert!(error_message(&result).contains("not valid UTF-8"));
}

// ===== STATELESSNESS =====

#[tokio::test]
async fn every_call_reaches_upstream_exactly_once() {
    let spy = SpyTransport::replying(r#"{"status":"OK"}"#);
    let server = PolygonMcpServer::with_transport(spy.clone());

    for _ in 0..3 {
        server
            .get_daily_open_close_agg(Parameters(daily_open_close("AAPL", "2024-01-02")))
            .await
            .expect("tool should answer");
    }

    let calls = spy.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls
        .iter()
        .all(|call| call.path == "/v1/open-close/AAPL/2024-01-02"));
}

// ===== REGISTRY =====

#[test]
fn every_endpoint_has_a_registered_tool() {
    let server = PolygonMcpServer::with_transport(SpyTransport::replying("{}"));
    let names = server.tool_names();

    assert_eq!(names.len(), 53);
    assert_eq!(
        names.iter().collect::<HashSet<_>>().len(),
        53,
        "tool names must be unique"
    );

    for expected in [
        "get_aggs",
        "list_aggs",
        "get_grouped_daily_aggs",
        "get_daily_open_close_agg",
        "get_previous_close_agg",
        "list_trades",
        "get_last_trade",
        "get_last_crypto_trade",
        "list_quotes",
        "get_last_quote",
        "get_last_forex_quote",
        "get_real_time_currency_conversion",
        "list_universal_snapshots",
        "get_snapshot_all",
        "get_snapshot_direction",
        "get_snapshot_ticker",
        "get_snapshot_option",
        "get_snapshot_crypto_book",
        "get_market_holidays",
        "get_market_status",
        "list_tickers",
        "get_ticker_details",
        "list_ticker_news",
        "get_ticker_types",
        "list_splits",
        "list_dividends",
        "list_conditions",
        "get_exchanges",
        "list_stock_financials",
        "list_ipos",
        "list_short_interest",
        "list_short_volume",
        "list_treasury_yields",
        "list_inflation",
        "list_benzinga_analyst_insights",
        "list_benzinga_analysts",
        "list_benzinga_consensus_ratings",
        "list_benzinga_earnings",
        "list_benzinga_firms",
        "list_benzinga_guidance",
        "list_benzinga_news",
        "list_benzinga_ratings",
        "list_futures_aggregates",
        "list_futures_contracts",
        "get_futures_contract_details",
        "list_futures_products",
        "get_futures_product_details",
        "list_futures_quotes",
        "list_futures_trades",
        "list_futures_schedules",
        "list_futures_schedules_by_product_code",
        "list_futures_market_statuses",
        "get_futures_snapshot",
    ] {
        assert!(
            names.iter().any(|name| name == expected),
            "missing tool: {expected}"
        );
    }
}
