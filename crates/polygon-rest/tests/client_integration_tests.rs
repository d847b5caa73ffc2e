//! Integration tests for the HTTP transport against a mock upstream.

use httpmock::Method::GET;
use httpmock::MockServer;
use polygon_rest::endpoints::{GetDailyOpenCloseAggRequest, ListTradesRequest};
use polygon_rest::{query_pairs, Endpoint, PolygonClient, RestError, RestTransport, TimeInput};

// ===== REQUEST SHAPE =====

#[tokio::test]
async fn sends_bearer_token_and_user_agent() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/marketstatus/now")
            .header("authorization", "Bearer test-key")
            .header(
                "user-agent",
                format!("polygon-rest/{}", env!("CARGO_PKG_VERSION")),
            );
        then.status(200).body("{}");
    });

    let client = PolygonClient::with_base_url("test-key", server.base_url());
    client
        .get_raw("/v1/marketstatus/now", &[])
        .await
        .expect("request should succeed");

    mock.assert();
}

#[tokio::test]
async fn renders_query_pairs_on_the_wire() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v3/trades/AAPL")
            .query_param("timestamp.gte", "2024-01-02")
            .query_param("limit", "10")
            .query_param("order", "asc");
        then.status(200).body(r#"{"results":[]}"#);
    });

    let request = ListTradesRequest {
        ticker: "AAPL".to_string(),
        timestamp: None,
        timestamp_lt: None,
        timestamp_lte: None,
        timestamp_gt: None,
        timestamp_gte: Some(TimeInput::from("2024-01-02")),
        limit: Some(10),
        sort: None,
        order: Some("asc".to_string()),
        params: None,
    };

    let client = PolygonClient::with_base_url("test-key", server.base_url());
    client
        .get_raw(&request.path().unwrap(), &query_pairs(&request).unwrap())
        .await
        .expect("request should succeed");

    mock.assert();
}

#[tokio::test]
async fn joins_base_urls_with_trailing_slashes() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/aggs/ticker/AAPL/prev");
        then.status(200).body("{}");
    });

    let client = PolygonClient::with_base_url("test-key", format!("{}/", server.base_url()));
    client
        .get_raw("/v2/aggs/ticker/AAPL/prev", &[])
        .await
        .expect("request should succeed");

    mock.assert();
}

// ===== RESPONSE HANDLING =====

#[tokio::test]
async fn returns_the_body_bytes_untouched() {
    // Whitespace and key order a deserialize/reserialize cycle would destroy.
    let body = "{\n  \"status\": \"OK\",\n  \"ticker\": \"AAPL\",\n  \"close\": 185.64\n}";

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/open-close/AAPL/2024-01-02");
        then.status(200).body(body);
    });

    let request = GetDailyOpenCloseAggRequest {
        ticker: "AAPL".to_string(),
        date: "2024-01-02".to_string(),
        adjusted: None,
        params: None,
    };

    let client = PolygonClient::with_base_url("test-key", server.base_url());
    let bytes = client
        .get_raw(&request.path().unwrap(), &query_pairs(&request).unwrap())
        .await
        .expect("request should succeed");

    assert_eq!(&bytes[..], body.as_bytes());
}

#[tokio::test]
async fn non_success_status_surfaces_the_body_as_the_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v3/trades/AAPL");
        then.status(401)
            .body(r#"{"status":"ERROR","message":"Unknown API Key"}"#);
    });

    let client = PolygonClient::with_base_url("bad-key", server.base_url());
    let err = client
        .get_raw("/v3/trades/AAPL", &[])
        .await
        .expect_err("401 should map to an error");

    assert_eq!(err.status_code(), Some(401));
    assert_eq!(
        err.to_string(),
        r#"{"status":"ERROR","message":"Unknown API Key"}"#
    );
    assert!(matches!(err, RestError::Status { .. }));
}

#[tokio::test]
async fn connection_failures_map_to_request_errors() {
    // Nothing is listening on this port.
    let client = PolygonClient::with_base_url("test-key", "http://127.0.0.1:9");
    let err = client
        .get_raw("/v1/marketstatus/now", &[])
        .await
        .expect_err("connect should fail");

    assert!(matches!(err, RestError::Request(_)));
}
