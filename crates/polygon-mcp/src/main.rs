//! Polygon MCP Server - Polygon.io market data over the Model Context Protocol
//!
//! Transports:
//! - stdio (default): for local MCP clients such as desktop assistants
//! - sse: HTTP server with server-sent events
//! - streamable-http: HTTP server with streamable sessions
//!
//! The transport can be picked with `--transport` or the `MCP_TRANSPORT`
//! environment variable. The Polygon API key is read from `POLYGON_API_KEY`;
//! the server starts without one, but every upstream call will be rejected
//! until it is set.

use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use polygon_mcp::PolygonMcpServer;
use polygon_rest::PolygonClient;

/// Wire transports the server can speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Transport {
    /// Serve over stdin/stdout.
    Stdio,
    /// Serve over HTTP with server-sent events.
    Sse,
    /// Serve over streamable HTTP sessions.
    StreamableHttp,
}

/// Polygon MCP Server - Polygon.io market data tools
#[derive(Parser, Debug)]
#[command(name = "polygon-mcp-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Transport to serve (also read from MCP_TRANSPORT)
    #[arg(long, env = "MCP_TRANSPORT", default_value = "stdio")]
    transport: Transport,

    /// Port to bind for the network transports
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Host to bind for the network transports
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Upstream API base URL (proxies, testing)
    #[arg(long, default_value = polygon_rest::DEFAULT_BASE_URL)]
    base_url: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("polygon_mcp=debug,polygon_rest=debug,rmcp=debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("polygon_mcp=info,polygon_rest=info,rmcp=warn"))
    };

    // stdio carries the protocol itself, so logs must stay on stderr there
    if args.transport == Transport::Stdio {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let api_key = std::env::var("POLYGON_API_KEY").unwrap_or_default();
    if api_key.trim().is_empty() {
        tracing::warn!(
            "POLYGON_API_KEY is not set; upstream calls will fail until it is provided"
        );
    }

    let upstream = Arc::new(PolygonClient::with_base_url(api_key, args.base_url));
    let server = PolygonMcpServer::with_transport(upstream);

    match args.transport {
        Transport::Stdio => run_stdio_server(server).await,
        Transport::Sse => run_sse_server(server, &args.host, args.port).await,
        Transport::StreamableHttp => run_http_server(server, &args.host, args.port).await,
    }
}

/// Run the server with stdio transport (for local MCP clients)
#[cfg(feature = "stdio")]
async fn run_stdio_server(server: PolygonMcpServer) -> anyhow::Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    tracing::info!("Using stdio transport");

    let service = server.serve(stdio()).await?;

    tracing::info!("Polygon MCP Server ready");

    service.waiting().await?;

    Ok(())
}

/// Fallback when the stdio feature is not enabled
#[cfg(not(feature = "stdio"))]
async fn run_stdio_server(_server: PolygonMcpServer) -> anyhow::Result<()> {
    anyhow::bail!("stdio transport not available. Rebuild with: cargo build --features stdio")
}

/// Run the server with the SSE transport
#[cfg(feature = "sse")]
async fn run_sse_server(server: PolygonMcpServer, host: &str, port: u16) -> anyhow::Result<()> {
    use rmcp::transport::sse_server::SseServer;

    let addr = format!("{}:{}", host, port);
    tracing::info!("Using SSE transport on {}", addr);

    let ct = SseServer::serve(addr.parse()?)
        .await?
        .with_service(move || server.clone());

    tracing::info!("Polygon MCP Server listening on http://{}/sse", addr);

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    ct.cancel();

    Ok(())
}

/// Fallback when the SSE feature is not enabled
#[cfg(not(feature = "sse"))]
async fn run_sse_server(_server: PolygonMcpServer, _host: &str, _port: u16) -> anyhow::Result<()> {
    anyhow::bail!("SSE transport not available. Rebuild with: cargo build --features sse")
}

/// Run the server with the streamable HTTP transport
#[cfg(feature = "http")]
async fn run_http_server(server: PolygonMcpServer, host: &str, port: u16) -> anyhow::Result<()> {
    use axum::Router;
    use rmcp::transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpService,
    };
    use tower_http::cors::{Any, CorsLayer};

    tracing::info!("Using streamable HTTP transport on {}:{}", host, port);

    let mcp_service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .nest_service("/mcp", mcp_service)
        .route("/health", axum::routing::get(health_check))
        .layer(cors);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Polygon MCP Server listening on http://{}/mcp", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C handler");
            tracing::info!("Shutting down...");
        })
        .await?;

    Ok(())
}

/// Health check endpoint for the HTTP transport
#[cfg(feature = "http")]
async fn health_check() -> &'static str {
    "OK"
}

/// Fallback when the HTTP feature is not enabled
#[cfg(not(feature = "http"))]
async fn run_http_server(_server: PolygonMcpServer, _host: &str, _port: u16) -> anyhow::Result<()> {
    anyhow::bail!("HTTP transport not available. Rebuild with: cargo build --features http")
}
