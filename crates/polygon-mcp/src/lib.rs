//! # Polygon MCP Server
//!
//! Model Context Protocol (MCP) server for the Polygon.io market data API.
//!
//! Every tool maps one-to-one onto a REST endpoint: typed parameters in,
//! one upstream GET, and the JSON body back verbatim. Failures of any kind
//! come back as an `{"error": ...}` payload in the tool result rather than
//! a protocol error, so callers always get something they can read.
//!
//! ## Usage
//!
//! ```bash
//! # Run with stdio transport (default, for local MCP clients)
//! POLYGON_API_KEY=... polygon-mcp-server
//!
//! # Run over SSE
//! polygon-mcp-server --transport sse --port 8080
//!
//! # Run over streamable HTTP (requires the `http` feature)
//! MCP_TRANSPORT=streamable-http polygon-mcp-server
//! ```

#![warn(missing_docs)]

pub mod server;

pub use server::PolygonMcpServer;

/// Server name advertised during MCP initialization.
pub const SERVER_NAME: &str = "polygon-mcp";

/// Server version (same as crate version).
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
