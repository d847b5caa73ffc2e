//! HTTP transport for the Polygon REST API.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header;

use crate::error::{RestError, RestResult};

/// Production base URL of the Polygon REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.polygon.io";

const USER_AGENT: &str = concat!("polygon-rest/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Something that can fetch raw response bodies from the upstream API.
///
/// The production implementation is [`PolygonClient`]; tests substitute
/// recording or canned transports.
#[async_trait]
pub trait RestTransport: Send + Sync {
    /// Performs a single GET for `path` with the given query pairs and
    /// returns the undecoded response body.
    async fn get_raw(&self, path: &str, query: &[(String, String)]) -> RestResult<Bytes>;
}

/// HTTP client for the Polygon REST API.
///
/// Sends the API key as a bearer token and returns response bodies without
/// decoding them. Non-success statuses become [`RestError::Status`] carrying
/// the response body text.
#[derive(Debug, Clone)]
pub struct PolygonClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl PolygonClient {
    /// Creates a client for the production API.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom base URL (proxies, tests).
    #[must_use]
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// The base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RestTransport for PolygonClient {
    async fn get_raw(&self, path: &str, query: &[(String, String)]) -> RestResult<Bytes> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        tracing::debug!(%url, pairs = query.len(), "GET");

        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .header(header::USER_AGENT, USER_AGENT)
            .bearer_auth(&self.api_key)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "upstream error status");
            return Err(RestError::status(
                status.as_u16(),
                String::from_utf8_lossy(&bytes).into_owned(),
            ));
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_kept_verbatim() {
        let client = PolygonClient::new("key");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);

        let custom = PolygonClient::with_base_url("key", "http://localhost:8421/");
        assert_eq!(custom.base_url(), "http://localhost:8421/");
    }

    #[test]
    fn test_user_agent_carries_crate_version() {
        assert!(USER_AGENT.starts_with("polygon-rest/"));
        assert!(USER_AGENT.len() > "polygon-rest/".len());
    }
}
