//! Content resolver: fetches CIDs from the configured IPFS gateway.
//!
//! A single `reqwest::Client` is built at startup and shared by every fetch.
//! Each call performs exactly one GET; nothing is retried or cached.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::StatusCode;
use tracing::{error, info, instrument, warn};

use super::error::ResourceError;
use crate::core::config::GatewayConfig;

/// Marker line prepended to base64-encoded binary payloads.
pub const BINARY_CONTENT_MARKER: &str = "[Binary content - Base64 encoded]";

/// Content retrieved from the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchedContent {
    /// The body decoded as UTF-8.
    Text(String),

    /// The body was not valid UTF-8.
    Binary(Vec<u8>),
}

impl FetchedContent {
    /// Classify a response body as text or binary.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Self::Text(text),
            Err(e) => Self::Binary(e.into_bytes()),
        }
    }

    /// Render the content as text, base64-encoding binary payloads behind a marker line.
    pub fn into_tagged_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Binary(bytes) => {
                format!("{}\n{}", BINARY_CONTENT_MARKER, STANDARD.encode(bytes))
            }
        }
    }

    /// Whether the content was classified as binary.
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_))
    }
}

/// Resolves IPFS addresses and CIDs into gateway fetches.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    client: reqwest::Client,
    base_url: String,
}

impl ContentResolver {
    /// Build a resolver with its own HTTP client.
    pub fn new(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("ipfs-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Build a resolver around an existing HTTP client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Gateway URL for a CID.
    pub fn url_for(&self, cid: &str) -> String {
        format!("{}{}", self.base_url, cid)
    }

    /// Fetch a CID from the gateway.
    ///
    /// No validation is applied to `cid`; it is appended to the base URL as-is.
    #[instrument(skip(self))]
    pub async fn fetch(&self, cid: &str) -> Result<FetchedContent, ResourceError> {
        let url = self.url_for(cid);
        info!("Fetching IPFS content from: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("Gateway request failed: {}", e);
            ResourceError::transport(describe(&e))
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!("CID not found on gateway: {}", cid);
            return Err(ResourceError::not_found(cid));
        }
        if !status.is_success() {
            warn!("Gateway returned HTTP {} for {}", status, cid);
            return Err(ResourceError::gateway(status.as_u16(), cid));
        }

        let body = response.bytes().await.map_err(|e| {
            error!("Failed to read gateway response body: {}", e);
            ResourceError::transport(describe(&e))
        })?;

        let content = FetchedContent::from_bytes(body.to_vec());
        if content.is_binary() {
            info!("Fetched {} bytes of binary content for {}", body.len(), cid);
        }
        Ok(content)
    }
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {}", err)
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else {
        err.to_string()
    }
}
