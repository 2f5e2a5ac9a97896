//! Figma REST API client.
//!
//! One request, one fully-buffered response. No retries and no pagination.

use crate::error::{Error, Result};
use crate::model::{ComponentsResponse, FileInfo, NodesResponse, StylesResponse};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.figma.com/v1";

/// Header carrying the personal access token.
pub const TOKEN_HEADER: &str = "X-Figma-Token";

/// Options for building a [`FigmaClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API base URL without trailing slash
    pub base_url: String,

    /// Per-request timeout (`None` waits indefinitely)
    pub timeout: Option<Duration>,

    /// User-Agent header value
    pub user_agent: String,
}

impl ClientOptions {
    /// Create client options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: concat!("figextract/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Client for the Figma REST API.
#[derive(Debug, Clone)]
pub struct FigmaClient {
    http: reqwest::Client,
    token: String,
    base_url: String,
}

impl FigmaClient {
    /// Create a client with default options.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_options(token, ClientOptions::default())
    }

    /// Create a client with custom options.
    pub fn with_options(token: impl Into<String>, options: ClientOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(options.user_agent);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            token: token.into(),
            base_url: options.base_url,
        })
    }

    /// The API base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `endpoint` (relative to the base URL) and decode the body as JSON.
    ///
    /// Returns the decoded value unchanged on status 200. Any other status
    /// becomes [`Error::Http`] carrying the status and a body excerpt.
    /// Nesting depth is unbounded; the stack grows on demand while decoding.
    pub async fn get_json(&self, endpoint: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        log::debug!("{} -> {} ({} bytes)", url, status, body.len());

        if status != StatusCode::OK {
            return Err(Error::http(status.as_u16(), &body));
        }

        let mut de = serde_json::Deserializer::from_slice(&body);
        de.disable_recursion_limit();
        let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        Ok(value)
    }

    /// GET `endpoint` and decode it into `T`.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let value = self.get_json(endpoint).await?;
        Ok(T::deserialize(serde_stacker::Deserializer::new(value))?)
    }

    /// File metadata and document tree down to `depth` levels.
    pub async fn file_info(&self, file_key: &str, depth: Option<u32>) -> Result<FileInfo> {
        match depth {
            Some(depth) => self.get(&format!("files/{file_key}?depth={depth}")).await,
            None => self.get(&format!("files/{file_key}")).await,
        }
    }

    /// Published styles of a file.
    pub async fn styles(&self, file_key: &str) -> Result<StylesResponse> {
        self.get(&format!("files/{file_key}/styles")).await
    }

    /// Published components of a file.
    pub async fn components(&self, file_key: &str) -> Result<ComponentsResponse> {
        self.get(&format!("files/{file_key}/components")).await
    }

    /// Subtrees of the given node ids.
    pub async fn nodes(&self, file_key: &str, ids: &[&str]) -> Result<NodesResponse> {
        self.get(&format!("files/{file_key}/nodes?ids={}", ids.join(",")))
            .await
    }
}
