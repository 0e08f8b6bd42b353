//! HTTP client for cursor-paginated collections
//!
//! Fetches one page per call and classifies failures:
//! - transport failures surface as `Error::Http`
//! - error payloads from the API surface as `Error::Api`
//! - other non-2xx responses surface as `Error::HttpStatus`
//! - bodies that are not a page envelope surface as `Error::JsonParse`

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::types::PageResult;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;
use url::Url;

/// Query parameter carrying the access token
pub(crate) const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Source of pages for the paginator
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch and decode the page at `url`
    async fn fetch_page(&self, url: &Url) -> Result<PageResult>;
}

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            default_headers: HashMap::new(),
            user_agent: ApiConfig::default().user_agent,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

impl From<&ApiConfig> for HttpClientConfig {
    fn from(api: &ApiConfig) -> Self {
        Self::builder().user_agent(api.user_agent.clone()).build()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client that fetches page envelopes
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self { client, config })
    }

    /// GET `url` and decode the body as `T`
    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let mut req = self.client.get(url.clone());
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        debug!("GET {}", redact_token(url));
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error_from_body(&body)
                .unwrap_or_else(|| Error::http_status(status.as_u16(), body)));
        }

        let value: Value = serde_json::from_str(&body)?;
        if let Some(err) = api_error_from_value(&value) {
            return Err(err);
        }

        debug!("Request succeeded: {} {}", status.as_u16(), redact_token(url));
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl PageSource for HttpClient {
    async fn fetch_page(&self, url: &Url) -> Result<PageResult> {
        self.get_json(url).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Unwrap an API error payload (`{"error": {"message": .., "code": ..}}`)
pub fn api_error_from_body(body: &str) -> Option<Error> {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| api_error_from_value(&v))
}

fn api_error_from_value(value: &Value) -> Option<Error> {
    let error = value.get("error")?;
    let message = match error {
        Value::Object(obj) => obj
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| error.to_string(), str::to_string),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let code = error.get("code").and_then(Value::as_i64);
    Some(Error::api(message, code))
}

/// Render `url` with the access token masked, for logs
pub fn redact_token(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == ACCESS_TOKEN_PARAM) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            if k == ACCESS_TOKEN_PARAM {
                (k.into_owned(), "***".to_string())
            } else {
                (k.into_owned(), v.into_owned())
            }
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
