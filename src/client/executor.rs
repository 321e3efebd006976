//! Request Execution
//!
//! The [`RequestExecutor`] trait is the injected request-execution service:
//! endpoint groups describe calls as [`ApiRequest`] values and hand them to
//! whichever executor the client was built with. [`HttpExecutor`] is the
//! reqwest-backed implementation used against a real server.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::error::{extract_error_message, ClientError, ClientResult};
use super::request::{ApiRequest, Method, Scope};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Executes [`ApiRequest`]s and returns the decoded JSON body
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Run the request. Success bodies are returned as JSON; an empty body
    /// is returned as `Value::Null`.
    async fn execute(&self, request: ApiRequest) -> ClientResult<serde_json::Value>;
}

/// Configuration for the HTTP executor
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API (e.g., "http://localhost:8080/api")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// API base with any trailing slash removed
    pub fn api_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Server root: the API base with a trailing `/api` segment removed
    pub fn root_base(&self) -> &str {
        let base = self.api_base();
        base.strip_suffix("/api").unwrap_or(base)
    }

    /// Absolute URL for a request
    pub fn url_for(&self, request: &ApiRequest) -> String {
        let base = match request.scope {
            Scope::Api => self.api_base(),
            Scope::Root => self.root_base(),
        };
        format!("{}{}", base, request.path_and_query())
    }
}

/// reqwest-backed [`RequestExecutor`]
pub struct HttpExecutor {
    client: Client,
    config: ClientConfig,
}

impl HttpExecutor {
    /// Create a new executor with the given configuration
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| ClientError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, request: ApiRequest) -> ClientResult<serde_json::Value> {
        let url = self.config.url_for(&request);
        tracing::debug!(method = %request.method, url = %url, "Sending request");

        let builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };

        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Request failed");
            ClientError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|body| extract_error_message(&body))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .map(|reason| format!("Request failed: {}", reason))
                        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
                });

            tracing::warn!(url = %url, status = status.as_u16(), message = %message, "API error");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}
