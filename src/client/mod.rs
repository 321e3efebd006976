//! Language Portal REST Client
//!
//! Stateless request builders for the five resource groups of the API,
//! executed through an injected [`RequestExecutor`].
//!
//! # Endpoints
//!
//! - [`DashboardApi`]: `GET /dashboard/stats`
//! - [`ActivitiesApi`]: `/study_activities[/{id}[/study_sessions]]`
//! - [`SessionsApi`]: `/study_sessions[/{id}]`
//! - [`WordsApi`]: `/words[/{id}]` with search and filters
//! - [`GroupsApi`]: `/groups[/{id}[/words]]`
//!
//! # Example
//!
//! ```rust,no_run
//! use lang_portal::client::{ClientConfig, LangPortalClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LangPortalClient::http(ClientConfig::default())?;
//!
//!     let stats = client.dashboard().stats().await?;
//!     println!("{} words learned", stats.total_words_learned);
//!
//!     Ok(())
//! }
//! ```

mod activities;
mod dashboard;
mod error;
mod executor;
mod groups;
#[cfg(test)]
mod mock;
mod request;
mod sessions;
mod words;

pub use activities::ActivitiesApi;
pub use dashboard::DashboardApi;
pub use error::{extract_error_message, ClientError, ClientResult, FALLBACK_MESSAGE};
pub use executor::{ClientConfig, HttpExecutor, RequestExecutor, DEFAULT_API_BASE};
pub use groups::GroupsApi;
pub use request::{segment, ApiRequest, Method, Scope};
pub use sessions::{SessionsApi, DEFAULT_SESSIONS_PER_PAGE};
pub use words::{WordsApi, DEFAULT_WORDS_PER_PAGE};

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::models::HealthStatus;

/// Typed client over an injected request executor.
///
/// Cloning is cheap; clones share the executor.
#[derive(Clone)]
pub struct LangPortalClient {
    executor: Arc<dyn RequestExecutor>,
}

impl LangPortalClient {
    /// Create a client over any executor
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Create a client backed by [`HttpExecutor`]
    pub fn http(config: ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(Arc::new(HttpExecutor::new(config)?)))
    }

    pub fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi::new(self)
    }

    pub fn activities(&self) -> ActivitiesApi<'_> {
        ActivitiesApi::new(self)
    }

    pub fn sessions(&self) -> SessionsApi<'_> {
        SessionsApi::new(self)
    }

    pub fn words(&self) -> WordsApi<'_> {
        WordsApi::new(self)
    }

    pub fn groups(&self) -> GroupsApi<'_> {
        GroupsApi::new(self)
    }

    /// Check the server's health endpoint
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        self.send(ApiRequest::get("/health").at_root()).await
    }

    /// Execute a request and decode its JSON body
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> ClientResult<T> {
        let value = self.executor.execute(request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Execute a request whose body is ignored (DELETE)
    pub(crate) async fn send_unit(&self, request: ApiRequest) -> ClientResult<()> {
        self.executor.execute(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockExecutor;
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_health_uses_root_scope() {
        let mock = Arc::new(MockExecutor::new());
        mock.respond("/health", json!({ "status": "healthy", "version": "1.0.0" }));

        let client = LangPortalClient::new(mock.clone());
        let health = client.health().await.unwrap();

        assert!(health.is_healthy());
        assert_eq!(mock.requests()[0].scope, Scope::Root);
    }

    #[tokio::test]
    async fn test_decode_error_is_reported() {
        let mock = Arc::new(MockExecutor::new());
        mock.respond("/health", json!({ "unexpected": true }));

        let client = LangPortalClient::new(mock);
        let err = client.health().await.unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
    }
}
