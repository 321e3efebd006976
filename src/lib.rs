//! # Language Portal
//!
//! Client for a language-learning tracker: a typed REST client, resource
//! fetchers that turn requests into observable state, and terminal views
//! for the dashboard, vocabulary, word groups, study activities and
//! study sessions.
//!
//! ## Modules
//!
//! - [`models`]: Records mirrored from the REST API
//! - [`client`]: Request builders and the injected request executor
//! - [`fetch`]: `Resource` and `PaginatedResource` with cancellation
//! - [`views`]: Text renderers for the terminal
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lang_portal::client::{ClientConfig, LangPortalClient};
//! use lang_portal::fetch::PaginatedResource;
//! use lang_portal::models::WordFilters;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LangPortalClient::http(ClientConfig::default())?;
//!     let filters = WordFilters::default().jlpt_level("N5");
//!
//!     let words = PaginatedResource::new(
//!         move |page, per_page| {
//!             let client = client.clone();
//!             let filters = filters.clone();
//!             async move { client.words().list(page, per_page, &filters).await }
//!         },
//!         1,
//!         20,
//!     );
//!
//!     let page = words.mount().await;
//!     println!("{} of {} words", page.items.len(), page.total);
//!
//!     words.next_page().await;
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod fetch;
pub mod models;
pub mod views;

// Re-export top-level types for convenience
pub use client::{
    ApiRequest, ClientConfig, ClientError, ClientResult, HttpExecutor, LangPortalClient,
    RequestExecutor,
};

pub use fetch::{CancellationToken, FetchState, PageSnapshot, PaginatedResource, Resource};

pub use models::{
    DashboardStats, PaginatedResponse, StudyActivity, StudySession, Word, WordFilters, WordGroup,
};

pub use config::{Config, ConfigError};
