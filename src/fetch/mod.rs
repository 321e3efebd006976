//! Resource Fetchers
//!
//! Framework-independent wrappers that turn an asynchronous request into
//! observable state:
//!
//! - [`Resource`]: one request, tracked as [`FetchState`] (pending, ready,
//!   failed), with manual refetch and dependency-driven reloads
//! - [`PaginatedResource`]: a `(page, per_page)` request with page/total
//!   state and next/prev/goto navigation
//!
//! Requests are passed in as producers returning futures. Each fetch owns
//! a [`CancellationToken`]; a newer fetch or an explicit `cancel()`
//! invalidates older ones before they can commit.
//!
//! # Example
//!
//! ```rust,no_run
//! use lang_portal::client::{ClientConfig, LangPortalClient};
//! use lang_portal::fetch::Resource;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LangPortalClient::http(ClientConfig::default())?;
//!
//!     let stats = Resource::new(move || {
//!         let client = client.clone();
//!         async move { client.dashboard().stats().await }
//!     });
//!
//!     match stats.mount().await.error() {
//!         Some(message) => eprintln!("Error: {}", message),
//!         None => println!("{:?}", stats.data().await),
//!     }
//!
//!     Ok(())
//! }
//! ```

mod cancel;
mod paginated;
mod resource;
mod state;

pub use cancel::CancellationToken;
pub use paginated::{PageProducer, PageSnapshot, PaginatedResource};
pub use resource::{Producer, Resource};
pub use state::FetchState;
