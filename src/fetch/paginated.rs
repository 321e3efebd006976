//! Page-parameterized resource

use futures_util::future::{BoxFuture, FutureExt};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::cancel::CancellationToken;
use crate::client::ClientResult;
use crate::models::{total_pages, PaginatedResponse};

/// `(page, per_page)` request producer
pub type PageProducer<T> =
    Arc<dyn Fn(u32, u32) -> BoxFuture<'static, ClientResult<PaginatedResponse<T>>> + Send + Sync>;

/// Current view of a [`PaginatedResource`]
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> PageSnapshot<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Wraps a paginated request in page/total/items state.
///
/// Navigation replaces the item collection with the target page; nothing
/// accumulates. Moving past the first or last known page is a no-op, and
/// a failed fetch keeps the previous page on screen alongside the error.
pub struct PaginatedResource<T> {
    inner: Arc<Mutex<Inner<T>>>,
    initial_page: u32,
    per_page: u32,
}

struct Inner<T> {
    producer: PageProducer<T>,
    page: u32,
    items: Vec<T>,
    total: u64,
    loading: bool,
    loaded: bool,
    error: Option<String>,
    token: Option<CancellationToken>,
}

impl<T> Clone for PaginatedResource<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            initial_page: self.initial_page,
            per_page: self.per_page,
        }
    }
}

impl<T> PaginatedResource<T>
where
    T: Clone + Send + 'static,
{
    /// Create a resource positioned at `initial_page` (pages start at 1).
    /// Nothing is fetched until [`mount`](Self::mount).
    pub fn new<F, Fut>(producer: F, initial_page: u32, per_page: u32) -> Self
    where
        F: Fn(u32, u32) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ClientResult<PaginatedResponse<T>>> + Send + 'static,
    {
        let initial_page = initial_page.max(1);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                producer: boxed_producer(producer),
                page: initial_page,
                items: Vec::new(),
                total: 0,
                loading: true,
                loaded: false,
                error: None,
                token: None,
            })),
            initial_page,
            per_page,
        }
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Initial load of the starting page
    pub async fn mount(&self) -> PageSnapshot<T> {
        self.fetch(self.initial_page).await
    }

    /// Reload the current page
    pub async fn refetch(&self) -> PageSnapshot<T> {
        let page = self.inner.lock().await.page;
        self.fetch(page).await
    }

    /// Advance one page. No-op (returns `false`) on the last known page.
    pub async fn next_page(&self) -> bool {
        let target = {
            let inner = self.inner.lock().await;
            let target = inner.page + 1;
            if inner.loaded && target > self.last_page(inner.total) {
                return false;
            }
            target
        };

        self.fetch(target).await;
        true
    }

    /// Go back one page. No-op (returns `false`) on page 1.
    pub async fn prev_page(&self) -> bool {
        let target = {
            let inner = self.inner.lock().await;
            if inner.page <= 1 {
                return false;
            }
            inner.page - 1
        };

        self.fetch(target).await;
        true
    }

    /// Jump to `page`. Page 0 and pages past the last known page are
    /// rejected (returns `false`).
    pub async fn go_to_page(&self, page: u32) -> bool {
        if page == 0 {
            return false;
        }
        {
            let inner = self.inner.lock().await;
            if inner.loaded && page > self.last_page(inner.total) {
                return false;
            }
        }

        self.fetch(page).await;
        true
    }

    /// Swap the request producer (for example after a filter change) and
    /// reload from the initial page. Results of the previous producer are
    /// dropped even if the reload fails.
    pub async fn set_producer<F, Fut>(&self, producer: F) -> PageSnapshot<T>
    where
        F: Fn(u32, u32) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ClientResult<PaginatedResponse<T>>> + Send + 'static,
    {
        {
            let mut inner = self.inner.lock().await;
            inner.producer = boxed_producer(producer);
            inner.page = self.initial_page;
            inner.items.clear();
            inner.total = 0;
            inner.loaded = false;
        }
        self.fetch(self.initial_page).await
    }

    /// Unmount: abandon the in-flight request, if any
    pub async fn cancel(&self) {
        let mut inner = self.inner.lock().await;
        if let Some(token) = inner.token.take() {
            token.cancel();
            inner.loading = false;
        }
    }

    pub async fn total_pages(&self) -> u32 {
        total_pages(self.inner.lock().await.total, self.per_page)
    }

    pub async fn snapshot(&self) -> PageSnapshot<T> {
        let inner = self.inner.lock().await;
        self.snapshot_of(&inner)
    }

    fn last_page(&self, total: u64) -> u32 {
        total_pages(total, self.per_page).max(1)
    }

    fn snapshot_of(&self, inner: &Inner<T>) -> PageSnapshot<T> {
        PageSnapshot {
            items: inner.items.clone(),
            page: inner.page,
            per_page: self.per_page,
            total: inner.total,
            total_pages: total_pages(inner.total, self.per_page),
            loading: inner.loading,
            error: inner.error.clone(),
        }
    }

    async fn fetch(&self, page: u32) -> PageSnapshot<T> {
        let token = CancellationToken::new();
        let producer = {
            let mut inner = self.inner.lock().await;
            if let Some(previous) = inner.token.replace(token.clone()) {
                previous.cancel();
            }
            inner.loading = true;
            inner.error = None;
            Arc::clone(&inner.producer)
        };

        tracing::debug!(page, per_page = self.per_page, "Fetching page");
        let outcome = token.run_until_cancelled(producer(page, self.per_page)).await;

        let mut inner = self.inner.lock().await;
        match outcome {
            Some(result) if !token.is_cancelled() => {
                match result {
                    Ok(response) => {
                        inner.items = response.data;
                        inner.total = response.total;
                        inner.page = page;
                        inner.loaded = true;
                    }
                    Err(e) => {
                        tracing::warn!(page, error = %e, "Page fetch failed");
                        inner.error = Some(e.user_message());
                    }
                }
                inner.loading = false;
                inner.token = None;
            }
            _ => tracing::debug!(page, "Discarding result of superseded page fetch"),
        }

        self.snapshot_of(&inner)
    }
}

fn boxed_producer<T, F, Fut>(producer: F) -> PageProducer<T>
where
    F: Fn(u32, u32) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ClientResult<PaginatedResponse<T>>> + Send + 'static,
{
    Arc::new(move |page, per_page| producer(page, per_page).boxed())
}
