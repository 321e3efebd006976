//! Single-request resource

use futures_util::future::{BoxFuture, FutureExt};
use std::collections::hash_map::DefaultHasher;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::cancel::CancellationToken;
use super::state::FetchState;
use crate::client::ClientResult;

/// Zero-argument request producer
pub type Producer<T> = Arc<dyn Fn() -> BoxFuture<'static, ClientResult<T>> + Send + Sync>;

/// Wraps one request in [`FetchState`] and re-runs it on demand.
///
/// Every fetch carries its own [`CancellationToken`]. Starting a fetch
/// cancels the previous one, and results are committed only while their
/// token is live, so a slow stale response can never overwrite a newer
/// one. Cloning yields another handle to the same resource.
pub struct Resource<T> {
    producer: Producer<T>,
    inner: Arc<Mutex<Inner<T>>>,
}

struct Inner<T> {
    state: FetchState<T>,
    // Last committed state, restored if the fetch replacing it is cancelled
    settled: FetchState<T>,
    token: Option<CancellationToken>,
    dependencies: Option<u64>,
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Resource<T>
where
    T: Clone + Send + 'static,
{
    /// Create a resource in the `Pending` state. Nothing is fetched until
    /// [`mount`](Self::mount).
    pub fn new<F, Fut>(producer: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ClientResult<T>> + Send + 'static,
    {
        Self::build(producer, None)
    }

    /// Create a resource keyed on a dependency value
    pub fn with_dependencies<F, Fut, D>(producer: F, dependencies: &D) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ClientResult<T>> + Send + 'static,
        D: Hash + ?Sized,
    {
        Self::build(producer, Some(dependency_key(dependencies)))
    }

    fn build<F, Fut>(producer: F, dependencies: Option<u64>) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ClientResult<T>> + Send + 'static,
    {
        Self {
            producer: Arc::new(move || producer().boxed()),
            inner: Arc::new(Mutex::new(Inner {
                state: FetchState::Pending,
                settled: FetchState::Pending,
                token: None,
                dependencies,
            })),
        }
    }

    /// Initial load
    pub async fn mount(&self) -> FetchState<T> {
        self.fetch().await
    }

    /// Repeat the request; state is updated exactly as on the initial load
    pub async fn refetch(&self) -> FetchState<T> {
        self.fetch().await
    }

    /// Re-run the request if `dependencies` differs from the last value.
    ///
    /// Returns whether a fetch was performed.
    pub async fn set_dependencies<D: Hash + ?Sized>(&self, dependencies: &D) -> bool {
        let key = dependency_key(dependencies);
        {
            let mut inner = self.inner.lock().await;
            if inner.dependencies == Some(key) {
                return false;
            }
            inner.dependencies = Some(key);
        }

        self.fetch().await;
        true
    }

    /// Unmount: abandon the in-flight request, if any. Its result is never
    /// committed and the last committed state comes back, so a resource
    /// cancelled before its first result stays `Pending`.
    pub async fn cancel(&self) {
        let mut inner = self.inner.lock().await;
        if let Some(token) = inner.token.take() {
            tracing::debug!("Cancelling in-flight fetch");
            token.cancel();
            inner.state = std::mem::take(&mut inner.settled);
        }
    }

    pub async fn state(&self) -> FetchState<T> {
        self.inner.lock().await.state.clone()
    }

    pub async fn data(&self) -> Option<T> {
        self.inner.lock().await.state.data().cloned()
    }

    pub async fn error(&self) -> Option<String> {
        self.inner.lock().await.state.error().map(str::to_string)
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.lock().await.state.is_loading()
    }

    async fn fetch(&self) -> FetchState<T> {
        let token = CancellationToken::new();
        {
            let mut inner = self.inner.lock().await;
            if let Some(previous) = inner.token.replace(token.clone()) {
                previous.cancel();
            }
            let previous = std::mem::take(&mut inner.state);
            if !previous.is_loading() {
                inner.settled = previous;
            }
        }

        let outcome = token.run_until_cancelled((self.producer)()).await;

        let mut inner = self.inner.lock().await;
        match outcome {
            Some(result) if !token.is_cancelled() => {
                if let Err(e) = &result {
                    tracing::warn!(error = %e, "Fetch failed");
                }
                inner.state = FetchState::from_result(result);
                inner.token = None;
            }
            _ => tracing::debug!("Discarding result of superseded fetch"),
        }
        inner.state.clone()
    }
}

fn dependency_key<D: Hash + ?Sized>(dependencies: &D) -> u64 {
    let mut hasher = DefaultHasher::new();
    dependencies.hash(&mut hasher);
    hasher.finish()
}
