//! Cancellation tokens for in-flight fetches

use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Shared, one-way cancellation flag.
///
/// Clones observe the same flag. Once cancelled a token stays cancelled.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationToken {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Mark the token cancelled and wake every waiter
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once the token is cancelled
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }

    /// Drive `fut` to completion unless the token is cancelled first.
    ///
    /// The future is dropped on cancellation, which aborts an in-flight
    /// HTTP request.
    pub async fn run_until_cancelled<F: Future>(&self, fut: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            _ = self.cancelled() => None,
            out = fut => Some(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_completes_when_live() {
        let token = CancellationToken::new();
        let out = token.run_until_cancelled(async { 42 }).await;
        assert_eq!(out, Some(42));
        assert!(!token.is_cancelled());
    }

    #[tokio::test]
    async fn test_already_cancelled_skips_future() {
        let token = CancellationToken::new();
        token.cancel();

        let out = token.run_until_cancelled(async { 42 }).await;
        assert_eq!(out, None);
    }

    #[tokio::test]
    async fn test_cancel_from_clone_interrupts() {
        let token = CancellationToken::new();
        let remote = token.clone();

        let handle = tokio::spawn(async move {
            token
                .run_until_cancelled(tokio::time::sleep(Duration::from_secs(30)))
                .await
        });

        tokio::time::sleep(Duration::from_millis(10)).await;
        remote.cancel();

        let out = tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("cancelled future should finish promptly")
            .unwrap();
        assert!(out.is_none());
    }
}
