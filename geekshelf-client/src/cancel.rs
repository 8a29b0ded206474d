use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::Notify;

use crate::error::BggError;

/// A cloneable cancellation signal shared between a caller and in-flight
/// operations.
///
/// Once [`cancel`](Self::cancel) is called every clone observes it, and any
/// request or back-off wait racing against the token ends with
/// [`BggError::Cancelled`].
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    notify: Notify,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
        self.inner.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves once the token is cancelled.
    pub async fn cancelled(&self) {
        loop {
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            // Register before checking the flag so a concurrent cancel is not missed.
            notified.as_mut().enable();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }

    /// Run `fut` unless the token fires first.
    pub(crate) async fn run<F: Future>(
        &self,
        operation: &'static str,
        fut: F,
    ) -> Result<F::Output, BggError> {
        tokio::select! {
            biased;
            _ = self.cancelled() => Err(BggError::Cancelled { operation }),
            out = fut => Ok(out),
        }
    }

    pub(crate) async fn sleep(
        &self,
        operation: &'static str,
        duration: Duration,
    ) -> Result<(), BggError> {
        self.run(operation, tokio::time::sleep(duration)).await
    }
}
