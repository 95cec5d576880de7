//! Cancellable deferred actions.
//!
//! The label-issuance workflow ends with a delayed navigation. Modeled here
//! as a scheduled task tied to an owning guard: if the owner is dismantled
//! before the delay elapses, dropping the guard cancels the task, so nothing
//! ever acts on a torn-down context. The action itself is best-effort; a
//! panic inside it is contained by the task boundary and never takes down
//! the process.

use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Guard for a scheduled one-shot action.
///
/// Dropping the guard cancels the action if it has not fired yet. Call
/// [`detach`](Deferred::detach) to opt into fire-and-forget instead.
#[derive(Debug)]
pub struct Deferred {
    handle: Option<JoinHandle<()>>,
}

impl Deferred {
    /// Cancels the action if it has not fired yet.
    pub fn cancel(mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("Deferred action cancelled");
            handle.abort();
        }
    }

    /// Lets the action outlive this guard (fire-and-forget).
    pub fn detach(mut self) {
        self.handle.take();
    }

    /// Waits for the action to fire. Test helper; completes immediately if
    /// the action was already cancelled.
    pub async fn completed(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Deferred {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Schedules `action` to run once after `delay` on the tokio timer.
///
/// Must be called from within a tokio runtime.
pub fn defer<F>(delay: Duration, action: F) -> Deferred
where
    F: FnOnce() + Send + 'static,
{
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        action();
    });
    Deferred {
        handle: Some(handle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn fires_exactly_once_after_delay() {
        let fired = Arc::new(AtomicU32::new(0));
        let fired_clone = fired.clone();

        let deferred = defer(Duration::from_secs(2), move || {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        // Let the scheduled task register its timer before advancing.
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::advance(Duration::from_secs(1)).await;
        deferred.completed().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_action_never_fires() {
        let fired = Arc::new(AtomicU32::new(0));
        let fired_clone = fired.clone();

        let deferred = defer(Duration::from_secs(2), move || {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });
        deferred.cancel();

        tokio::time::advance(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_guard_cancels() {
        let fired = Arc::new(AtomicU32::new(0));
        let fired_clone = fired.clone();

        {
            let _deferred = defer(Duration::from_secs(2), move || {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            });
            // Guard goes out of scope here, before the delay elapses.
        }

        tokio::time::advance(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn detached_action_outlives_the_guard() {
        let fired = Arc::new(AtomicU32::new(0));
        let fired_clone = fired.clone();

        defer(Duration::from_secs(2), move || {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        })
        .detach();

        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
