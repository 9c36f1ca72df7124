//! Cancellable delayed revert.

use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// A single-slot scheduled task.
///
/// Scheduling replaces (aborts) whatever was pending. Dropping the timer
/// aborts the pending task, so an owner that is torn down is never called
/// back.
#[derive(Debug, Default)]
pub struct RevertTimer {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl RevertTimer {
    /// Create an idle timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` after `delay`, replacing any pending action.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule<F>(&self, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        });

        if let Some(previous) = self.pending.lock().replace(handle) {
            previous.abort();
        }
    }

    /// Abort the pending action. Returns true if one was still waiting.
    pub fn cancel(&self) -> bool {
        match self.pending.lock().take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    /// Whether an action is scheduled and has not run yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for RevertTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}
