//! Async reveal trigger.

use folio_render::Entrance;
use futures::StreamExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::latch::RevealLatch;
use crate::observer::{ObserveOptions, VisibilityObserver};

/// Read-only view of a section's reveal state.
///
/// Starts false and becomes true at most once.
#[derive(Debug, Clone)]
pub struct VisibilityFlag {
    rx: watch::Receiver<bool>,
}

impl VisibilityFlag {
    pub fn is_revealed(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait until the flag is set.
    ///
    /// Returns false if observation ended without the element ever
    /// intersecting.
    pub async fn wait_revealed(&self) -> bool {
        let mut rx = self.rx.clone();
        let revealed = rx.wait_for(|revealed| *revealed).await.is_ok();
        revealed
    }

    /// Style for an entrance given the current flag.
    pub fn entrance_style(&self, entrance: &Entrance) -> String {
        entrance.style(self.is_revealed())
    }
}

/// Watches one element and latches its flag on first intersection.
///
/// The observer stream is dropped as soon as the flag is set. Dropping
/// the trigger stops observation.
#[derive(Debug)]
pub struct RevealTrigger {
    target: String,
    flag: VisibilityFlag,
    task: JoinHandle<()>,
}

impl RevealTrigger {
    /// Start observing `target`. Must be called within a Tokio runtime.
    pub fn observe(
        observer: &dyn VisibilityObserver,
        target: impl Into<String>,
        options: &ObserveOptions,
    ) -> Self {
        let target = target.into();
        let (tx, rx) = watch::channel(false);
        let mut samples = observer.watch(&target, options);
        let name = target.clone();

        let task = tokio::spawn(async move {
            let mut latch = RevealLatch::new();
            while let Some(sample) = samples.next().await {
                if latch.observe(sample) {
                    tx.send_replace(true);
                    info!(target_id = %name, "section revealed");
                    return;
                }
            }
            debug!(target_id = %name, "observation ended before reveal");
        });

        Self {
            target,
            flag: VisibilityFlag { rx },
            task,
        }
    }

    /// Element being observed.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn flag(&self) -> VisibilityFlag {
        self.flag.clone()
    }

    pub fn is_revealed(&self) -> bool {
        self.flag.is_revealed()
    }

    /// Whether the observation task has stopped.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for RevealTrigger {
    fn drop(&mut self) {
        self.task.abort();
    }
}
