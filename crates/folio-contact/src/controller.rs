//! Contact form submission controller.

use std::sync::Arc;
use std::time::Duration;

use folio_core::DEFAULT_REVERT_DELAY_MS;
use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::draft::{ContactFormDraft, DraftError, Field};
use crate::payload::RelayPayload;
use crate::relay::RelayTransport;
use crate::revert::RevertTimer;
use crate::status::SubmissionStatus;

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request was already in flight; nothing happened.
    Ignored,
    /// The draft failed the required-field check; nothing was sent.
    Blocked(DraftError),
    /// The relay accepted the message.
    Sent,
    /// The relay rejected the message or could not be reached.
    Failed,
}

/// Owns the contact form's draft and status and performs submissions.
///
/// At most one relay request is in flight per controller: entering
/// `Sending` is a single check-and-set on the status channel. `Sent` and
/// `Error` revert to `Idle` after the revert delay; the revert never
/// overwrites a later `Sending`.
pub struct SubmissionController {
    transport: Arc<dyn RelayTransport>,
    draft: Mutex<ContactFormDraft>,
    status: Arc<watch::Sender<SubmissionStatus>>,
    revert: RevertTimer,
    revert_delay: Duration,
}

impl SubmissionController {
    /// Create a controller that delivers through `transport`.
    pub fn new(transport: impl RelayTransport + 'static) -> Self {
        Self::from_shared(Arc::new(transport))
    }

    /// Create a controller over a shared transport.
    pub fn from_shared(transport: Arc<dyn RelayTransport>) -> Self {
        let (status, _) = watch::channel(SubmissionStatus::Idle);
        Self {
            transport,
            draft: Mutex::new(ContactFormDraft::default()),
            status: Arc::new(status),
            revert: RevertTimer::new(),
            revert_delay: Duration::from_millis(DEFAULT_REVERT_DELAY_MS),
        }
    }

    /// Create a controller posting to the configured relay over HTTP.
    #[cfg(feature = "http")]
    pub fn from_config(config: &folio_core::RelayConfig) -> Self {
        Self::new(crate::relay::HttpRelay::from_config(config))
            .with_revert_delay(config.revert_delay())
    }

    /// Set how long `Sent`/`Error` stay visible.
    pub fn with_revert_delay(mut self, delay: Duration) -> Self {
        self.revert_delay = delay;
        self
    }

    /// Current status.
    pub fn status(&self) -> SubmissionStatus {
        *self.status.borrow()
    }

    /// Receiver notified on every status change.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    /// Snapshot of the draft.
    pub fn draft(&self) -> ContactFormDraft {
        self.draft.lock().clone()
    }

    /// Update one field as the user types.
    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        self.draft.lock().set(field, value);
    }

    /// Replace the whole draft.
    pub fn set_draft(&self, draft: ContactFormDraft) {
        *self.draft.lock() = draft;
    }

    /// Replace the draft and submit it. Ignored while a request is in flight,
    /// in which case the draft is left as it was.
    pub async fn submit_draft(&self, draft: ContactFormDraft) -> SubmitOutcome {
        self.attempt(Some(draft)).await
    }

    /// Submit the current draft to the relay.
    pub async fn submit(&self) -> SubmitOutcome {
        self.attempt(None).await
    }

    /// Validate and enter `Sending`. Runs entirely under the draft lock.
    fn begin(
        &self,
        replacement: Option<ContactFormDraft>,
    ) -> Result<ContactFormDraft, SubmitOutcome> {
        let mut current = self.draft.lock();
        if let Some(draft) = replacement {
            if !self.status().can_submit() {
                debug!("submission ignored, request already in flight");
                return Err(SubmitOutcome::Ignored);
            }
            *current = draft;
        }

        if let Err(err) = current.validate() {
            debug!(error = %err, "submission blocked");
            return Err(SubmitOutcome::Blocked(err));
        }

        let entered = self.status.send_if_modified(|status| {
            if status.can_submit() {
                *status = SubmissionStatus::Sending;
                true
            } else {
                false
            }
        });
        if !entered {
            debug!("submission ignored, request already in flight");
            return Err(SubmitOutcome::Ignored);
        }

        Ok(current.clone())
    }

    async fn attempt(&self, replacement: Option<ContactFormDraft>) -> SubmitOutcome {
        let draft = match self.begin(replacement) {
            Ok(draft) => draft,
            Err(outcome) => return outcome,
        };
        if self.revert.cancel() {
            debug!("pending revert cancelled by new submission");
        }

        let payload = RelayPayload::from_draft(&draft);
        info!(message_len = payload.message.len(), "sending contact message");

        match self.transport.deliver(&payload).await {
            Ok(()) => {
                self.draft.lock().clear();
                self.status.send_replace(SubmissionStatus::Sent);
                info!("contact message delivered");
                self.schedule_revert();
                SubmitOutcome::Sent
            }
            Err(err) => {
                error!(
                    kind = err.kind(),
                    status = err.status().map(|s| s.as_u16()),
                    error = %err,
                    "contact message delivery failed"
                );
                self.status.send_replace(SubmissionStatus::Error);
                self.schedule_revert();
                SubmitOutcome::Failed
            }
        }
    }

    /// Cancel the pending revert. Call when the form is torn down.
    pub fn shutdown(&self) {
        if self.revert.cancel() {
            debug!("pending revert cancelled on shutdown");
        }
    }

    fn schedule_revert(&self) {
        let status = Arc::clone(&self.status);
        self.revert.schedule(self.revert_delay, move || {
            let reverted = status.send_if_modified(|s| {
                if s.is_transient() {
                    *s = SubmissionStatus::Idle;
                    true
                } else {
                    false
                }
            });
            if reverted {
                debug!("status reverted to idle");
            }
        });
    }
}

impl std::fmt::Debug for SubmissionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionController")
            .field("status", &self.status())
            .field("revert_delay", &self.revert_delay)
            .field("revert_pending", &self.revert.is_pending())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::RelayError;
    use async_trait::async_trait;
    use http::StatusCode;
    use std::collections::VecDeque;
    use tokio::sync::Notify;

    const DELAY: Duration = Duration::from_millis(2500);
    const TICK: Duration = Duration::from_millis(1);

    /// Relay that replays scripted results and records payloads.
    #[derive(Default)]
    struct ScriptedRelay {
        results: Mutex<VecDeque<Result<(), RelayError>>>,
        calls: Mutex<Vec<RelayPayload>>,
        entered: Notify,
        gate: Option<Notify>,
    }

    impl ScriptedRelay {
        fn replying(results: Vec<Result<(), RelayError>>) -> Self {
            Self {
                results: Mutex::new(results.into()),
                ..Default::default()
            }
        }

        fn gated(results: Vec<Result<(), RelayError>>) -> Self {
            Self {
                gate: Some(Notify::new()),
                ..Self::replying(results)
            }
        }

        fn release(&self) {
            if let Some(gate) = &self.gate {
                gate.notify_one();
            }
        }

        fn calls(&self) -> Vec<RelayPayload> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl RelayTransport for ScriptedRelay {
        async fn deliver(&self, payload: &RelayPayload) -> Result<(), RelayError> {
            self.calls.lock().push(payload.clone());
            self.entered.notify_one();
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.results.lock().pop_front().unwrap_or(Ok(()))
        }
    }

    fn ada() -> ContactFormDraft {
        ContactFormDraft::new("Ada", "ada@example.com", "Hi")
    }

    fn controller(relay: &Arc<ScriptedRelay>) -> SubmissionController {
        let transport: Arc<dyn RelayTransport> = relay.clone();
        SubmissionController::from_shared(transport).with_revert_delay(DELAY)
    }

    // === Success ===

    #[tokio::test(start_paused = true)]
    async fn test_success_clears_draft_and_reverts() {
        let relay = Arc::new(ScriptedRelay::replying(vec![Ok(())]));
        let controller = controller(&relay);
        controller.set_field(Field::Name, "Ada");
        controller.set_field(Field::Email, "ada@example.com");
        controller.set_field(Field::Message, "Hi");

        assert_eq!(controller.submit().await, SubmitOutcome::Sent);
        assert_eq!(controller.status(), SubmissionStatus::Sent);
        assert_eq!(controller.draft(), ContactFormDraft::default());

        tokio::time::sleep(DELAY - TICK).await;
        assert_eq!(controller.status(), SubmissionStatus::Sent);

        tokio::time::sleep(TICK * 2).await;
        assert_eq!(controller.status(), SubmissionStatus::Idle);
        assert_eq!(
            controller.draft(),
            ContactFormDraft::new("", "", "")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_passes_through_sending() {
        let relay = Arc::new(ScriptedRelay::gated(vec![Ok(())]));
        let controller = Arc::new(controller(&relay));
        controller.set_draft(ada());

        let task = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.submit().await })
        };
        relay.entered.notified().await;
        assert_eq!(controller.status(), SubmissionStatus::Sending);

        relay.release();
        assert_eq!(task.await.unwrap(), SubmitOutcome::Sent);
        assert_eq!(controller.status(), SubmissionStatus::Sent);
    }

    #[tokio::test(start_paused = true)]
    async fn test_payload_mirrors_draft() {
        let relay = Arc::new(ScriptedRelay::replying(vec![Ok(())]));
        let controller = controller(&relay);

        controller.submit_draft(ada()).await;

        let calls = relay.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].email, "ada@example.com");
        assert_eq!(calls[0].reply_to, "ada@example.com");
        assert!(calls[0].subject.contains("Ada"));
        assert_eq!(calls[0].message, "Hi");
    }

    // === Failure ===

    #[tokio::test(start_paused = true)]
    async fn test_rejection_keeps_draft_and_reverts() {
        let relay = Arc::new(ScriptedRelay::replying(vec![Err(RelayError::Rejected {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        })]));
        let controller = controller(&relay);

        assert_eq!(controller.submit_draft(ada()).await, SubmitOutcome::Failed);
        assert_eq!(controller.status(), SubmissionStatus::Error);
        assert_eq!(controller.draft(), ada());

        tokio::time::sleep(DELAY + TICK).await;
        assert_eq!(controller.status(), SubmissionStatus::Idle);
        assert_eq!(controller.draft(), ada());
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_failure_is_error() {
        let relay = Arc::new(ScriptedRelay::replying(vec![Err(RelayError::Connection(
            "refused".into(),
        ))]));
        let controller = controller(&relay);

        assert_eq!(controller.submit_draft(ada()).await, SubmitOutcome::Failed);
        assert_eq!(controller.status(), SubmissionStatus::Error);
        assert_eq!(controller.draft(), ada());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_retry_after_failure() {
        let relay = Arc::new(ScriptedRelay::replying(vec![Err(RelayError::Timeout(
            "slow".into(),
        ))]));
        let controller = controller(&relay);

        controller.submit_draft(ada()).await;
        tokio::time::sleep(DELAY * 3).await;

        assert_eq!(relay.calls().len(), 1);
    }

    // === Guards ===

    #[tokio::test(start_paused = true)]
    async fn test_submit_while_sending_is_noop() {
        let relay = Arc::new(ScriptedRelay::gated(vec![Ok(())]));
        let controller = Arc::new(controller(&relay));
        controller.set_draft(ada());

        let first = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.submit().await })
        };
        relay.entered.notified().await;

        assert_eq!(controller.submit().await, SubmitOutcome::Ignored);
        assert_eq!(
            controller
                .submit_draft(ContactFormDraft::new("Eve", "eve@example.com", "x"))
                .await,
            SubmitOutcome::Ignored
        );
        assert_eq!(relay.calls().len(), 1);
        assert_eq!(controller.status(), SubmissionStatus::Sending);
        assert_eq!(controller.draft(), ada());

        relay.release();
        assert_eq!(first.await.unwrap(), SubmitOutcome::Sent);
        assert_eq!(relay.calls().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_racing_submits_keep_in_flight_draft() {
        let relay = Arc::new(ScriptedRelay::gated(vec![Err(RelayError::Rejected {
            status: StatusCode::SERVICE_UNAVAILABLE,
        })]));
        let controller = Arc::new(controller(&relay));
        let barrier = Arc::new(tokio::sync::Barrier::new(16));
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        for i in 0..16 {
            let controller = controller.clone();
            let barrier = barrier.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                barrier.wait().await;
                let draft = ContactFormDraft::new(format!("Ada {i}"), "ada@example.com", "Hi");
                let _ = tx.send(controller.submit_draft(draft).await);
            });
        }
        drop(tx);

        relay.entered.notified().await;
        for _ in 0..15 {
            assert_eq!(rx.recv().await, Some(SubmitOutcome::Ignored));
        }

        let sent = relay.calls();
        assert_eq!(sent.len(), 1);
        assert_eq!(controller.draft().name, sent[0].name);

        relay.release();
        assert_eq!(rx.recv().await, Some(SubmitOutcome::Failed));
        assert_eq!(controller.status(), SubmissionStatus::Error);
        assert_eq!(controller.draft().name, sent[0].name);
        assert_eq!(relay.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_fields_block_without_request() {
        let relay = Arc::new(ScriptedRelay::default());
        let controller = controller(&relay);
        controller.set_field(Field::Name, "Ada");

        assert_eq!(
            controller.submit().await,
            SubmitOutcome::Blocked(DraftError::Missing(Field::Email))
        );
        assert_eq!(controller.status(), SubmissionStatus::Idle);
        assert!(relay.calls().is_empty());
    }

    // === Revert ===

    #[tokio::test(start_paused = true)]
    async fn test_revert_never_clobbers_later_sending() {
        let relay = Arc::new(ScriptedRelay::gated(vec![Ok(()), Ok(())]));
        let controller = Arc::new(controller(&relay));

        relay.release();
        controller.submit_draft(ada()).await;
        assert_eq!(controller.status(), SubmissionStatus::Sent);

        tokio::time::sleep(Duration::from_millis(2000)).await;
        let second = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.submit_draft(ada()).await })
        };
        relay.entered.notified().await;
        relay.entered.notified().await;
        assert_eq!(controller.status(), SubmissionStatus::Sending);

        // The first revert would have fired at 2500ms.
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(controller.status(), SubmissionStatus::Sending);

        relay.release();
        assert_eq!(second.await.unwrap(), SubmitOutcome::Sent);
        tokio::time::sleep(DELAY + TICK).await;
        assert_eq!(controller.status(), SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_after_error_succeeds() {
        let relay = Arc::new(ScriptedRelay::replying(vec![
            Err(RelayError::Rejected {
                status: StatusCode::BAD_GATEWAY,
            }),
            Ok(()),
        ]));
        let controller = controller(&relay);
        controller.set_draft(ada());

        assert_eq!(controller.submit().await, SubmitOutcome::Failed);
        assert_eq!(controller.submit().await, SubmitOutcome::Sent);
        assert_eq!(controller.status(), SubmissionStatus::Sent);
        assert_eq!(relay.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_revert() {
        let relay = Arc::new(ScriptedRelay::replying(vec![Ok(())]));
        let controller = controller(&relay);

        controller.submit_draft(ada()).await;
        controller.shutdown();

        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(controller.status(), SubmissionStatus::Sent);
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_transitions() {
        let relay = Arc::new(ScriptedRelay::replying(vec![Ok(())]));
        let controller = controller(&relay);
        let mut rx = controller.subscribe();
        assert_eq!(*rx.borrow_and_update(), SubmissionStatus::Idle);

        controller.submit_draft(ada()).await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), SubmissionStatus::Sent);

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), SubmissionStatus::Idle);
    }
}
