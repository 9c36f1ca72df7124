//! HTTP relay and controller against a mock relay endpoint.

#![cfg(feature = "http")]

use std::time::Duration;

use folio_contact::{
    ContactFormDraft, HttpRelay, RelayError, RelayPayload, RelayTransport, SubmissionController,
    SubmissionStatus, SubmitOutcome,
};
use folio_core::RelayConfig;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FORM_PATH: &str = "/f/test";

fn ada() -> ContactFormDraft {
    ContactFormDraft::new("Ada", "ada@example.com", "Hi")
}

async fn relay_replying(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "ok": status < 300 })))
        .mount(&server)
        .await;
    server
}

fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), FORM_PATH)
}

#[tokio::test]
async fn test_posts_json_with_reply_to_and_subject() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hi",
            "_replyto": "ada@example.com",
            "_subject": "Portfolio message from Ada",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let relay = HttpRelay::new(endpoint(&server));
    relay.deliver(&RelayPayload::from_draft(&ada())).await.unwrap();
}

#[tokio::test]
async fn test_any_2xx_is_success() {
    for status in [200, 201, 204] {
        let server = relay_replying(status).await;
        let relay = HttpRelay::new(endpoint(&server));
        assert!(
            relay.deliver(&RelayPayload::from_draft(&ada())).await.is_ok(),
            "{status} should be accepted"
        );
    }
}

#[tokio::test]
async fn test_non_2xx_is_rejected() {
    for status in [400, 422, 500, 503] {
        let server = relay_replying(status).await;
        let relay = HttpRelay::new(endpoint(&server));
        let err = relay
            .deliver(&RelayPayload::from_draft(&ada()))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), "rejected");
        assert_eq!(err.status().map(|s| s.as_u16()), Some(status));
    }
}

#[tokio::test]
async fn test_unreachable_relay_is_transport_failure() {
    let relay = HttpRelay::new("http://127.0.0.1:1/f/test");
    let err = relay
        .deliver(&RelayPayload::from_draft(&ada()))
        .await
        .unwrap_err();

    assert!(!matches!(err, RelayError::Rejected { .. }));
    assert!(err.status().is_none());
}

#[tokio::test]
async fn test_controller_round_trip() {
    let server = relay_replying(200).await;
    let config = RelayConfig::new(endpoint(&server)).with_revert_delay(Duration::from_millis(50));
    let controller = SubmissionController::from_config(&config);

    assert_eq!(controller.submit_draft(ada()).await, SubmitOutcome::Sent);
    assert_eq!(controller.status(), SubmissionStatus::Sent);
    assert!(controller.draft().is_empty());

    let mut rx = controller.subscribe();
    tokio::time::timeout(Duration::from_secs(2), rx.wait_for(|s| *s == SubmissionStatus::Idle))
        .await
        .unwrap()
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_controller_keeps_draft_on_rejection() {
    let server = relay_replying(500).await;
    let config = RelayConfig::new(endpoint(&server)).with_revert_delay(Duration::from_millis(50));
    let controller = SubmissionController::from_config(&config);

    assert_eq!(controller.submit_draft(ada()).await, SubmitOutcome::Failed);
    assert_eq!(controller.status(), SubmissionStatus::Error);
    assert_eq!(controller.draft(), ada());
}
