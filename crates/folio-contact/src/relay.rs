//! Outbound delivery to the form relay.

use async_trait::async_trait;
use http::StatusCode;

use crate::payload::RelayPayload;

/// Error type for relay delivery.
///
/// The controller collapses every variant into `SubmissionStatus::Error`;
/// the variants exist so logs can tell a rejection from a network failure.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Relay rejected submission with {status}")]
    Rejected { status: StatusCode },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl RelayError {
    /// Short failure class for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "rejected",
            Self::Connection(_) => "connection",
            Self::Timeout(_) => "timeout",
            Self::Transport(_) => "transport",
        }
    }

    /// HTTP status, when the relay answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Rejected { status } => Some(*status),
            _ => None,
        }
    }
}

/// Delivers a payload to the relay.
///
/// `Ok` means the relay answered with a 2xx status. The response body is
/// never inspected.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    async fn deliver(&self, payload: &RelayPayload) -> Result<(), RelayError>;
}

#[async_trait]
impl<T: RelayTransport + ?Sized> RelayTransport for std::sync::Arc<T> {
    async fn deliver(&self, payload: &RelayPayload) -> Result<(), RelayError> {
        (**self).deliver(payload).await
    }
}

#[cfg(feature = "http")]
pub use http_relay::HttpRelay;

#[cfg(feature = "http")]
mod http_relay {
    use async_trait::async_trait;
    use folio_core::RelayConfig;
    use reqwest::header::ACCEPT;

    use super::{RelayError, RelayTransport};
    use crate::payload::RelayPayload;

    /// JSON-over-HTTP relay client.
    #[derive(Debug, Clone)]
    pub struct HttpRelay {
        client: reqwest::Client,
        endpoint: String,
    }

    impl HttpRelay {
        /// Create a relay client for an endpoint.
        pub fn new(endpoint: impl Into<String>) -> Self {
            Self {
                client: reqwest::Client::new(),
                endpoint: endpoint.into(),
            }
        }

        /// Create from relay configuration.
        pub fn from_config(config: &RelayConfig) -> Self {
            Self::new(config.endpoint.clone())
        }

        /// Use a preconfigured client.
        pub fn with_client(mut self, client: reqwest::Client) -> Self {
            self.client = client;
            self
        }

        /// Target endpoint.
        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }
    }

    #[async_trait]
    impl RelayTransport for HttpRelay {
        async fn deliver(&self, payload: &RelayPayload) -> Result<(), RelayError> {
            let response = self
                .client
                .post(&self.endpoint)
                .header(ACCEPT, "application/json")
                .json(payload)
                .send()
                .await
                .map_err(classify)?;

            let status = response.status();
            if !status.is_success() {
                return Err(RelayError::Rejected { status });
            }
            Ok(())
        }
    }

    fn classify(err: reqwest::Error) -> RelayError {
        if err.is_timeout() {
            RelayError::Timeout(err.to_string())
        } else if err.is_connect() {
            RelayError::Connection(err.to_string())
        } else {
            RelayError::Transport(err.to_string())
        }
    }
}
