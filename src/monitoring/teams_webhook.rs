//! Teams incoming-webhook delivery
//!
//! One POST per invocation, JSON body, bounded by the configured timeout.
//! Non-2xx answers are reported as delivery failures.

use std::time::Duration;

use reqwest::Client;
use tracing::{error, info, instrument, warn};

use super::teams_message::TeamsMessage;
use crate::config::Config;
use crate::utils::RelayError;

/// Delivery seam for composed messages
///
/// Lets the pipeline run against a test double instead of the network.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WebhookSender: Send + Sync {
    /// Deliver one message
    async fn send(&self, message: &TeamsMessage) -> Result<(), RelayError>;
}

/// reqwest-backed Teams webhook client
#[derive(Debug, Clone)]
pub struct TeamsWebhook {
    webhook_url: String,
    client: Client,
}

impl TeamsWebhook {
    /// Create a client posting to `webhook_url` with the given timeout
    pub fn new(webhook_url: impl Into<String>, timeout: Duration) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RelayError::Transport)?;

        Ok(Self {
            webhook_url: webhook_url.into(),
            client,
        })
    }

    /// Create from the handler configuration
    pub fn from_config(config: &Config) -> Result<Self, RelayError> {
        Self::new(config.webhook_url.clone(), config.timeout)
    }

    /// Get the webhook URL (for testing)
    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }
}

#[async_trait::async_trait]
impl WebhookSender for TeamsWebhook {
    #[instrument(skip_all, fields(status = %message.text))]
    async fn send(&self, message: &TeamsMessage) -> Result<(), RelayError> {
        // `json` sets `Content-Type: application/json`
        let response = self
            .client
            .post(&self.webhook_url)
            .json(message)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send Teams webhook");
                RelayError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                warn!(error = %e, "Failed to read Teams webhook error body");
                String::new()
            });
            error!(status = %status, body = %body, "Teams webhook returned error");
            return Err(RelayError::Rejected { status, body });
        }

        info!(status = %status, "Teams notification sent successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Check, Entity, Event};

    fn message() -> TeamsMessage {
        let event = Event::new(
            Entity::new("web-01"),
            Check::new("disk").with_status(1).with_output("85% used"),
        );
        TeamsMessage::from_event(&event, &Config::new("http://127.0.0.1:9/hook"))
    }

    #[test]
    fn should_create_webhook_from_config() {
        // Arrange
        let config = Config::new("https://example.webhook.office.com/hook");

        // Act
        let webhook = TeamsWebhook::from_config(&config).expect("client builds");

        // Assert
        assert_eq!(
            webhook.webhook_url(),
            "https://example.webhook.office.com/hook"
        );
    }

    #[tokio::test]
    async fn should_fail_with_invalid_webhook_url() {
        // Arrange
        let webhook =
            TeamsWebhook::new("invalid-url", Duration::from_secs(1)).expect("client builds");

        // Act
        let result = webhook.send(&message()).await;

        // Assert
        assert!(matches!(result, Err(RelayError::Transport(_))));
    }
}
