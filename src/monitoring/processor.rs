//! Event relay pipeline
//!
//! Runs the single pass of the handler:
//! config check → read → decode → validate → compose → send

use tokio::io::AsyncRead;
use tracing::{info, instrument};

use super::teams_message::TeamsMessage;
use super::teams_webhook::WebhookSender;
use crate::config::Config;
use crate::event::read_event;
use crate::utils::RelayError;

/// Relays one Sensu event to a webhook
pub struct EventRelay<S: WebhookSender> {
    config: Config,
    sender: S,
}

impl<S: WebhookSender> EventRelay<S> {
    pub fn new(config: Config, sender: S) -> Self {
        Self { config, sender }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process the event read from `input`.
    ///
    /// The configuration is checked before `input` is touched, and nothing is
    /// sent unless the event decodes and validates. Returns the delivered
    /// message.
    #[instrument(skip_all)]
    pub async fn run<R>(&self, input: R) -> Result<TeamsMessage, RelayError>
    where
        R: AsyncRead + Unpin,
    {
        self.config.validate()?;

        let event = read_event(input).await?;
        info!(
            entity = %event.entity.name(),
            check = %event.check.name(),
            status = event.check.status,
            "Relaying Sensu event"
        );

        let message = TeamsMessage::from_event(&event, &self.config);
        self.sender.send(&message).await?;

        Ok(message)
    }
}
