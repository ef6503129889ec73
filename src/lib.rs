//! Sensu Go handler relaying one event from stdin to a Microsoft Teams webhook.

pub mod config;
pub mod event;
pub mod monitoring;
pub mod utils;

pub use config::{Cli, Config, ConfigError};
pub use event::{Check, CheckStatus, Entity, Event};
pub use monitoring::{EventRelay, TeamsMessage, TeamsWebhook, WebhookSender};
pub use utils::RelayError;
