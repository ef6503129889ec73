use std::time::Duration;

use clap::Parser;

/// Default avatar shown next to the card section
pub const DEFAULT_ICON_URL: &str = "http://s3-us-west-2.amazonaws.com/sensuapp.org/sensu.png";
/// Default label of the "open dashboard" action
pub const DEFAULT_ACTION_NAME: &str = "View in Sensu";
/// Default channel override
pub const DEFAULT_CHANNEL: &str = "#general";
/// Default webhook request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Command line surface of the handler
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sensu-teams-handler",
    about = "The Sensu Go Microsoft Teams handler for notifying a channel",
    version
)]
pub struct Cli {
    /// The webhook url to send messages to
    #[arg(short = 'w', long, env = "MS_TEAMS_WEBHOOK_URL", default_value = "")]
    pub webhook_url: String,

    /// #notifications-room, optional defaults to webhook defined
    #[arg(short = 'c', long, default_value = DEFAULT_CHANNEL)]
    pub channel: String,

    /// Optional prefix - can be used for mentions
    #[arg(short = 'p', long, default_value = "")]
    pub message_prefix: String,

    /// Optional bot name, defaults to webhook defined
    #[arg(short = 'b', long, default_value = "")]
    pub bot_name: String,

    /// A URL to an image to use as the user avatar
    #[arg(short = 'i', long, default_value = DEFAULT_ICON_URL)]
    pub icon_url: String,

    /// The text that will be displayed on screen for the action
    #[arg(short = 'a', long, default_value = DEFAULT_ACTION_NAME)]
    pub action_name: String,

    /// The url to the sensu dashboard
    #[arg(short = 'd', long, default_value = "")]
    pub dashboard: String,

    /// Webhook request timeout in seconds
    #[arg(short = 't', long, env = "MS_TEAMS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl Cli {
    /// Freeze the parsed flags into the process configuration
    pub fn into_config(self) -> Config {
        Config {
            webhook_url: self.webhook_url,
            channel: self.channel,
            message_prefix: self.message_prefix,
            bot_name: self.bot_name,
            icon_url: self.icon_url,
            action_name: self.action_name,
            dashboard: self.dashboard,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Handler configuration
///
/// Built once at startup and only borrowed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub webhook_url: String,
    pub channel: String,
    /// Accepted for compatibility, not applied to any message field
    pub message_prefix: String,
    pub bot_name: String,
    pub icon_url: String,
    pub action_name: String,
    /// Dashboard base URL used for the event deep link
    pub dashboard: String,
    pub timeout: Duration,
}

impl Config {
    /// Configuration with the CLI defaults for everything but the webhook
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            channel: DEFAULT_CHANNEL.to_string(),
            message_prefix: String::new(),
            bot_name: String::new(),
            icon_url: DEFAULT_ICON_URL.to_string(),
            action_name: DEFAULT_ACTION_NAME.to_string(),
            dashboard: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    pub fn with_bot_name(mut self, bot_name: impl Into<String>) -> Self {
        self.bot_name = bot_name.into();
        self
    }

    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = icon_url.into();
        self
    }

    pub fn with_action_name(mut self, action_name: impl Into<String>) -> Self {
        self.action_name = action_name.into();
        self
    }

    pub fn with_dashboard(mut self, dashboard: impl Into<String>) -> Self {
        self.dashboard = dashboard.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Precondition check run before any input is consumed
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.webhook_url.trim().is_empty() {
            return Err(ConfigError::MissingWebhookUrl);
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("webhook url is empty")]
    MissingWebhookUrl,
    #[error("webhook timeout must be greater than zero")]
    InvalidTimeout,
}
