//! Teams notification delivery
//!
//! - MessageCard composition (status mapping, dashboard link)
//! - Webhook sender
//! - Relay pipeline

pub mod processor;
pub mod teams_message;
pub mod teams_webhook;

pub use processor::EventRelay;
pub use teams_message::{
    resolve_link, status_color, status_label, try_resolve_link, LinkError, TeamsMessage,
};
pub use teams_webhook::{TeamsWebhook, WebhookSender};
