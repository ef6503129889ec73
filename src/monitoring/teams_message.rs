//! Microsoft Teams MessageCard composition
//!
//! Turns a validated Sensu event into the card posted to the webhook:
//! - status → theme color and headline label
//! - event → dashboard deep link
//! - config → channel, bot name, icon, action label

use reqwest::Url;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::config::Config;
use crate::event::{CheckStatus, Event};

/// Theme colors (hex)
pub mod colors {
    /// Resolved - green
    pub const OK: &str = "#00FF00";
    /// Warning - orange
    pub const WARNING: &str = "#FFA500";
    /// Critical - red
    pub const CRITICAL: &str = "#FF0000";
    /// Unknown - gray
    pub const UNKNOWN: &str = "#808080";
}

/// Headline labels
pub mod labels {
    pub const OK: &str = "RESOLVED";
    pub const WARNING: &str = "WARNING";
    pub const CRITICAL: &str = "CRITICAL";
    pub const UNKNOWN: &str = "UNKNOWN";
}

/// Action type understood by Teams for opening a link
pub const OPEN_URI_ACTION: &str = "OpenUri";
/// Target OS of the single action target
pub const DEFAULT_TARGET_OS: &str = "default";

/// Teams webhook message payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsMessage {
    pub theme_color: String,
    /// Headline (status label)
    pub text: String,
    pub channel: String,
    /// Bot display name; left to the webhook when empty
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(rename = "section")]
    pub sections: Vec<Section>,
    #[serde(rename = "PotentialAction")]
    pub potential_action: Vec<PotentialAction>,
}

/// Card section carrying the check output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub activity_image: String,
    pub text: String,
}

/// Card action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PotentialAction {
    #[serde(rename = "@type")]
    pub action_type: String,
    pub name: String,
    pub targets: Vec<Target>,
}

/// Action link target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub os: String,
    pub uri: String,
}

impl TeamsMessage {
    /// Build the card for `event`.
    ///
    /// The event must already be validated. A dashboard link that cannot be
    /// resolved leaves the action target empty instead of failing.
    pub fn from_event(event: &Event, config: &Config) -> Self {
        let link = resolve_link(&config.dashboard, &event.uri_path());
        let status = event.check.check_status();

        Self {
            theme_color: status.color().to_string(),
            text: status.label().to_string(),
            channel: config.channel.clone(),
            username: config.bot_name.clone(),
            sections: vec![Section {
                activity_image: config.icon_url.clone(),
                text: event.check.output.clone(),
            }],
            potential_action: vec![PotentialAction {
                action_type: OPEN_URI_ACTION.to_string(),
                name: config.action_name.clone(),
                targets: vec![Target {
                    os: DEFAULT_TARGET_OS.to_string(),
                    uri: link,
                }],
            }],
        }
    }

    /// Link carried by the single action target
    pub fn link(&self) -> Option<&str> {
        self.potential_action
            .first()
            .and_then(|action| action.targets.first())
            .map(|target| target.uri.as_str())
    }
}

impl CheckStatus {
    pub fn color(self) -> &'static str {
        match self {
            CheckStatus::Ok => colors::OK,
            CheckStatus::Warning => colors::WARNING,
            CheckStatus::Critical => colors::CRITICAL,
            CheckStatus::Unknown => colors::UNKNOWN,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckStatus::Ok => labels::OK,
            CheckStatus::Warning => labels::WARNING,
            CheckStatus::Critical => labels::CRITICAL,
            CheckStatus::Unknown => labels::UNKNOWN,
        }
    }
}

/// Theme color for a raw check status
pub fn status_color(code: i64) -> &'static str {
    CheckStatus::from_code(code).color()
}

/// Headline label for a raw check status
pub fn status_label(code: i64) -> &'static str {
    CheckStatus::from_code(code).label()
}

/// Why a dashboard link could not be built
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("invalid dashboard url {url:?}: {reason}")]
    InvalidBase { url: String, reason: String },
    #[error("invalid event path {path:?}")]
    InvalidPath { path: String },
    #[error("cannot resolve {path:?} against {base}: {reason}")]
    Resolve {
        base: String,
        path: String,
        reason: String,
    },
}

/// Characters allowed in a URI reference (RFC 3986 unreserved, reserved, `%`)
fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.' | '_' | '~' | ':' | '/' | '?' | '#' | '[' | ']' | '@' | '!' | '$' | '&'
                | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '=' | '%'
        )
}

/// Resolve `path` against the dashboard base URL.
///
/// The base keeps its scheme and authority; the reference replaces the path
/// following RFC 3986 reference resolution. An empty reference yields the
/// base itself.
pub fn try_resolve_link(base: &str, path: &str) -> Result<Url, LinkError> {
    let base_url = Url::parse(base).map_err(|e| LinkError::InvalidBase {
        url: base.to_string(),
        reason: e.to_string(),
    })?;

    if base_url.cannot_be_a_base() {
        return Err(LinkError::InvalidBase {
            url: base.to_string(),
            reason: "url cannot be a base".to_string(),
        });
    }

    if !path.chars().all(is_uri_char) {
        return Err(LinkError::InvalidPath {
            path: path.to_string(),
        });
    }

    base_url.join(path).map_err(|e| LinkError::Resolve {
        base: base.to_string(),
        path: path.to_string(),
        reason: e.to_string(),
    })
}

/// Dashboard link, or an empty string when it cannot be built.
///
/// A broken link must not block the notification.
pub fn resolve_link(base: &str, path: &str) -> String {
    match try_resolve_link(base, path) {
        Ok(url) => url.to_string(),
        Err(e) => {
            warn!(error = %e, "Dashboard link unavailable, sending without it");
            String::new()
        }
    }
}
