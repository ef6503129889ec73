use reqwest::StatusCode;
use thiserror::Error;
use validator::ValidationErrors;

use crate::config::ConfigError;

/// Handler-wide error type
///
/// Every variant is terminal for the invocation. Link resolution failures are
/// not represented here since they only degrade the outgoing message.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read stdin: {0}")]
    ReadInput(#[source] std::io::Error),

    #[error("failed to unmarshal stdin data: {payload}")]
    Decode {
        payload: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    InvalidEntity(ValidationErrors),

    #[error(transparent)]
    InvalidCheck(ValidationErrors),

    #[error("failed to send Teams webhook: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Teams webhook error: {status} - {body}")]
    Rejected { status: StatusCode, body: String },
}

impl RelayError {
    /// Stable short code used in log records
    pub fn error_code(&self) -> &'static str {
        match self {
            RelayError::Config(_) => "CONFIG001",
            RelayError::ReadInput(_) => "INPUT001",
            RelayError::Decode { .. } => "INPUT002",
            RelayError::InvalidEntity(_) => "VALIDATION001",
            RelayError::InvalidCheck(_) => "VALIDATION002",
            RelayError::Transport(_) => "TRANSPORT001",
            RelayError::Rejected { .. } => "TRANSPORT002",
        }
    }

    /// Build a decode error keeping the raw payload for diagnosis
    pub fn decode(payload: &[u8], source: serde_json::Error) -> Self {
        RelayError::Decode {
            payload: String::from_utf8_lossy(payload).into_owned(),
            source,
        }
    }
}
