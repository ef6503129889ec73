//! Event intake: read the whole stream, decode it, validate it.

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, instrument};
use validator::Validate;

use super::event_types::Event;
use crate::utils::RelayError;

/// Read `input` to completion and decode a validated [`Event`].
///
/// There is no size cap; the stream is buffered fully in memory.
#[instrument(skip_all, level = "debug")]
pub async fn read_event<R>(mut input: R) -> Result<Event, RelayError>
where
    R: AsyncRead + Unpin,
{
    let mut payload = Vec::new();
    input
        .read_to_end(&mut payload)
        .await
        .map_err(RelayError::ReadInput)?;
    debug!(bytes = payload.len(), "Read event payload");

    let event = decode_event(&payload)?;
    validate_event(&event)?;

    Ok(event)
}

/// Decode raw bytes into an [`Event`] without validating it
pub fn decode_event(payload: &[u8]) -> Result<Event, RelayError> {
    serde_json::from_slice(payload).map_err(|e| RelayError::decode(payload, e))
}

/// Entity first, then check; validator errors are passed through untouched
pub fn validate_event(event: &Event) -> Result<(), RelayError> {
    event.entity.validate().map_err(RelayError::InvalidEntity)?;
    event.check.validate().map_err(RelayError::InvalidCheck)?;
    Ok(())
}
