//! Sensu event intake
//!
//! - Event definition and types
//! - Name and scheduling rules
//! - Stream reader

pub mod reader;
pub mod rules;

// Allow module_inception for event module naming
#[allow(clippy::module_inception)]
mod event_types;

pub use event_types::{Check, CheckStatus, Entity, Event, ObjectMeta, DEFAULT_NAMESPACE};
pub use reader::{decode_event, read_event, validate_event};
