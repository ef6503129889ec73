//! Sensu event structure and related types
//!
//! Mirrors the subset of the Sensu Go core/v2 event JSON the handler needs.
//! Unknown fields are ignored on decode.

use std::collections::HashMap;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::rules::{validate_check_schedule, validate_name, validate_optional_name};

/// Namespace assumed when the event does not carry one
pub const DEFAULT_NAMESPACE: &str = "default";

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

/// Resource metadata shared by entities and checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ObjectMeta {
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

impl ObjectMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: default_namespace(),
            labels: HashMap::new(),
            annotations: HashMap::new(),
        }
    }
}

impl Default for ObjectMeta {
    fn default() -> Self {
        Self::new("")
    }
}

/// Originating host or agent of an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Entity {
    #[serde(default)]
    #[validate(nested)]
    pub metadata: ObjectMeta,
    /// `agent`, `proxy`, ...; optional in events produced by older agents
    #[serde(default)]
    #[validate(custom(function = "validate_optional_name"))]
    pub entity_class: String,
    #[serde(default)]
    pub subscriptions: Vec<String>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta::new(name),
            entity_class: "agent".to_string(),
            subscriptions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn namespace(&self) -> &str {
        &self.metadata.namespace
    }
}

/// Result of a monitoring probe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_check_schedule"))]
pub struct Check {
    #[serde(default)]
    #[validate(nested)]
    pub metadata: ObjectMeta,
    /// Exit status of the probe; anything outside 0..=2 is "unknown"
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub interval: u32,
    #[serde(default)]
    pub ttl: i64,
    #[serde(default)]
    #[validate(custom(function = "validate_optional_name"))]
    pub proxy_entity_name: String,
    #[serde(default)]
    pub low_flap_threshold: u32,
    #[serde(default)]
    pub high_flap_threshold: u32,
}

impl Check {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta::new(name),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: i64) -> Self {
        self.status = status;
        self
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn check_status(&self) -> CheckStatus {
        CheckStatus::from_code(self.status)
    }
}

/// Monitoring event: one check result observed on one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub entity: Entity,
    pub check: Check,
    /// Unix seconds
    #[serde(default)]
    pub timestamp: i64,
}

impl Event {
    pub fn new(entity: Entity, check: Check) -> Self {
        Self {
            entity,
            check,
            timestamp: 0,
        }
    }

    /// Path of this event in the Sensu API, relative to the dashboard root.
    ///
    /// Namespace, entity and check are percent-encoded as single segments.
    pub fn uri_path(&self) -> String {
        escaped_path(&[
            "api",
            "core",
            "v2",
            "namespaces",
            self.entity.namespace(),
            "events",
            self.entity.name(),
            self.check.name(),
        ])
    }
}

/// Absolute path made of `segments`, each percent-encoded
fn escaped_path(segments: &[&str]) -> String {
    let mut url = Url::parse("http://localhost/").expect("static url parses");
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }
    url.path().to_string()
}

/// Check status bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// 0: passing; reported as a resolution
    Ok,
    /// 1
    Warning,
    /// 2
    Critical,
    /// Any other exit status, including negative values
    Unknown,
}

impl CheckStatus {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => CheckStatus::Ok,
            1 => CheckStatus::Warning,
            2 => CheckStatus::Critical,
            _ => CheckStatus::Unknown,
        }
    }
}

impl From<i64> for CheckStatus {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}
