//! Config entry record
//!
//! The finalized, immutable configuration record the flow produces. The
//! host framework persists it and keys it under the integration domain.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DOMAIN, VERSION};

/// Source of the config entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConfigEntrySource {
    /// Configured via the user-driven flow
    #[default]
    User,
}

/// A configuration entry for the SNOO integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Unique identifier (ULID)
    pub entry_id: String,

    /// Integration domain
    pub domain: String,

    /// Human-readable display name
    pub title: String,

    /// Immutable configuration data (username, password, token)
    #[serde(default)]
    pub data: HashMap<String, serde_json::Value>,

    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Origin type
    #[serde(default)]
    pub source: ConfigEntrySource,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_version() -> u32 {
    VERSION
}

impl ConfigEntry {
    /// Create a new entry from the resolved field mapping
    pub fn new(title: impl Into<String>, fields: HashMap<String, String>) -> Self {
        Self {
            entry_id: ulid::Ulid::new().to_string(),
            domain: DOMAIN.to_string(),
            title: title.into(),
            data: fields
                .into_iter()
                .map(|(k, v)| (k, serde_json::Value::String(v)))
                .collect(),
            version: VERSION,
            source: ConfigEntrySource::User,
            created_at: Utc::now(),
        }
    }

    /// String value of a data field, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(|v| v.as_str())
    }
}
