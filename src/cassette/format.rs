//! Cassette data structures for recording and replaying interactions.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single recorded interaction with a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name (`random` or `clock`).
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Arguments passed to the port.
    pub input: serde_json::Value,
    /// Value the port returned.
    pub output: serde_json::Value,
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// Unique id of the recording session.
    pub session_id: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Creates a cassette stamped with a fresh session id and the current time.
    pub fn new(name: impl Into<String>, interactions: Vec<Interaction>) -> Self {
        Self {
            name: name.into(),
            session_id: Uuid::new_v4().to_string(),
            recorded_at: Utc::now(),
            interactions,
        }
    }

    /// Reads a YAML cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}
