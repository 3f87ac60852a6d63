//! Track type shared by the store, the engine and the state container

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A playable track.
///
/// Only `id` is interpreted; everything else (title, url, artwork, ...) is
/// carried through untouched so the stored record matches what the engine
/// handed back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Track {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata: Map::new(),
        }
    }

    /// Builder-style setter for a string metadata field.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.metadata.insert(key.to_string(), Value::String(value.into()));
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.metadata.get("title").and_then(Value::as_str)
    }

    pub fn artist(&self) -> Option<&str> {
        self.metadata.get("artist").and_then(Value::as_str)
    }

    /// Identity used for duplicate detection.
    pub fn same_track(&self, other: &Track) -> bool {
        self.id == other.id
    }
}
