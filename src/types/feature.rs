//! Map features as seen by the style engine.
//!
//! The engine treats a feature as opaque: the only thing it ever reads is a
//! named property, and only when an attribute expression asks for one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StyleError};

use super::Value;

/// A single map entity being styled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Optional stable identifier, used for change tracking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    properties: HashMap<String, Value>,
}

impl Feature {
    /// Create a feature with no id and no properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the feature id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a property.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Get a property by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Get all property names.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(|s| s.as_str())
    }
}

/// Parse a JSON array of features.
///
/// Each entry looks like `{"id": "a", "properties": {"density": 0.4}}`.
/// Any other keys (such as `geometry`) are ignored.
pub fn parse_features(source: &str) -> Result<Vec<Feature>> {
    serde_json::from_str(source).map_err(|e| StyleError::Parse {
        message: format!("Invalid feature JSON: {}", e),
        help: Some("Expected an array of {\"id\": ..., \"properties\": {...}} objects".to_string()),
    })
}
