//! Reference resource library.
//!
//! Read-only list of articles and documents the dashboard can surface
//! alongside the plan. A missing document is an empty library, not an error.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One reference resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    /// Full markdown content
    pub content: String,
    /// Resource kind, e.g. "document", "link", "research_summary"
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub source_url: Option<String>,
    pub added_date: DateTime<Utc>,
}

fn default_kind() -> String {
    "document".to_string()
}

impl Resource {
    /// Create a document resource added now.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            content: content.into(),
            kind: default_kind(),
            source_url: None,
            added_date: Utc::now(),
        }
    }
}

/// Load the resource library from a JSON array document.
pub fn load_resources(path: impl AsRef<Path>) -> Result<Vec<Resource>, ResourceError> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "No resource document found");
        return Ok(Vec::new());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ResourceError::IoError(e.to_string()))?;

    serde_json::from_str(&content).map_err(|e| ResourceError::ParseError(e.to_string()))
}

/// Resource library errors.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
