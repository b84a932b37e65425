//! Loading Tick story documents.
//!
//! The main entry point is [`from_json`]. Required top-level fields are
//! checked first so that a truncated document reports the field it lacks
//! rather than a serde position.

use crate::types::TickStory;
use serde::Deserialize;
use std::path::Path;

/// Top-level fields without which a document cannot be a Tick story.
const REQUIRED_FIELDS: [&str; 3] = ["storyId", "mainIntent", "stateMachine"];

/// Errors while loading a Tick story document.
#[derive(Debug, thiserror::Error)]
pub enum InterchangeError {
    /// The document could not be read.
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON, or does not match the story shape.
    #[error("invalid story document: {0}")]
    Json(#[from] serde_json::Error),

    /// A required top-level field is absent.
    #[error("story document missing required field: '{field}'")]
    MissingField { field: String },

    /// The document is not a JSON object.
    #[error("story document must be a JSON object")]
    NotAnObject,
}

/// Deserialize a JSON value into a [`TickStory`].
pub fn from_json(document: &serde_json::Value) -> Result<TickStory, InterchangeError> {
    let object = document.as_object().ok_or(InterchangeError::NotAnObject)?;

    if let Some(field) = REQUIRED_FIELDS
        .iter()
        .find(|field| !object.contains_key(**field))
    {
        return Err(InterchangeError::MissingField {
            field: field.to_string(),
        });
    }

    let story = TickStory::deserialize(document)?;
    tracing::debug!(
        story_id = %story.story_id,
        actions = story.actions.len(),
        contexts = story.contexts.len(),
        "story loaded"
    );
    Ok(story)
}

/// Parse a JSON string into a [`TickStory`].
pub fn from_str(source: &str) -> Result<TickStory, InterchangeError> {
    let document: serde_json::Value = serde_json::from_str(source)?;
    from_json(&document)
}

/// Read and parse a story file.
pub fn from_path(path: &Path) -> Result<TickStory, InterchangeError> {
    let source = std::fs::read_to_string(path).map_err(|source| InterchangeError::Io {
        path: path.display().to_string(),
        source,
    })?;
    from_str(&source)
}
