//! Mission record definition.

use serde::{Deserialize, Serialize};

/// A single mission record.
///
/// Identity is positional: a mission's id is its index in the catalog's
/// ordered sequence, assigned at append time and never reused. Titles
/// are unique case-insensitively across the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub title: String,
    pub description: String,
}

impl Mission {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// The text that gets embedded and indexed for this mission.
    pub fn embedding_text(&self) -> String {
        format!("{}: {}", self.title, self.description)
    }
}

impl std::fmt::Display for Mission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
