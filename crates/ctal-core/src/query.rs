//! # Directory Queries
//!
//! Ephemeral query objects: the browse filters of the public directory and
//! the client requirements used to rank talent. Neither is ever persisted.
//! An empty field always means "no constraint".

use serde::{Deserialize, Serialize};

/// Browse filters for the talent directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentFilters {
    /// Exact category label.
    pub category: String,
    /// Exact experience label.
    pub experience: String,
    /// Case-insensitive substring of the record location.
    pub location: String,
    /// Exact availability label.
    pub availability: String,
}

impl TalentFilters {
    /// Whether no filter is set.
    pub fn is_empty(&self) -> bool {
        self.category.is_empty()
            && self.experience.is_empty()
            && self.location.is_empty()
            && self.availability.is_empty()
    }
}

/// What a client is looking for, as entered in the requirements form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequirements {
    /// Position or category text.
    pub position: String,
    pub experience_level: String,
    pub location: String,
    pub availability: String,
    /// Comma-separated required skills.
    pub skills: String,
}

impl ClientRequirements {
    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
            && self.experience_level.is_empty()
            && self.location.is_empty()
            && self.availability.is_empty()
            && self.skills.is_empty()
    }

    /// Lowercased, trimmed required-skill tokens.
    ///
    /// No tokens when `skills` is empty. Otherwise every comma-separated
    /// piece is kept, including empty ones, and an empty token matches any
    /// skill.
    pub fn skill_tokens(&self) -> Vec<String> {
        if self.skills.is_empty() {
            return Vec::new();
        }
        self.skills
            .to_lowercase()
            .split(',')
            .map(|t| t.trim().to_string())
            .collect()
    }
}
