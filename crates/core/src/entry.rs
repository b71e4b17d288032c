//! Diary entry content model and validation.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of any single entry field in characters.
pub const MAX_FIELD_LENGTH: usize = 10_000;

/// Number of entries returned by the home feed.
pub const HOME_FEED_LIMIT: i64 = 5;

/// Preview text for entries with neither a fact nor a feeling.
pub const NO_CONTENT_PLACEHOLDER: &str = "（内容なし）";

// ---------------------------------------------------------------------------
// Content model
// ---------------------------------------------------------------------------

/// The four free-text sections of a diary entry.
///
/// Stored as the `content` JSONB column of `diary_entries`. Every field
/// defaults to empty so partial submissions deserialize cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryContent {
    /// What happened.
    #[serde(default)]
    pub fact: String,
    /// How it felt.
    #[serde(default)]
    pub feeling: String,
    /// The writer's interpretation.
    #[serde(default)]
    pub thought: String,
    /// A tentative hypothesis (optional by design, never required).
    #[serde(default)]
    pub draft: String,
}

impl EntryContent {
    /// One-line preview for feed listings: the fact, else the feeling,
    /// else a fixed placeholder.
    pub fn preview(&self) -> &str {
        if !self.fact.is_empty() {
            &self.fact
        } else if !self.feeling.is_empty() {
            &self.feeling
        } else {
            NO_CONTENT_PLACEHOLDER
        }
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate entry content for creation.
///
/// At least one of fact, feeling, or thought must be non-empty; a draft
/// alone is not enough to create an entry.
pub fn validate_entry_content(content: &EntryContent) -> Result<(), String> {
    if content.fact.is_empty() && content.feeling.is_empty() && content.thought.is_empty() {
        return Err("At least one of fact, feeling, or thought must be non-empty".to_string());
    }
    for (name, value) in [
        ("fact", &content.fact),
        ("feeling", &content.feeling),
        ("thought", &content.thought),
        ("draft", &content.draft),
    ] {
        if value.chars().count() > MAX_FIELD_LENGTH {
            return Err(format!(
                "Field '{name}' exceeds maximum length of {MAX_FIELD_LENGTH} characters"
            ));
        }
    }
    Ok(())
}

/// Validate a value tag label.
pub fn validate_value_tag_label(label: &str) -> Result<(), String> {
    if label.is_empty() {
        return Err("Value tag label cannot be empty".to_string());
    }
    if label.chars().count() > MAX_FIELD_LENGTH {
        return Err(format!(
            "Value tag label exceeds maximum length of {MAX_FIELD_LENGTH} characters"
        ));
    }
    Ok(())
}
