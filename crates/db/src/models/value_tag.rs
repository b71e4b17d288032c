//! Value tag models and DTOs.

use perspective_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `value_tags` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ValueTag {
    pub id: DbId,
    pub label: String,
    pub answer: Option<String>,
    pub diary_entry_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for creating a value tag from the deep-dive step.
#[derive(Debug, Deserialize)]
pub struct CreateValueTag {
    pub label: String,
    /// The writer's optional answer to the deep question.
    pub answer: Option<String>,
    /// The entry that prompted this tag, when known.
    pub diary_entry_id: Option<DbId>,
}
