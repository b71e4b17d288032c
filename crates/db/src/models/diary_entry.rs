//! Diary entry model.

use perspective_core::entry::EntryContent;
use perspective_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `diary_entries` table.
///
/// The `content` column is decoded through [`EntryContent`], so a row
/// whose JSON has drifted from the expected shape fails the read instead
/// of leaking an untyped blob upward.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DiaryEntry {
    pub id: DbId,
    pub content: Json<EntryContent>,
    pub created_at: Timestamp,
}

/// A feed listing of an entry: the row plus its one-line preview.
#[derive(Debug, Clone, Serialize)]
pub struct DiaryEntrySummary {
    pub id: DbId,
    pub preview: String,
    pub created_at: Timestamp,
}

impl From<&DiaryEntry> for DiaryEntrySummary {
    fn from(entry: &DiaryEntry) -> Self {
        Self {
            id: entry.id,
            preview: entry.content.preview().to_string(),
            created_at: entry.created_at,
        }
    }
}
