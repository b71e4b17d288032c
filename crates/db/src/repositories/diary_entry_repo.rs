//! Repository for the `diary_entries` table.

use perspective_core::entry::{EntryContent, HOME_FEED_LIMIT};
use perspective_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::diary_entry::DiaryEntry;

/// Column list for diary_entries queries.
const COLUMNS: &str = "id, content, created_at";

/// Provides create and read operations for diary entries. Entries are
/// immutable after creation and are never deleted.
pub struct DiaryEntryRepo;

impl DiaryEntryRepo {
    /// Insert a new entry, returning the created row.
    pub async fn create(pool: &PgPool, content: &EntryContent) -> Result<DiaryEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO diary_entries (content) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DiaryEntry>(&query)
            .bind(Json(content))
            .fetch_one(pool)
            .await
    }

    /// Find an entry by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DiaryEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM diary_entries WHERE id = $1");
        sqlx::query_as::<_, DiaryEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the most recent entries for the home feed, newest first.
    ///
    /// Capped at [`HOME_FEED_LIMIT`] rows; `id` breaks creation-time ties
    /// deterministically.
    pub async fn list_recent(pool: &PgPool) -> Result<Vec<DiaryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM diary_entries
             ORDER BY created_at DESC, id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, DiaryEntry>(&query)
            .bind(HOME_FEED_LIMIT)
            .fetch_all(pool)
            .await
    }
}
