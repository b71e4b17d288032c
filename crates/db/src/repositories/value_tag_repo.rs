//! Repository for the `value_tags` table.

use perspective_core::types::DbId;
use sqlx::PgPool;

use crate::models::value_tag::{CreateValueTag, ValueTag};

/// Column list for value_tags queries.
const COLUMNS: &str = "id, label, answer, diary_entry_id, created_at";

/// Provides CRUD operations for the value tag dictionary.
pub struct ValueTagRepo;

impl ValueTagRepo {
    /// Insert a new value tag, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateValueTag) -> Result<ValueTag, sqlx::Error> {
        let query = format!(
            "INSERT INTO value_tags (label, answer, diary_entry_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ValueTag>(&query)
            .bind(&input.label)
            .bind(&input.answer)
            .bind(input.diary_entry_id)
            .fetch_one(pool)
            .await
    }

    /// List all value tags, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ValueTag>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM value_tags ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ValueTag>(&query).fetch_all(pool).await
    }

    /// Find a value tag by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ValueTag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM value_tags WHERE id = $1");
        sqlx::query_as::<_, ValueTag>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a value tag. Returns `false` when no row matched, which the
    /// dictionary treats as an already-satisfied delete.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM value_tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
