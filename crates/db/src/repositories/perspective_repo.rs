//! Repository for the `perspectives` table.

use perspective_core::coach::PerspectiveBundle;
use perspective_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::perspective::Perspective;

/// Column list for perspectives queries.
const COLUMNS: &str = "id, diary_entry_id, acceptance, confirm_question, \
    perspectives, deep_question, value_tag, created_at";

/// Stores generated perspective bundles, one per entry. Rows are never
/// mutated or deleted; a second insert for the same entry violates
/// `uq_perspectives_diary_entry_id`.
pub struct PerspectiveRepo;

impl PerspectiveRepo {
    /// Insert the bundle generated for an entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        diary_entry_id: DbId,
        bundle: &PerspectiveBundle,
    ) -> Result<Perspective, sqlx::Error> {
        let query = format!(
            "INSERT INTO perspectives
                (diary_entry_id, acceptance, confirm_question, perspectives, deep_question, value_tag)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Perspective>(&query)
            .bind(diary_entry_id)
            .bind(&bundle.acceptance)
            .bind(&bundle.confirm_question)
            .bind(Json(&bundle.perspectives))
            .bind(&bundle.deep_question)
            .bind(&bundle.value_tag)
            .fetch_one(pool)
            .await
    }

    /// Find the bundle stored for a given entry, if the side write landed.
    pub async fn find_by_entry(
        pool: &PgPool,
        diary_entry_id: DbId,
    ) -> Result<Option<Perspective>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM perspectives WHERE diary_entry_id = $1");
        sqlx::query_as::<_, Perspective>(&query)
            .bind(diary_entry_id)
            .fetch_optional(pool)
            .await
    }
}
