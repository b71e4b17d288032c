//! Perspective bundle model.

use perspective_core::coach::PerspectiveItem;
use perspective_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `perspectives` table, linked one-to-one to its entry.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Perspective {
    pub id: DbId,
    pub diary_entry_id: DbId,
    pub acceptance: String,
    pub confirm_question: String,
    pub perspectives: Json<Vec<PerspectiveItem>>,
    pub deep_question: String,
    pub value_tag: String,
    pub created_at: Timestamp,
}
