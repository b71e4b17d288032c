//! Handlers for the value tag dictionary.
//!
//! Tags are created from the deep-dive step and read back by the
//! dictionary view. The hosted store is the single source of truth.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use perspective_core::entry::validate_value_tag_label;
use perspective_core::error::CoreError;
use perspective_core::types::DbId;
use perspective_db::models::value_tag::CreateValueTag;
use perspective_db::repositories::{DiaryEntryRepo, ValueTagRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /value-tags
///
/// Save a value tag from the deep-dive step. The answer is optional;
/// an empty answer is stored as NULL. When an originating entry is
/// referenced it must exist at creation time.
pub async fn create_tag(
    State(state): State<AppState>,
    Json(mut input): Json<CreateValueTag>,
) -> AppResult<impl IntoResponse> {
    validate_value_tag_label(&input.label).map_err(AppError::BadRequest)?;

    input.answer = input.answer.filter(|a| !a.is_empty());

    if let Some(entry_id) = input.diary_entry_id {
        DiaryEntryRepo::find_by_id(&state.pool, entry_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "DiaryEntry",
                id: entry_id,
            }))?;
    }

    let tag = ValueTagRepo::create(&state.pool, &input).await?;

    tracing::info!(
        value_tag_id = tag.id,
        diary_entry_id = ?tag.diary_entry_id,
        "Value tag created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: tag })))
}

/// GET /value-tags
///
/// List all value tags, newest first.
pub async fn list_tags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tags = ValueTagRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: tags }))
}

/// GET /value-tags/{id}
///
/// Get a single value tag by ID.
pub async fn get_tag(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let tag = ValueTagRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ValueTag",
            id,
        }))?;

    Ok(Json(DataResponse { data: tag }))
}

/// DELETE /value-tags/{id}
///
/// Remove a tag from the dictionary. Deleting an id that no longer
/// exists is a no-op, so repeated deletes stay idempotent.
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ValueTagRepo::delete(&state.pool, id).await?;

    if deleted {
        tracing::info!(value_tag_id = id, "Value tag deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}
