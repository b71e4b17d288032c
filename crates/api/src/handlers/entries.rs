//! Handlers for diary entry capture, the home feed, and perspective
//! retrieval.
//!
//! Entry creation is the head of the whole flow: it validates the four
//! text sections, inserts the row, derives the mock perspective bundle,
//! and returns both as one payload so the client carries the handoff
//! context explicitly instead of through shared browser storage. The
//! bundle is persisted as a best-effort side write that never blocks or
//! fails the capture itself.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use perspective_core::coach::{generate_perspective, PerspectiveBundle};
use perspective_core::entry::{validate_entry_content, EntryContent};
use perspective_core::error::CoreError;
use perspective_core::types::DbId;
use perspective_db::models::diary_entry::{DiaryEntry, DiaryEntrySummary};
use perspective_db::repositories::{DiaryEntryRepo, PerspectiveRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for a captured entry: the stored row plus the bundle
/// derived from it.
#[derive(Debug, Serialize)]
pub struct CapturedEntry {
    pub entry: DiaryEntry,
    pub perspective: PerspectiveBundle,
}

/// POST /entries
///
/// Capture a diary entry and hand back its perspective bundle.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(content): Json<EntryContent>,
) -> AppResult<impl IntoResponse> {
    validate_entry_content(&content).map_err(AppError::BadRequest)?;

    let entry = DiaryEntryRepo::create(&state.pool, &content).await?;
    let bundle = generate_perspective(&content);

    spawn_perspective_write(&state, entry.id, bundle.clone());

    tracing::info!(diary_entry_id = entry.id, "Diary entry created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CapturedEntry {
                entry,
                perspective: bundle,
            },
        }),
    ))
}

/// Persist the generated bundle without blocking the capture response.
///
/// Failure is logged and swallowed: the bundle was already handed to the
/// client, and the rest of the flow does not depend on the stored copy.
fn spawn_perspective_write(state: &AppState, diary_entry_id: DbId, bundle: PerspectiveBundle) {
    let pool = state.pool.clone();
    tokio::spawn(async move {
        if let Err(err) = PerspectiveRepo::create(&pool, diary_entry_id, &bundle).await {
            tracing::warn!(
                diary_entry_id,
                error = %err,
                "Best-effort perspective write failed"
            );
        }
    });
}

/// GET /entries/recent
///
/// The home feed: up to five most recent entries, newest first, each with
/// its one-line preview.
pub async fn recent_entries(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = DiaryEntryRepo::list_recent(&state.pool).await?;
    let summaries: Vec<DiaryEntrySummary> = entries.iter().map(DiaryEntrySummary::from).collect();

    Ok(Json(DataResponse { data: summaries }))
}

/// GET /entries/{id}
///
/// Get a single diary entry by ID.
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = DiaryEntryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DiaryEntry",
            id,
        }))?;

    Ok(Json(DataResponse { data: entry }))
}

/// GET /entries/{id}/perspective
///
/// Get the stored perspective bundle for an entry. Returns 404 while the
/// side write has not landed (or never will).
pub async fn get_entry_perspective(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let perspective = PerspectiveRepo::find_by_entry(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Perspective",
            id,
        }))?;

    Ok(Json(DataResponse { data: perspective }))
}
