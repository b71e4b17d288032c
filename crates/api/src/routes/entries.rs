//! Route definitions for diary entries.
//!
//! Mounted at `/entries` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::entries;
use crate::state::AppState;

/// Entry routes.
///
/// ```text
/// POST   /                   -> create_entry
/// GET    /recent             -> recent_entries
/// GET    /{id}               -> get_entry
/// GET    /{id}/perspective   -> get_entry_perspective
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(entries::create_entry))
        .route("/recent", get(entries::recent_entries))
        .route("/{id}", get(entries::get_entry))
        .route("/{id}/perspective", get(entries::get_entry_perspective))
}
