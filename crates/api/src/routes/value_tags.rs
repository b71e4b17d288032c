//! Route definitions for the value tag dictionary.
//!
//! Mounted at `/value-tags` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::value_tags;
use crate::state::AppState;

/// Value tag routes.
///
/// ```text
/// GET    /       -> list_tags
/// POST   /       -> create_tag
/// GET    /{id}   -> get_tag
/// DELETE /{id}   -> delete_tag
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(value_tags::list_tags).post(value_tags::create_tag))
        .route(
            "/{id}",
            get(value_tags::get_tag).delete(value_tags::delete_tag),
        )
}
