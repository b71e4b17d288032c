pub mod entries;
pub mod health;
pub mod value_tags;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /entries                     POST   capture an entry
/// /entries/recent              GET    home feed (up to 5 newest)
/// /entries/{id}                GET    entry detail
/// /entries/{id}/perspective    GET    stored perspective bundle
///
/// /value-tags                  GET    list, POST create
/// /value-tags/{id}             GET    detail, DELETE remove
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/entries", entries::router())
        .nest("/value-tags", value_tags::router())
}
