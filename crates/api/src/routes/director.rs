//! Route definitions for the `/directors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::director;
use crate::state::AppState;

/// Routes mounted at `/directors`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// DELETE /{id}            -> delete
/// GET    /{id}/films      -> list_films
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(director::list).post(director::create))
        .route("/{id}", get(director::get_by_id).delete(director::delete))
        .route("/{id}/films", get(director::list_films))
}
