pub mod director;
pub mod film;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /directors                     list (?item=<name>), create
/// /directors/{id}                get, delete
/// /directors/{id}/films          list films by director
///
/// /films                         list (?director=<id>), create
/// /films/{id}                    get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/directors", director::router())
        .nest("/films", film::router())
}
