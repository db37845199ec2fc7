//! Handlers for the `/films` resource.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use films_core::error::CoreError;
use films_core::types::DbId;
use films_db::repositories::{DirectorRepo, FilmRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::{json_body, path_params, query_params};
use crate::query::FilmFilter;
use crate::serializers::{FilmRepr, FilmSerializer};
use crate::state::AppState;

/// GET /api/films[?director=<id>]
pub async fn list(
    State(state): State<AppState>,
    filter: Result<Query<FilmFilter>, QueryRejection>,
) -> AppResult<Json<Vec<FilmRepr>>> {
    let filter = query_params(filter)?;
    let films = FilmRepo::list(&state.pool, filter.director).await?;
    Ok(Json(films.into_iter().map(FilmRepr::from).collect()))
}

/// POST /api/films
///
/// Responds 201 with an empty body on success.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<FilmSerializer>, JsonRejection>,
) -> AppResult<StatusCode> {
    let input = json_body(payload)?;

    let director_exists = match input.director_id() {
        Some(id) => DirectorRepo::find_by_id(&state.pool, id).await?.is_some(),
        None => false,
    };
    let input = input.into_create(director_exists)?;
    let film = FilmRepo::create(&state.pool, &input).await?;

    tracing::info!(film_id = film.id, director_id = film.director_id, film = %film, "Film created");

    Ok(StatusCode::CREATED)
}

/// GET /api/films/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<FilmRepr>> {
    let id = path_params(id)?;
    let film = FilmRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Film", id }))?;
    Ok(Json(film.into()))
}
