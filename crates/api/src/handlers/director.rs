//! Handlers for the `/directors` resource.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use films_core::error::CoreError;
use films_core::types::DbId;
use films_db::models::director::Director;
use films_db::repositories::{DirectorRepo, FilmRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::{json_body, path_params, query_params};
use crate::query::DirectorFilter;
use crate::serializers::{DirectorRepr, DirectorSerializer, FilmRepr};
use crate::state::AppState;

/// Load a director or fail with 404.
pub(crate) async fn ensure_director_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Director> {
    DirectorRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        })
    })
}

/// GET /api/directors[?item=<name>]
pub async fn list(
    State(state): State<AppState>,
    filter: Result<Query<DirectorFilter>, QueryRejection>,
) -> AppResult<Json<Vec<DirectorRepr>>> {
    let filter = query_params(filter)?;
    let directors = DirectorRepo::list(&state.pool, filter.name()).await?;
    Ok(Json(directors.into_iter().map(DirectorRepr::from).collect()))
}

/// POST /api/directors
///
/// Responds 201 with an empty body on success.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<DirectorSerializer>, JsonRejection>,
) -> AppResult<StatusCode> {
    let input = json_body(payload)?.into_create()?;
    let director = DirectorRepo::create(&state.pool, &input).await?;

    tracing::info!(director_id = director.id, name = %director, "Director created");

    Ok(StatusCode::CREATED)
}

/// GET /api/directors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<DirectorRepr>> {
    let id = path_params(id)?;
    let director = ensure_director_exists(&state.pool, id).await?;
    Ok(Json(director.into()))
}

/// DELETE /api/directors/{id}
///
/// The director's films are removed by the database cascade.
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = path_params(id)?;
    if DirectorRepo::delete(&state.pool, id).await? {
        tracing::info!(director_id = id, "Director deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))
    }
}

/// GET /api/directors/{id}/films
pub async fn list_films(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Vec<FilmRepr>>> {
    let id = path_params(id)?;
    ensure_director_exists(&state.pool, id).await?;
    let films = FilmRepo::list(&state.pool, Some(id)).await?;
    Ok(Json(films.into_iter().map(FilmRepr::from).collect()))
}
