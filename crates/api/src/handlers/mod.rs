pub mod director;
pub mod film;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query};
use axum::Json;

use crate::error::{AppError, AppResult};

// Extractor rejections are returned as `AppError::BadRequest` so every 400
// carries the same `{"error", "code"}` body as the rest of the API.

/// Unwrap a JSON body. Bad syntax, a wrong content type or a non-object
/// payload is a 400 rather than axum's default 422.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Unwrap path parameters, e.g. a non-numeric `{id}`.
pub(crate) fn path_params<T>(path: Result<Path<T>, PathRejection>) -> AppResult<T> {
    path.map(|Path(params)| params)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Unwrap a query string, e.g. `?director=abc`.
pub(crate) fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
