//! Repository for the `films` table.

use films_core::types::DbId;
use sqlx::PgPool;

use crate::models::film::{CreateFilm, Film};

const COLUMNS: &str = "id, title, release, runtime, director_id";

/// Provides CRUD operations for films.
pub struct FilmRepo;

impl FilmRepo {
    /// Insert a new film, returning the created row.
    ///
    /// Fails with a foreign-key violation if `director_id` does not exist.
    pub async fn create(pool: &PgPool, input: &CreateFilm) -> Result<Film, sqlx::Error> {
        let query = format!(
            "INSERT INTO films (title, release, runtime, director_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(&input.title)
            .bind(input.release)
            .bind(input.runtime)
            .bind(input.director_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Film>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM films WHERE id = $1");
        sqlx::query_as::<_, Film>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List films in insertion order, optionally restricted to one director.
    pub async fn list(pool: &PgPool, director_id: Option<DbId>) -> Result<Vec<Film>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM films
             WHERE ($1::bigint IS NULL OR director_id = $1)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Film>(&query)
            .bind(director_id)
            .fetch_all(pool)
            .await
    }
}
