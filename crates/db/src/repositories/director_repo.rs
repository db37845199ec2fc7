//! Repository for the `directors` table.

use films_core::naming::title_case;
use films_core::types::{Date, DbId};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::director::{CreateDirector, Director};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, birthday";

/// Provides CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a new director, returning the created row.
    ///
    /// The name is stored title-cased.
    pub async fn create(pool: &PgPool, input: &CreateDirector) -> Result<Director, sqlx::Error> {
        let query = format!(
            "INSERT INTO directors (name, birthday)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(title_case(&input.name))
            .bind(input.birthday)
            .fetch_one(pool)
            .await
    }

    /// Insert many directors in a single statement. Returns the number of rows written.
    ///
    /// Names are title-cased the same way [`DirectorRepo::create`] does.
    pub async fn create_many(pool: &PgPool, inputs: &[CreateDirector]) -> Result<u64, sqlx::Error> {
        if inputs.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO directors (name, birthday) ");
        builder.push_values(inputs, |mut row, input| {
            row.push_bind(title_case(&input.name)).push_bind(input.birthday);
        });

        let result = builder.build().execute(pool).await?;
        tracing::debug!(rows = result.rows_affected(), "Bulk inserted directors");
        Ok(result.rows_affected())
    }

    /// Find a director by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors WHERE id = $1");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List directors in insertion order, optionally restricted to an exact name.
    pub async fn list(pool: &PgPool, name: Option<&str>) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM directors
             WHERE ($1::text IS NULL OR name = $1)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(name)
            .fetch_all(pool)
            .await
    }

    /// Delete a director by ID. Its films go with it (`ON DELETE CASCADE`).
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM directors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every director with the given name and birthday.
    ///
    /// The name is title-cased first so it matches what inserts stored.
    /// Returns the number of rows removed.
    pub async fn delete_matching(
        pool: &PgPool,
        name: &str,
        birthday: Date,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM directors WHERE name = $1 AND birthday = $2")
            .bind(title_case(name))
            .bind(birthday)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
