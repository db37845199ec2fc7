//! Film entity model and DTOs.

use std::fmt;

use films_core::types::{Date, DbId};
use sqlx::FromRow;

/// A row from the `films` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Film {
    pub id: DbId,
    pub title: String,
    pub release: Date,
    /// Running time in minutes.
    pub runtime: i32,
    pub director_id: DbId,
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.release)
    }
}

/// DTO for inserting a film.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFilm {
    pub title: String,
    pub release: Date,
    pub runtime: i32,
    pub director_id: DbId,
}
