//! Director entity model and DTOs.

use std::fmt;

use films_core::types::{Date, DbId};
use sqlx::FromRow;

/// A row from the `directors` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Director {
    pub id: DbId,
    pub name: String,
    pub birthday: Date,
}

impl fmt::Display for Director {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// DTO for inserting a director. The name is title-cased on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDirector {
    pub name: String,
    pub birthday: Date,
}
