//! Query parameter types for list endpoints.

use films_core::types::DbId;
use serde::Deserialize;

/// `GET /directors?item=<name>`.
///
/// An empty `item` is the same as leaving it out.
#[derive(Debug, Default, Deserialize)]
pub struct DirectorFilter {
    #[serde(default)]
    pub item: String,
}

impl DirectorFilter {
    /// The exact name to match, if filtering was requested.
    pub fn name(&self) -> Option<&str> {
        if self.item.is_empty() {
            None
        } else {
            Some(self.item.as_str())
        }
    }
}

/// `GET /films?director=<id>`.
#[derive(Debug, Default, Deserialize)]
pub struct FilmFilter {
    pub director: Option<DbId>,
}
