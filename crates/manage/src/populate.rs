//! `populate` command: seed or remove the bundled director dataset.

use anyhow::Context;
use films_core::types::{Date, DATE_FORMAT};
use films_db::models::director::CreateDirector;
use films_db::repositories::DirectorRepo;
use films_db::DbPool;
use serde::Deserialize;

/// Director records shipped with the binary.
const DATASET: &str = include_str!("../data/directors.json");

#[derive(Debug, Deserialize)]
struct Dataset {
    directors: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedDirector {
    name: String,
    birthday: String,
}

/// Why a single dataset record could not be turned into a row.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("malformed director record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid birthday '{value}' for {name}")]
    InvalidBirthday { name: String, value: String },
}

/// What a populate run did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PopulateSummary {
    /// Rows inserted (populate) or deleted (clear).
    pub affected: u64,
    /// Records skipped because they could not be constructed.
    pub skipped: usize,
}

/// Parse the raw dataset into its individual records.
pub fn load_dataset(raw: &str) -> anyhow::Result<Vec<serde_json::Value>> {
    let dataset: Dataset =
        serde_json::from_str(raw).context("Director dataset is not valid JSON")?;
    Ok(dataset.directors)
}

/// Construct the insert DTO for one dataset record.
pub fn build_director(record: &serde_json::Value) -> Result<CreateDirector, SeedError> {
    let seed = SeedDirector::deserialize(record)?;
    let birthday = Date::parse_from_str(&seed.birthday, DATE_FORMAT).map_err(|_| {
        SeedError::InvalidBirthday {
            name: seed.name.clone(),
            value: seed.birthday.clone(),
        }
    })?;
    Ok(CreateDirector {
        name: seed.name,
        birthday,
    })
}

/// Build every record that can be built. Failures are logged and counted,
/// never returned.
fn build_all(records: &[serde_json::Value]) -> (Vec<CreateDirector>, usize) {
    let mut directors = Vec::with_capacity(records.len());
    let mut skipped = 0;

    for record in records {
        match build_director(record) {
            Ok(director) => directors.push(director),
            Err(e) => {
                tracing::warn!(error = %e, %record, "Skipping director record");
                skipped += 1;
            }
        }
    }

    (directors, skipped)
}

/// Run the command against the bundled dataset.
///
/// With `clear`, each record's matching rows (same name and birthday) are
/// deleted; otherwise all records are bulk-inserted in one statement.
pub async fn run(pool: &DbPool, clear: bool) -> anyhow::Result<PopulateSummary> {
    let records = load_dataset(DATASET)?;
    let (directors, skipped) = build_all(&records);

    let affected = if clear {
        let mut deleted = 0;
        for director in &directors {
            deleted += DirectorRepo::delete_matching(pool, &director.name, director.birthday)
                .await
                .with_context(|| format!("Failed to delete director {}", director.name))?;
        }
        tracing::info!(deleted, skipped, "Cleared seeded directors");
        deleted
    } else {
        let inserted = DirectorRepo::create_many(pool, &directors)
            .await
            .context("Failed to bulk insert directors")?;
        tracing::info!(inserted, skipped, "Populated directors");
        inserted
    };

    Ok(PopulateSummary { affected, skipped })
}
