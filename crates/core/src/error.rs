use crate::types::DbId;
use crate::validation::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Per-field validation messages produced by a serializer.
    #[error("Validation failed for fields: {}", .0.field_names().join(", "))]
    InvalidFields(FieldErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}
