//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO holding already-validated values for inserts

pub mod director;
pub mod film;
