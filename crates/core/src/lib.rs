//! Domain types and rules shared by the films backend crates.

pub mod error;
pub mod naming;
pub mod types;
pub mod validation;
