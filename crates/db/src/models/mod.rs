//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Enriched read shapes (joined names, nested lists) where handlers need them

pub mod actor;
pub mod director;
pub mod movie;
