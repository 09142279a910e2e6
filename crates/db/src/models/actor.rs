//! Actor entity model.
//!
//! Actors are created by name when a movie first references them, so `age`
//! and `country_of_origin` are usually empty until filled in elsewhere.

use filmvault_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `actors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub age: Option<i32>,
    pub country_of_origin: Option<String>,
}

/// The actor fields listed under a movie.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ActorSummary {
    pub name: String,
    pub age: Option<i32>,
    pub country_of_origin: Option<String>,
}
