//! Movie entity model and DTOs.
//!
//! A movie references at most one director and is linked to any number of
//! actors through the `movie_actors` junction table.

use filmvault_core::movie::MovieFields;
use filmvault_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use super::actor::ActorSummary;

/// A row from `movies`, left-joined with its director's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub release_year: i32,
    pub genre: String,
    pub director_id: Option<DbId>,
    pub image_url: Option<String>,
    pub director_name: Option<String>,
}

/// A movie enriched with the actors linked to it.
#[derive(Debug, Clone, Serialize)]
pub struct MovieWithActors {
    #[serde(flatten)]
    pub movie: Movie,
    pub actors: Vec<ActorSummary>,
}

/// DTO for creating a movie together with its director and cast.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub fields: MovieFields,
    /// Actor names, resolved in order through find-or-create.
    pub actor_names: Vec<String>,
}

/// DTO for replacing the mutable fields of an existing movie.
///
/// The cast is not part of an update.
#[derive(Debug, Clone)]
pub struct UpdateMovie {
    pub fields: MovieFields,
}
