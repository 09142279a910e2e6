//! Movie catalog validation rules.
//!
//! Request payloads arrive with every field optional so that a missing field
//! is reported as a validation failure (400) rather than a deserialization
//! rejection. The helpers here turn those optional inputs into the validated
//! [`MovieFields`] consumed by the repository layer.

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a movie image URL.
pub const MAX_IMAGE_URL_LENGTH: usize = 2048;

/// Maximum length of a person name (director or actor).
pub const MAX_NAME_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Validated field set
// ---------------------------------------------------------------------------

/// The mutable scalar fields of a movie, validated.
///
/// Shared by create and update: both require every field except
/// `image_url`, and both resolve `director_name` through find-or-create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieFields {
    pub title: String,
    pub description: String,
    pub release_year: i32,
    pub genre: String,
    pub director_name: String,
    pub image_url: Option<String>,
}

impl MovieFields {
    /// Validate raw request values into a [`MovieFields`].
    ///
    /// Fields are checked in declaration order and the first failure wins.
    pub fn from_input(
        title: Option<&str>,
        description: Option<&str>,
        release_year: Option<i32>,
        genre: Option<&str>,
        director_name: Option<&str>,
        image_url: Option<&str>,
    ) -> Result<Self, CoreError> {
        let title = validate_required_text("title", title)?;
        let description = validate_required_text("description", description)?;
        let release_year = validate_release_year(release_year)?;
        let genre = validate_required_text("genre", genre)?;
        let director_name = validate_person_name("director_name", director_name)?;
        let image_url = validate_image_url(image_url)?;

        Ok(Self {
            title,
            description,
            release_year,
            genre,
            director_name,
            image_url,
        })
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a required text field is present and not blank.
///
/// Returns the trimmed value.
pub fn validate_required_text(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::Validation(format!("'{field}' is required"))),
    }
}

/// Validate a director or actor name: required, non-blank, bounded length.
///
/// Names are matched exactly (case-sensitive) during find-or-create, so only
/// surrounding whitespace is normalised.
pub fn validate_person_name(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    let name = validate_required_text(field, value)?;
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "'{field}' must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(name)
}

/// Validate that a release year is present and positive.
pub fn validate_release_year(value: Option<i32>) -> Result<i32, CoreError> {
    match value {
        Some(year) if year > 0 => Ok(year),
        Some(year) => Err(CoreError::Validation(format!(
            "'release_year' must be a positive integer, got {year}"
        ))),
        None => Err(CoreError::Validation("'release_year' is required".to_string())),
    }
}

/// Validate the optional image URL.
///
/// Absent is fine; present-but-blank is treated as absent.
pub fn validate_image_url(value: Option<&str>) -> Result<Option<String>, CoreError> {
    let Some(url) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if url.len() > MAX_IMAGE_URL_LENGTH {
        return Err(CoreError::Validation(format!(
            "'image_url' must be at most {MAX_IMAGE_URL_LENGTH} bytes"
        )));
    }
    Ok(Some(url.to_string()))
}

/// Validate the actor name list supplied when creating a movie.
///
/// The list must be present and non-empty, and every entry must be a valid
/// person name. Order is preserved.
pub fn validate_actor_names(value: Option<&[String]>) -> Result<Vec<String>, CoreError> {
    let names = match value {
        Some(names) if !names.is_empty() => names,
        _ => {
            return Err(CoreError::Validation(
                "'actors' must be a non-empty array of actor names".to_string(),
            ))
        }
    };

    names
        .iter()
        .enumerate()
        .map(|(i, name)| validate_person_name(&format!("actors[{i}]"), Some(name.as_str())))
        .collect()
}

// ---------------------------------------------------------------------------
// Actor id lists
// ---------------------------------------------------------------------------

/// One actor id or a list of actor ids, as accepted when linking actors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ActorIds {
    One(DbId),
    Many(Vec<DbId>),
}

impl ActorIds {
    /// Normalise to a list. A single id becomes a one-element list.
    pub fn into_vec(self) -> Vec<DbId> {
        match self {
            Self::One(id) => vec![id],
            Self::Many(ids) => ids,
        }
    }
}

/// Validate the `movie_id` / `actors` pair of an add-actors request.
pub fn validate_actor_link_request(
    movie_id: Option<DbId>,
    actors: Option<ActorIds>,
) -> Result<(DbId, Vec<DbId>), CoreError> {
    let movie_id =
        movie_id.ok_or_else(|| CoreError::Validation("'movie_id' must be a number.".to_string()))?;
    let actors = actors.ok_or_else(|| {
        CoreError::Validation(
            "'actors' must be a number or an array of actor IDs.".to_string(),
        )
    })?;
    Ok((movie_id, actors.into_vec()))
}
