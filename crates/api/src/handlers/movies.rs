//! Handlers for the `/movies` resource and actor linking.
//!
//! Request bodies deserialize into all-optional structs so that missing
//! fields surface as `VALIDATION_ERROR` (400) from `filmvault_core::movie`
//! instead of extractor rejections.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use filmvault_core::error::CoreError;
use filmvault_core::movie::{
    validate_actor_link_request, validate_actor_names, ActorIds, MovieFields,
};
use filmvault_core::types::DbId;
use filmvault_db::models::movie::{CreateMovie, UpdateMovie};
use filmvault_db::repositories::MovieRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::{DataResponse, MessageResponse, MovieResponse, SUCCESS};
use crate::state::AppState;

/// Request body for `POST /movies`.
#[derive(Debug, Deserialize)]
pub struct CreateMovieRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub director_name: Option<String>,
    pub image_url: Option<String>,
    pub actors: Option<Vec<String>>,
}

/// Request body for `PUT /movies/{id}`. The cast cannot be changed here.
#[derive(Debug, Deserialize)]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub genre: Option<String>,
    pub director_name: Option<String>,
    pub image_url: Option<String>,
}

/// Request body for `POST /movie-actors`.
#[derive(Debug, Deserialize)]
pub struct AddActorsRequest {
    pub movie_id: Option<DbId>,
    pub actors: Option<ActorIds>,
}

/// Payload returned after a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedMovie {
    pub id: DbId,
    pub status: &'static str,
}

fn movie_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/movies
///
/// List every movie with its director name.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::success(movies)))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| movie_not_found(id))?;
    Ok(Json(DataResponse::success(movie)))
}

/// POST /api/v1/movies
///
/// Create a movie, resolving its director and actors by name.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateMovieRequest>,
) -> AppResult<impl IntoResponse> {
    let fields = MovieFields::from_input(
        body.title.as_deref(),
        body.description.as_deref(),
        body.release_year,
        body.genre.as_deref(),
        body.director_name.as_deref(),
        body.image_url.as_deref(),
    )?;
    let actor_names = validate_actor_names(body.actors.as_deref())?;

    let input = CreateMovie {
        fields,
        actor_names,
    };
    let id = MovieRepo::create(&state.pool, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(
            "Movie created successfully",
            CreatedMovie {
                id,
                status: "Movie and related entities created successfully",
            },
        )),
    ))
}

/// PUT /api/v1/movies/{id}
///
/// Replace every mutable field of a movie. Actor links are left as they are.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(body): ApiJson<UpdateMovieRequest>,
) -> AppResult<impl IntoResponse> {
    let fields = MovieFields::from_input(
        body.title.as_deref(),
        body.description.as_deref(),
        body.release_year,
        body.genre.as_deref(),
        body.director_name.as_deref(),
        body.image_url.as_deref(),
    )?;

    let movie = MovieRepo::update(&state.pool, id, &UpdateMovie { fields })
        .await?
        .ok_or_else(|| movie_not_found(id))?;
    Ok(Json(DataResponse::with_message(
        "Movie updated successfully",
        movie,
    )))
}

/// DELETE /api/v1/movies/{id}
///
/// Hard delete. A missing id is not an error; the message reports 0 rows.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    Ok(Json(DataResponse::with_message(
        "Movie deleted successfully",
        format!("{deleted} rows deleted with id: {id}"),
    )))
}

/// GET /api/v1/movies/{id}/actors
///
/// Get a movie with its director name and the actors linked to it.
pub async fn get_with_actors(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::find_by_id_with_actors(&state.pool, id)
        .await?
        .ok_or_else(|| movie_not_found(id))?;
    Ok(Json(MovieResponse {
        message: SUCCESS,
        movie,
    }))
}

/// POST /api/v1/movie-actors
///
/// Link one actor id or a list of actor ids to a movie. Every link is
/// attempted; if any fail the call reports all failures while keeping the
/// links that succeeded.
pub async fn add_actors(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<AddActorsRequest>,
) -> AppResult<impl IntoResponse> {
    let (movie_id, actor_ids) = validate_actor_link_request(body.movie_id, body.actors)?;

    if !MovieRepo::exists(&state.pool, movie_id).await? {
        return Err(movie_not_found(movie_id));
    }

    let failures = MovieRepo::add_actors(&state.pool, movie_id, &actor_ids).await;
    if !failures.is_empty() {
        return Err(AppError::LinkFailures(
            failures.iter().map(ToString::to_string).collect(),
        ));
    }

    Ok(Json(MessageResponse {
        message: "Actors added successfully",
    }))
}
