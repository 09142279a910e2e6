//! Read-only handlers for directors and actors.
//!
//! Both are created implicitly through movie writes; these endpoints only
//! expose what exists.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use filmvault_core::error::CoreError;
use filmvault_core::types::DbId;
use filmvault_db::repositories::{ActorRepo, DirectorRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ApiPath;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/directors
pub async fn list_directors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::success(directors)))
}

/// GET /api/v1/actors
pub async fn list_actors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let actors = ActorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::success(actors)))
}

/// GET /api/v1/actors/{id}
pub async fn get_actor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let actor = ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Actor", id }))?;
    Ok(Json(DataResponse::success(actor)))
}
