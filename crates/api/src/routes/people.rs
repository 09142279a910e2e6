//! Route definitions for directors and actors.

use axum::routing::get;
use axum::Router;

use crate::handlers::people;
use crate::state::AppState;

/// Routes mounted at `/directors`.
pub fn director_router() -> Router<AppState> {
    Router::new().route("/", get(people::list_directors))
}

/// Routes mounted at `/actors`.
///
/// ```text
/// GET    /                -> list_actors
/// GET    /{id}            -> get_actor
/// ```
pub fn actor_router() -> Router<AppState> {
    Router::new()
        .route("/", get(people::list_actors))
        .route("/{id}", get(people::get_actor))
}
