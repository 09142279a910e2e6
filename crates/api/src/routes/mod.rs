pub mod health;
pub mod movies;
pub mod people;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                     list, create
/// /movies/{id}                get, update, delete
/// /movies/{id}/actors         movie with its actors
///
/// /movie-actors               link actor ids to a movie (POST)
///
/// /directors                  list
/// /actors                     list
/// /actors/{id}                get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movies::router())
        .route("/movie-actors", post(handlers::movies::add_actors))
        .nest("/directors", people::director_router())
        .nest("/actors", people::actor_router())
}
