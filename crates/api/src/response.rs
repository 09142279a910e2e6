//! Shared response envelope types for API handlers.
//!
//! Catalog responses carry a human-readable `message` next to the payload.
//! Use these structs instead of ad-hoc `serde_json::json!` bodies to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// Message used by plain read endpoints.
pub const SUCCESS: &str = "Success";

/// Standard `{ "message": ..., "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::success(movies)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    /// Wrap `data` with the generic [`SUCCESS`] message.
    pub fn success(data: T) -> Self {
        Self {
            message: SUCCESS,
            data,
        }
    }

    pub fn with_message(message: &'static str, data: T) -> Self {
        Self { message, data }
    }
}

/// `{ "message": ... }` with no payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "message": ..., "movie": T }`, used by the movie-with-cast endpoint.
#[derive(Debug, Serialize)]
pub struct MovieResponse<T: Serialize> {
    pub message: &'static str,
    pub movie: T,
}
