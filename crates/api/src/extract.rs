//! Request extractors with project-specific rejections.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor whose rejection is an [`AppError`].
///
/// Axum's own `Json` rejects malformed or mistyped bodies with a plain-text
/// 4xx. Wrapping it here routes those failures through [`AppError`] so the
/// client always receives a 400 with the standard `{ error, code }` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path extractor whose rejection is an [`AppError`].
///
/// A segment that does not parse (e.g. `/movies/abc`) becomes a 400
/// `BAD_REQUEST` instead of axum's plain-text rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
