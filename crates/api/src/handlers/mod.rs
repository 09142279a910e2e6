//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate through `filmvault_core`, delegate to the corresponding
//! repository in `filmvault_db`, and map errors via [`crate::error::AppError`].

pub mod movies;
pub mod people;
