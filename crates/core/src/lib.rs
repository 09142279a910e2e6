//! Domain types, errors and input validation for the FilmVault catalog.
//!
//! This crate has no I/O. The `db` crate persists what it validates and the
//! `api` crate maps its errors onto HTTP responses.

pub mod error;
pub mod movie;
pub mod types;
