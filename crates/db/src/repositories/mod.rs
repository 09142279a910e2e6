//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&SqlitePool` (or any executor, for steps that join a transaction) as the
//! first argument.

pub mod actor_repo;
pub mod director_repo;
pub mod movie_repo;

pub use actor_repo::ActorRepo;
pub use director_repo::DirectorRepo;
pub use movie_repo::{ActorLinkError, MovieRepo};
