//! Repository for the `actors` table.

use filmvault_core::types::DbId;
use sqlx::{SqliteExecutor, SqlitePool};

use crate::models::actor::{Actor, ActorSummary};

/// Column list for the `actors` table.
const COLUMNS: &str = "id, name, age, country_of_origin";

/// Provides find-or-create and lookup operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Resolve an actor name to its id, inserting a name-only actor if absent.
    ///
    /// Same upsert contract as [`super::DirectorRepo::find_or_create`].
    pub async fn find_or_create<'e, E>(executor: E, name: &str) -> Result<DbId, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO actors (name) VALUES (?1) \
             ON CONFLICT (name) DO UPDATE SET name = excluded.name \
             RETURNING id",
        )
        .bind(name)
        .fetch_one(executor)
        .await?;

        tracing::debug!(actor_id = id, actor_name = name, "Actor resolved");
        Ok(id)
    }

    /// Find an actor by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE id = ?1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an actor by exact name.
    pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE name = ?1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all actors, ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY name, id");
        sqlx::query_as::<_, Actor>(&query).fetch_all(pool).await
    }

    /// Get the actors linked to a movie, in actor id order.
    pub async fn list_for_movie(
        pool: &SqlitePool,
        movie_id: DbId,
    ) -> Result<Vec<ActorSummary>, sqlx::Error> {
        sqlx::query_as::<_, ActorSummary>(
            "SELECT a.name, a.age, a.country_of_origin \
             FROM actors a \
             JOIN movie_actors ma ON ma.actor_id = a.id \
             WHERE ma.movie_id = ?1 \
             ORDER BY a.id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }
}
