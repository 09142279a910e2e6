//! Repository for the `directors` table.

use filmvault_core::types::DbId;
use sqlx::{SqliteExecutor, SqlitePool};

use crate::models::director::Director;

/// Column list for the `directors` table.
const COLUMNS: &str = "id, name";

/// Provides find-or-create and lookup operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Resolve a director name to its id, inserting the director if absent.
    ///
    /// Names match exactly (case-sensitive). The lookup and insert are one
    /// upsert statement against the unique `name` constraint, so concurrent
    /// callers with the same new name converge on a single row.
    ///
    /// Accepts any executor so it can run inside a caller's transaction.
    pub async fn find_or_create<'e, E>(executor: E, name: &str) -> Result<DbId, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO directors (name) VALUES (?1) \
             ON CONFLICT (name) DO UPDATE SET name = excluded.name \
             RETURNING id",
        )
        .bind(name)
        .fetch_one(executor)
        .await?;

        tracing::debug!(director_id = id, director_name = name, "Director resolved");
        Ok(id)
    }

    /// Find a director by exact name.
    pub async fn find_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors WHERE name = ?1");
        sqlx::query_as::<_, Director>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all directors, ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors ORDER BY name, id");
        sqlx::query_as::<_, Director>(&query).fetch_all(pool).await
    }
}
