//! Repository for the `movies` and `movie_actors` tables.
//!
//! Creation and update touch several tables (director upsert, movie row,
//! actor upserts, junction rows) and run inside a single transaction.

use filmvault_core::types::DbId;
use futures::future::join_all;
use sqlx::{SqliteExecutor, SqlitePool};

use super::{ActorRepo, DirectorRepo};
use crate::models::movie::{CreateMovie, Movie, MovieWithActors, UpdateMovie};

/// Column list for movie reads, with the director name joined in.
const COLUMNS: &str = "m.id, m.title, m.description, m.release_year, m.genre, \
    m.director_id, m.image_url, d.name AS director_name";

/// Source clause matching [`COLUMNS`].
const FROM_JOINED: &str = "FROM movies m LEFT JOIN directors d ON d.id = m.director_id";

/// A single failed actor link from [`MovieRepo::add_actors`].
#[derive(Debug, thiserror::Error)]
#[error("failed to link actor {actor_id}: {source}")]
pub struct ActorLinkError {
    pub actor_id: DbId,
    #[source]
    pub source: sqlx::Error,
}

/// Provides CRUD operations for movies and their actor associations.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a movie, resolving its director and cast by name.
    ///
    /// The director is found or created first, then the movie row is
    /// inserted, then each actor name is resolved and linked in list order.
    /// Everything runs in one transaction; any failure rolls it all back.
    /// Returns the new movie id.
    pub async fn create(pool: &SqlitePool, input: &CreateMovie) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let fields = &input.fields;
        let director_id = DirectorRepo::find_or_create(&mut *tx, &fields.director_name).await?;

        let movie_id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO movies \
                (title, description, release_year, genre, director_id, image_url) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
             RETURNING id",
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.release_year)
        .bind(&fields.genre)
        .bind(director_id)
        .bind(&fields.image_url)
        .fetch_one(&mut *tx)
        .await?;

        for name in &input.actor_names {
            let actor_id = ActorRepo::find_or_create(&mut *tx, name).await?;
            Self::link_actor(&mut *tx, movie_id, actor_id).await?;
        }

        tx.commit().await?;

        tracing::info!(
            movie_id,
            director_id,
            actor_count = input.actor_names.len(),
            "Movie created"
        );
        Ok(movie_id)
    }

    /// Find a movie by its internal ID, with its director name.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM_JOINED} WHERE m.id = ?1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a movie by ID, enriched with its linked actors.
    pub async fn find_by_id_with_actors(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<MovieWithActors>, sqlx::Error> {
        let movie = Self::find_by_id(pool, id).await?;
        match movie {
            Some(movie) => {
                let actors = ActorRepo::list_for_movie(pool, movie.id).await?;
                Ok(Some(MovieWithActors { movie, actors }))
            }
            None => Ok(None),
        }
    }

    /// List all movies in id order, each with its director name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM_JOINED} ORDER BY m.id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Check whether a movie row exists.
    pub async fn exists(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies WHERE id = ?1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count > 0)
    }

    /// Replace every mutable field of a movie, resolving the director by name.
    ///
    /// Returns `None` if no row with the given `id` exists; in that case the
    /// transaction is rolled back, so no director row is left behind either.
    /// Actor links are not touched.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let fields = &input.fields;
        let director_id = DirectorRepo::find_or_create(&mut *tx, &fields.director_name).await?;

        let result = sqlx::query(
            "UPDATE movies SET \
                title = ?2, \
                description = ?3, \
                release_year = ?4, \
                genre = ?5, \
                director_id = ?6, \
                image_url = ?7 \
             WHERE id = ?1",
        )
        .bind(id)
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.release_year)
        .bind(&fields.genre)
        .bind(director_id)
        .bind(&fields.image_url)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        tracing::debug!(movie_id = id, director_id, "Movie updated");
        Self::find_by_id(pool, id).await
    }

    /// Delete a movie. Returns the number of rows removed (0 or 1).
    ///
    /// Junction rows in `movie_actors` are left in place.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    // -----------------------------------------------------------------------
    // Actor association helpers
    // -----------------------------------------------------------------------

    /// Link several actors to a movie by id.
    ///
    /// All inserts are dispatched concurrently and awaited together. A failed
    /// link does not stop the others, and successful links are kept even when
    /// some fail. Returns one [`ActorLinkError`] per failed link, in input
    /// order; an empty vector means every link succeeded.
    pub async fn add_actors(
        pool: &SqlitePool,
        movie_id: DbId,
        actor_ids: &[DbId],
    ) -> Vec<ActorLinkError> {
        let attempts = actor_ids.iter().map(|&actor_id| async move {
            Self::link_actor(pool, movie_id, actor_id)
                .await
                .map_err(|source| ActorLinkError { actor_id, source })
        });

        let failures: Vec<ActorLinkError> = join_all(attempts)
            .await
            .into_iter()
            .filter_map(Result::err)
            .collect();

        for failure in &failures {
            tracing::warn!(
                movie_id,
                actor_id = failure.actor_id,
                error = %failure.source,
                "Actor link failed"
            );
        }
        failures
    }

    /// Insert one junction row (idempotent).
    async fn link_actor<'e, E>(
        executor: E,
        movie_id: DbId,
        actor_id: DbId,
    ) -> Result<(), sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query(
            "INSERT INTO movie_actors (movie_id, actor_id) \
             VALUES (?1, ?2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(movie_id)
        .bind(actor_id)
        .execute(executor)
        .await?;
        Ok(())
    }
}
