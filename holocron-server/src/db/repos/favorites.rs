//! Favorite repository
//!
//! Writes are single statements in autocommit. SQLite cannot upgrade a
//! deferred transaction's read lock while another connection writes, so
//! no read-then-write transactions here.
//!
//! - add: one INSERT ... ON CONFLICT DO NOTHING RETURNING; duplicates are
//!   rejected by the partial unique indexes, missing references by the
//!   foreign keys
//! - remove: single DELETE ... RETURNING, no read-before-write

use serde::Serialize;
use sqlx::{AnyPool, FromRow};

use super::{is_foreign_key_violation, DbError};
use crate::models::FavoriteTarget;

/// Favorite record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub people_id: Option<i64>,
    pub planet_id: Option<i64>,
}

/// Favorite repository
pub struct FavoriteRepo<'a> {
    pool: &'a AnyPool,
}

impl<'a> FavoriteRepo<'a> {
    pub fn new(pool: &'a AnyPool) -> Self {
        Self { pool }
    }

    /// List every favorite ordered by id.
    pub async fn list(&self) -> Result<Vec<Favorite>, DbError> {
        let favorites = sqlx::query_as::<_, Favorite>(
            "SELECT id, user_id, people_id, planet_id FROM favorites ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(favorites)
    }

    /// List a user's favorites. Unknown users are not found.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Favorite>, DbError> {
        let user: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?;

        if user.is_none() {
            return Err(DbError::not_found("user", user_id));
        }

        let favorites = sqlx::query_as::<_, Favorite>(
            r#"
            SELECT id, user_id, people_id, planet_id
            FROM favorites
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(favorites)
    }

    /// Add a favorite for a user.
    ///
    /// Fails with `NotFound` if the user or target is missing and with
    /// `Conflict` if the user already has this target.
    pub async fn add(&self, user_id: i64, target: FavoriteTarget) -> Result<Favorite, DbError> {
        let kind = target.kind();

        let inserted = sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (user_id, people_id, planet_id)
            VALUES ($1, $2, $3)
            ON CONFLICT DO NOTHING
            RETURNING id, user_id, people_id, planet_id
            "#,
        )
        .bind(user_id)
        .bind(target.people_id())
        .bind(target.planet_id())
        .fetch_optional(self.pool)
        .await;

        let favorite = match inserted {
            Ok(Some(favorite)) => favorite,
            Ok(None) => {
                return Err(DbError::Conflict(format!(
                    "{} {} is already a favorite of user {}",
                    kind.resource(),
                    target.id(),
                    user_id
                )))
            }
            Err(e) if is_foreign_key_violation(&e) => {
                return Err(self.missing_reference(user_id, target).await?)
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(
            id = favorite.id,
            user_id,
            kind = %kind,
            target_id = target.id(),
            "Added favorite"
        );
        Ok(favorite)
    }

    /// Name the reference that broke a foreign key, user first.
    async fn missing_reference(
        &self,
        user_id: i64,
        target: FavoriteTarget,
    ) -> Result<DbError, DbError> {
        let user: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?;

        if user.is_none() {
            return Ok(DbError::not_found("user", user_id));
        }

        Ok(DbError::not_found(target.kind().resource(), target.id()))
    }

    /// Remove a user's favorite, returning the deleted row.
    pub async fn remove(&self, user_id: i64, target: FavoriteTarget) -> Result<Favorite, DbError> {
        let kind = target.kind();
        let sql = format!(
            r#"
            DELETE FROM favorites
            WHERE user_id = $1 AND {} = $2
            RETURNING id, user_id, people_id, planet_id
            "#,
            kind.column()
        );

        let favorite = sqlx::query_as::<_, Favorite>(&sql)
            .bind(user_id)
            .bind(target.id())
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| {
                DbError::not_found("favorite", format!("user {} {} {}", user_id, kind, target.id()))
            })?;

        tracing::debug!(id = favorite.id, user_id, kind = %kind, "Removed favorite");
        Ok(favorite)
    }

    /// Delete a favorite by its own id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("favorite", id));
        }

        tracing::debug!(id, "Deleted favorite");
        Ok(())
    }
}
