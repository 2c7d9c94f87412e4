//! User repository

use std::collections::HashMap;

use serde::Serialize;
use sqlx::{AnyPool, FromRow};

use super::{is_unique_violation, DbError, Favorite};
use crate::models::Username;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
}

/// User with the favorites they own
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserWithFavorites {
    pub id: i64,
    pub username: String,
    pub favorites: Vec<Favorite>,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a AnyPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a AnyPool) -> Self {
        Self { pool }
    }

    /// List users without their favorites.
    pub async fn list(&self) -> Result<Vec<UserRow>, DbError> {
        let users = sqlx::query_as::<_, UserRow>("SELECT id, username FROM users ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(users)
    }

    /// List users with their favorites nested.
    ///
    /// Two queries total, grouped in memory (no N+1).
    pub async fn list_with_favorites(&self) -> Result<Vec<UserWithFavorites>, DbError> {
        let users = self.list().await?;

        let favorites = sqlx::query_as::<_, Favorite>(
            "SELECT id, user_id, people_id, planet_id FROM favorites ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        let mut by_user: HashMap<i64, Vec<Favorite>> = HashMap::new();
        for fav in favorites {
            by_user.entry(fav.user_id).or_default().push(fav);
        }

        Ok(users
            .into_iter()
            .map(|u| UserWithFavorites {
                favorites: by_user.remove(&u.id).unwrap_or_default(),
                id: u.id,
                username: u.username,
            })
            .collect())
    }

    pub async fn get(&self, id: i64) -> Result<UserRow, DbError> {
        sqlx::query_as::<_, UserRow>("SELECT id, username FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("user", id))
    }

    /// Create a user. A taken username is a conflict.
    pub async fn create(&self, username: &Username) -> Result<UserRow, DbError> {
        let user = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username) VALUES ($1)
            ON CONFLICT (username) DO NOTHING
            RETURNING id, username
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| {
            DbError::Conflict(format!("username '{}' is already taken", username.as_str()))
        })?;

        tracing::debug!(id = user.id, username = %user.username, "Created user");
        Ok(user)
    }

    pub async fn rename(&self, id: i64, username: &Username) -> Result<UserRow, DbError> {
        sqlx::query_as::<_, UserRow>(
            "UPDATE users SET username = $1 WHERE id = $2 RETURNING id, username",
        )
        .bind(username.as_str())
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DbError::Conflict(format!("username '{}' is already taken", username.as_str()))
            } else {
                DbError::Sqlx(e)
            }
        })?
        .ok_or_else(|| DbError::not_found("user", id))
    }

    /// Delete a user. Their favorites cascade.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("user", id));
        }

        tracing::debug!(id, "Deleted user");
        Ok(())
    }
}
