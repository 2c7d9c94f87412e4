//! People and planet repository
//!
//! Both tables have the same `{id, name}` shape, so one repository serves
//! both, parameterized by [`Catalog`].

use serde::Serialize;
use sqlx::{AnyPool, FromRow};

use super::DbError;
use crate::models::EntityName;

/// Which `{id, name}` table a [`NamedRepo`] works on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    People,
    Planets,
}

impl Catalog {
    fn table(&self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Planets => "planets",
        }
    }

    /// Singular resource name for error messages
    pub fn resource(&self) -> &'static str {
        match self {
            Self::People => "person",
            Self::Planets => "planet",
        }
    }
}

/// A person or planet record
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct NamedRecord {
    pub id: i64,
    pub name: String,
}

/// People/planet repository
pub struct NamedRepo<'a> {
    pool: &'a AnyPool,
    catalog: Catalog,
}

impl<'a> NamedRepo<'a> {
    pub fn new(pool: &'a AnyPool, catalog: Catalog) -> Self {
        Self { pool, catalog }
    }

    pub fn people(pool: &'a AnyPool) -> Self {
        Self::new(pool, Catalog::People)
    }

    pub fn planets(pool: &'a AnyPool) -> Self {
        Self::new(pool, Catalog::Planets)
    }

    /// List every record ordered by id.
    pub async fn list(&self) -> Result<Vec<NamedRecord>, DbError> {
        let sql = format!("SELECT id, name FROM {} ORDER BY id", self.catalog.table());
        let records = sqlx::query_as::<_, NamedRecord>(&sql)
            .fetch_all(self.pool)
            .await?;
        Ok(records)
    }

    /// Get a single record by id.
    pub async fn get(&self, id: i64) -> Result<NamedRecord, DbError> {
        let sql = format!("SELECT id, name FROM {} WHERE id = $1", self.catalog.table());
        sqlx::query_as::<_, NamedRecord>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found(self.catalog.resource(), id))
    }

    pub async fn create(&self, name: &EntityName) -> Result<NamedRecord, DbError> {
        let sql = format!(
            "INSERT INTO {} (name) VALUES ($1) RETURNING id, name",
            self.catalog.table()
        );
        let record = sqlx::query_as::<_, NamedRecord>(&sql)
            .bind(name.as_str())
            .fetch_one(self.pool)
            .await?;

        tracing::debug!(table = self.catalog.table(), id = record.id, "Created record");
        Ok(record)
    }

    pub async fn rename(&self, id: i64, name: &EntityName) -> Result<NamedRecord, DbError> {
        let sql = format!(
            "UPDATE {} SET name = $1 WHERE id = $2 RETURNING id, name",
            self.catalog.table()
        );
        sqlx::query_as::<_, NamedRecord>(&sql)
            .bind(name.as_str())
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found(self.catalog.resource(), id))
    }

    /// Delete a record. Favorites pointing at it cascade.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.catalog.table());
        let result = sqlx::query(&sql).bind(id).execute(self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(self.catalog.resource(), id));
        }

        tracing::debug!(table = self.catalog.table(), id, "Deleted record");
        Ok(())
    }
}
