//! Database connection pool management
//!
//! The backend is picked from the connection string scheme. Both backends go
//! through sqlx's `Any` driver so repositories are written once.

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;

use super::repos::DbError;
use super::schema;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Local file store used when no `DATABASE_URL` is configured.
pub const FALLBACK_DATABASE_URL: &str = "sqlite:///tmp/holocron.db?mode=rwc";

/// Supported database backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    /// Detect the backend from a connection string.
    ///
    /// # Example
    /// ```
    /// use holocron_server::db::Backend;
    ///
    /// assert_eq!(Backend::from_url("postgres://localhost/holocron").unwrap(), Backend::Postgres);
    /// assert_eq!(Backend::from_url("sqlite::memory:").unwrap(), Backend::Sqlite);
    /// assert!(Backend::from_url("mysql://localhost/holocron").is_err());
    /// ```
    pub fn from_url(url: &str) -> Result<Self, DbError> {
        let scheme = url.split(':').next().unwrap_or_default();
        match scheme {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(DbError::UnsupportedBackend(scheme.to_owned())),
        }
    }

    /// Column definition for an auto-increment 64-bit primary key
    pub(crate) fn identity_column(&self) -> &'static str {
        match self {
            Self::Postgres => "BIGSERIAL PRIMARY KEY",
            Self::Sqlite => "INTEGER PRIMARY KEY AUTOINCREMENT",
        }
    }
}

/// Create a connection pool.
///
/// # Errors
///
/// Returns an error if the scheme is unsupported or the connection fails.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<AnyPool, DbError> {
    Backend::from_url(database_url)?;
    install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Create a pool and make sure the catalog schema exists.
///
/// ```ignore
/// let pool = connect("sqlite:///tmp/holocron.db?mode=rwc", 5).await?;
/// ```
pub async fn connect(database_url: &str, max_connections: u32) -> Result<AnyPool, DbError> {
    let backend = Backend::from_url(database_url)?;
    let pool = create_pool(database_url, max_connections).await?;
    schema::bootstrap(&pool, backend).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_backends() {
        assert_eq!(
            Backend::from_url("postgresql://user@db/holocron").unwrap(),
            Backend::Postgres
        );
        assert_eq!(Backend::from_url(FALLBACK_DATABASE_URL).unwrap(), Backend::Sqlite);
    }

    #[test]
    fn rejects_unknown_scheme() {
        let err = Backend::from_url("mysql://localhost/db").unwrap_err();
        assert!(matches!(err, DbError::UnsupportedBackend(s) if s == "mysql"));
    }

    #[tokio::test]
    async fn sqlite_file_pool_acquires_connection() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("pool.db").display());
        let pool = create_pool(&url, 2).await.expect("pool creation failed");

        let result: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result, 1);
    }
}
