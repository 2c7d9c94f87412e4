//! Catalog schema bootstrap
//!
//! Idempotent `CREATE ... IF NOT EXISTS` statements run on every startup.

use sqlx::AnyPool;

use super::pool::Backend;
use super::repos::DbError;

fn statements(backend: Backend) -> Vec<String> {
    let pk = backend.identity_column();

    vec![
        format!(
            "CREATE TABLE IF NOT EXISTS users (
                id {pk},
                username TEXT NOT NULL UNIQUE
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS people (
                id {pk},
                name TEXT NOT NULL
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS planets (
                id {pk},
                name TEXT NOT NULL
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS favorites (
                id {pk},
                user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                people_id BIGINT REFERENCES people(id) ON DELETE CASCADE,
                planet_id BIGINT REFERENCES planets(id) ON DELETE CASCADE,
                CHECK ((people_id IS NULL) <> (planet_id IS NULL))
            )"
        ),
        "CREATE UNIQUE INDEX IF NOT EXISTS favorites_user_people
            ON favorites (user_id, people_id) WHERE people_id IS NOT NULL"
            .to_owned(),
        "CREATE UNIQUE INDEX IF NOT EXISTS favorites_user_planet
            ON favorites (user_id, planet_id) WHERE planet_id IS NOT NULL"
            .to_owned(),
    ]
}

/// Create catalog tables and indexes if they are missing
pub async fn bootstrap(pool: &AnyPool, backend: Backend) -> Result<(), DbError> {
    tracing::info!(?backend, "Bootstrapping catalog schema");

    for statement in statements(backend) {
        sqlx::query(&statement).execute(pool).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_column_per_backend() {
        let pg = statements(Backend::Postgres);
        assert!(pg[0].contains("BIGSERIAL PRIMARY KEY"));

        let lite = statements(Backend::Sqlite);
        assert!(lite[0].contains("INTEGER PRIMARY KEY AUTOINCREMENT"));
        assert!(lite.iter().all(|s| !s.contains("BIGSERIAL")));
    }

    #[tokio::test]
    async fn bootstrap_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("schema.db").display());
        let pool = crate::db::create_pool(&url, 1).await.unwrap();

        bootstrap(&pool, Backend::Sqlite).await.unwrap();
        bootstrap(&pool, Backend::Sqlite).await.unwrap();
    }
}
