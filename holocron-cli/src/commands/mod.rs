//! Command implementations for the holocron CLI

pub mod seed;
pub mod serve;

pub use seed::run_seed;
pub use serve::run_serve;

use holocron_server::db::FALLBACK_DATABASE_URL;

/// Resolve the database URL from args/env, falling back to the local file store.
pub(crate) fn database_url(arg: Option<String>) -> String {
    match arg {
        Some(url) if !url.trim().is_empty() => url,
        _ => {
            tracing::info!(
                "DATABASE_URL not set, using local store {}",
                FALLBACK_DATABASE_URL
            );
            FALLBACK_DATABASE_URL.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_local_store() {
        assert_eq!(database_url(None), FALLBACK_DATABASE_URL);
        assert_eq!(database_url(Some("  ".into())), FALLBACK_DATABASE_URL);
        assert_eq!(
            database_url(Some("postgres://localhost/holocron".into())),
            "postgres://localhost/holocron"
        );
    }
}
