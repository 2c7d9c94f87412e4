//! Seed command - load catalog records from a TOML fixture
//!
//! ```toml
//! users = ["luke", "leia"]
//! people = ["Luke Skywalker", "Leia Organa"]
//! planets = ["Tatooine", "Alderaan"]
//! ```
//!
//! Seeding is repeatable: usernames and names already present are skipped.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use holocron_server::db::{connect, AnyPool, DbError, NamedRepo, UserRepo};
use holocron_server::models::{EntityName, Username};

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Fixture file to load
    pub file: PathBuf,

    /// Database URL (postgres://... or sqlite:...); defaults to a local SQLite file
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Catalog fixture file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub people: Vec<String>,
    #[serde(default)]
    pub planets: Vec<String>,
}

impl Fixture {
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid fixture file")
    }
}

/// Rows written by a seed run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub people: usize,
    pub planets: usize,
}

async fn seed_named(repo: NamedRepo<'_>, names: &[String]) -> Result<usize> {
    let mut existing: HashSet<String> = repo.list().await?.into_iter().map(|r| r.name).collect();
    let mut created = 0;

    for raw in names {
        let name = EntityName::new(raw)?;
        if existing.insert(name.as_str().to_owned()) {
            repo.create(&name).await?;
            created += 1;
        }
    }

    Ok(created)
}

/// Insert fixture records that are not already present
pub async fn seed(pool: &AnyPool, fixture: &Fixture) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    let users = UserRepo::new(pool);
    for raw in &fixture.users {
        let username = Username::new(raw)?;
        match users.create(&username).await {
            Ok(_) => report.users += 1,
            Err(DbError::Conflict(_)) => {
                tracing::debug!(username = username.as_str(), "User exists, skipping");
            }
            Err(e) => return Err(e.into()),
        }
    }

    report.people = seed_named(NamedRepo::people(pool), &fixture.people).await?;
    report.planets = seed_named(NamedRepo::planets(pool), &fixture.planets).await?;

    Ok(report)
}

/// Run the seed command
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let fixture = Fixture::parse(&contents)?;

    let database_url = super::database_url(args.database_url);
    let pool = connect(&database_url, 1)
        .await
        .context("Failed to open catalog database")?;

    let report = seed(&pool, &fixture).await?;
    tracing::info!(
        users = report.users,
        people = report.people,
        planets = report.planets,
        "Seed complete"
    );

    Ok(())
}
