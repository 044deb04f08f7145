//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the database pool and repositories (via petmed-db)
//! and the endpoint prober (via petmed-catalog). Command handlers receive
//! the composed context and never touch the pool.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use petmed_catalog::{CatalogConfig, DefaultEndpointProber};
use petmed_core::ports::Repos;
use petmed_core::services::CatalogService;
use petmed_db::{CoreFactory, setup_database};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the `SQLite` database file.
    pub db_path: PathBuf,
}

impl CliConfig {
    /// Create config with default paths.
    ///
    /// `PETMED_DB` overrides the database location; otherwise it lives
    /// under the platform data directory.
    pub fn with_defaults() -> Result<Self> {
        let db_path = match std::env::var_os("PETMED_DB") {
            Some(path) => PathBuf::from(path),
            None => dirs::data_dir()
                .context("no platform data directory available; set PETMED_DB")?
                .join("petmed")
                .join("petmed.db"),
        };
        Ok(Self { db_path })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Repository container over the shared pool.
    pub repos: Repos,
}

impl CliContext {
    /// Build a catalog service for one command invocation.
    ///
    /// The prober lives only for the invocation, matching the app's
    /// session-only memory of which endpoint worked.
    pub fn catalog_service(&self, endpoint: Option<&str>) -> Result<CatalogService> {
        let mut config = CatalogConfig::new();
        if let Some(base) = endpoint {
            config = config.with_preferred_base(base);
        }
        let prober = DefaultEndpointProber::new(config)?;
        Ok(CatalogService::new(
            Arc::new(prober),
            self.repos.medicines.clone(),
        ))
    }
}

/// Wire the database and repositories. Awaiting this is the
/// initialization-complete signal: every table exists once it returns.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    debug!(path = %config.db_path.display(), "opening database");
    let pool = setup_database(&config.db_path)
        .await
        .with_context(|| format!("initializing database at {}", config.db_path.display()))?;

    Ok(CliContext {
        repos: CoreFactory::build_repos(pool),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bootstrap_creates_the_database_and_wires_repos() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            db_path: dir.path().join("petmed.db"),
        };

        let ctx = bootstrap(config).await.unwrap();
        assert!(ctx.repos.pets.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn bootstrap_twice_against_the_same_file_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            db_path: dir.path().join("petmed.db"),
        };

        let _ = bootstrap(config.clone()).await.unwrap();
        // simulated app restart
        let ctx = bootstrap(config).await.unwrap();
        assert!(ctx.repos.stores.list_active().await.unwrap().is_empty());
    }
}
