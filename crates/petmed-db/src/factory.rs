//! Composition utilities for wiring repositories over `SQLite` backends.
//!
//! Focused purely on construction — no domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use petmed_core::Repos;

use crate::repositories::{
    SqliteMedicineRepository, SqlitePetMedicineRepository, SqlitePetRepository,
    SqliteStoreRepository,
};

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    /// Returns the `Repos` container from `petmed-core` holding
    /// trait-object-wrapped repositories over the shared pool.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqlitePetRepository::new(pool.clone())),
            Arc::new(SqliteMedicineRepository::new(pool.clone())),
            Arc::new(SqliteStoreRepository::new(pool.clone())),
            Arc::new(SqlitePetMedicineRepository::new(pool)),
        )
    }

    /// Create a pet repository from a pool.
    pub fn pet_repository(pool: SqlitePool) -> Arc<SqlitePetRepository> {
        Arc::new(SqlitePetRepository::new(pool))
    }

    /// Create a medicine cache repository from a pool.
    pub fn medicine_repository(pool: SqlitePool) -> Arc<SqliteMedicineRepository> {
        Arc::new(SqliteMedicineRepository::new(pool))
    }

    /// Create a store repository from a pool.
    pub fn store_repository(pool: SqlitePool) -> Arc<SqliteStoreRepository> {
        Arc::new(SqliteStoreRepository::new(pool))
    }

    /// Create a pet-medicine association repository from a pool.
    pub fn pet_medicine_repository(pool: SqlitePool) -> Arc<SqlitePetMedicineRepository> {
        Arc::new(SqlitePetMedicineRepository::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied (the same bootstrap sequence, not a copy of the DDL).
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> Result<Self, crate::setup::SetupError> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Build the full repository container over this test database.
    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(self.pool.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn build_repos_wires_all_four_repositories() {
        let db = TestDb::new().await.unwrap();
        let repos = db.repos();

        // every repository answers against the shared schema
        assert!(repos.pets.list().await.unwrap().is_empty());
        assert!(repos.medicines.list().await.unwrap().is_empty());
        assert!(repos.stores.list_active().await.unwrap().is_empty());
        assert!(repos.pet_medicines.list_for_pet(1).await.unwrap().is_empty());
    }
}
