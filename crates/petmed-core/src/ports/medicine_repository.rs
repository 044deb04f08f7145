//! Medicine cache repository trait definition.
//!
//! The local medicine table is a last-known-good cache of the remote
//! catalog: the remote copy is authoritative whenever reachable, and every
//! successful fetch replaces the cache wholesale.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Medicine, MedicineUpdate, NewMedicine};

/// Repository for the locally cached medicine catalog.
#[async_trait]
pub trait MedicineRepository: Send + Sync {
    /// Insert a single medicine, returning its assigned ID.
    async fn insert(&self, medicine: &NewMedicine) -> Result<i64, RepositoryError>;

    /// List all cached medicines, ordered by name.
    async fn list(&self) -> Result<Vec<Medicine>, RepositoryError>;

    /// Apply a partial-field update.
    async fn update(&self, id: i64, update: &MedicineUpdate) -> Result<(), RepositoryError>;

    /// Delete a cached medicine by ID.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// Replace the entire cache with a catalog snapshot, keeping the
    /// source-assigned ids.
    async fn replace_all(&self, catalog: &[Medicine]) -> Result<(), RepositoryError>;

    /// Number of cached medicines.
    async fn count(&self) -> Result<i64, RepositoryError>;
}
