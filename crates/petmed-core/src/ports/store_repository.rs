//! Store repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewStore, Store, StoreUpdate};

/// Repository for partner store records.
///
/// Deletion is soft: a deactivated store disappears from list queries but
/// its row and identifier are retained.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Insert a new store (active by default), returning its assigned ID.
    async fn insert(&self, store: &NewStore) -> Result<i64, RepositoryError>;

    /// List active stores, ordered by name.
    async fn list_active(&self) -> Result<Vec<Store>, RepositoryError>;

    /// Get a store by ID, active or not.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the row doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Store, RepositoryError>;

    /// Apply a partial-field update.
    async fn update(&self, id: i64, update: &StoreUpdate) -> Result<(), RepositoryError>;

    /// Soft-delete: mark the store inactive, preserving the row.
    async fn deactivate(&self, id: i64) -> Result<(), RepositoryError>;
}
