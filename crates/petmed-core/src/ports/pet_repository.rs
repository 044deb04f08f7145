//! Pet repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewPet, Pet, PetUpdate};

/// Repository for pet persistence operations.
///
/// Implementations are responsible for all storage details. The single-pet
/// business constraint is enforced by the calling layer, not here.
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Insert a new pet, returning its store-assigned ID.
    async fn insert(&self, pet: &NewPet) -> Result<i64, RepositoryError>;

    /// List all pets, most recently created first.
    async fn list(&self) -> Result<Vec<Pet>, RepositoryError>;

    /// Get a pet by ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the pet doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Pet, RepositoryError>;

    /// Apply a partial-field update.
    ///
    /// Returns `Err(RepositoryError::EmptyUpdate)` when the update carries
    /// no fields.
    async fn update(&self, id: i64, update: &PetUpdate) -> Result<(), RepositoryError>;

    /// Hard-delete a pet by ID.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
