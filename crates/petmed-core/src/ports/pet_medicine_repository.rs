//! Pet-medicine association repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{MedicineKey, NewPetMedicine, PetMedicine};

/// Repository for (pet, medicine) association rows.
///
/// The (`pet_id`, `medicine_id`) pair is the logical identity: upserting an
/// existing pair overwrites the row rather than erroring, last write wins.
#[async_trait]
pub trait PetMedicineRepository: Send + Sync {
    /// Insert or replace the row for this (pet, medicine) pair, returning
    /// the row ID.
    async fn upsert(&self, link: &NewPetMedicine) -> Result<i64, RepositoryError>;

    /// All associations for a pet, most recently added first.
    async fn list_for_pet(&self, pet_id: i64) -> Result<Vec<PetMedicine>, RepositoryError>;

    /// Associations whose medicine name contains the term, ordered by name.
    async fn search_for_pet(
        &self,
        pet_id: i64,
        term: &str,
    ) -> Result<Vec<PetMedicine>, RepositoryError>;

    /// Remove one association. No-op if the pair is absent.
    async fn delete_one(&self, pet_id: i64, medicine_id: &MedicineKey)
        -> Result<(), RepositoryError>;

    /// Remove every association for a pet.
    async fn delete_all_for_pet(&self, pet_id: i64) -> Result<(), RepositoryError>;
}
