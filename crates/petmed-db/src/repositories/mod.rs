//! `SQLite` implementations of the `petmed-core` repository ports.

mod row_mappers;
mod sqlite_medicine_repository;
mod sqlite_pet_medicine_repository;
mod sqlite_pet_repository;
mod sqlite_store_repository;

pub use sqlite_medicine_repository::SqliteMedicineRepository;
pub use sqlite_pet_medicine_repository::SqlitePetMedicineRepository;
pub use sqlite_pet_repository::SqlitePetRepository;
pub use sqlite_store_repository::SqliteStoreRepository;

use petmed_core::RepositoryError;

/// Build a storage-error mapper tagged with the attempted operation and
/// the entity it was issued against.
fn storage(
    operation: &'static str,
    entity: &'static str,
) -> impl Fn(sqlx::Error) -> RepositoryError {
    move |e| RepositoryError::Storage {
        operation,
        entity,
        message: e.to_string(),
    }
}
