//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Traits are minimal and CRUD-focused for repositories
//! - Total remote failure is data (a fallback outcome), not an error

pub mod catalog;
pub mod medicine_repository;
pub mod pet_medicine_repository;
pub mod pet_repository;
pub mod store_repository;

use std::sync::Arc;
use thiserror::Error;

pub use catalog::{CandidateFailure, CatalogPort, ProbeOutcome};
pub use medicine_repository::MedicineRepository;
pub use pet_medicine_repository::PetMedicineRepository;
pub use pet_repository::PetRepository;
pub use store_repository::StoreRepository;

/// Domain-specific errors for repository operations.
///
/// Abstracts away storage implementation details (e.g. sqlx errors) so
/// services and adapters handle failures uniformly.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Storage backend failure, tagged with the attempted operation and the
    /// entity it was issued against.
    #[error("{operation} failed for {entity}: {message}")]
    Storage {
        operation: &'static str,
        entity: &'static str,
        message: String,
    },

    /// A partial update was requested with zero fields to change.
    #[error("update for {0} has no fields to change")]
    EmptyUpdate(&'static str),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Container for all repository trait objects.
///
/// Adapters obtain one from `petmed_db::CoreFactory::build_repos` and hand
/// it to services without ever touching the storage handle themselves.
#[derive(Clone)]
pub struct Repos {
    /// Pet CRUD.
    pub pets: Arc<dyn PetRepository>,
    /// Local medicine catalog cache.
    pub medicines: Arc<dyn MedicineRepository>,
    /// Partner stores (soft-delete semantics).
    pub stores: Arc<dyn StoreRepository>,
    /// Pet-medicine associations.
    pub pet_medicines: Arc<dyn PetMedicineRepository>,
}

impl Repos {
    pub fn new(
        pets: Arc<dyn PetRepository>,
        medicines: Arc<dyn MedicineRepository>,
        stores: Arc<dyn StoreRepository>,
        pet_medicines: Arc<dyn PetMedicineRepository>,
    ) -> Self {
        Self {
            pets,
            medicines,
            stores,
            pet_medicines,
        }
    }
}
