#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    AnimalType, ListedPrice, Medicine, MedicineDetails, MedicineKey, MedicineUpdate, NewMedicine,
    NewPet, NewPetMedicine, NewStore, Pet, PetMedicine, PetUpdate, Store, StoreListing,
    StoreUpdate,
};
pub use ports::{
    CandidateFailure, CatalogPort, MedicineRepository, PetMedicineRepository, PetRepository,
    ProbeOutcome, Repos, RepositoryError, StoreRepository,
};
pub use services::{
    BestPrice, CarriedMedicine, CatalogSearch, CatalogService, CatalogSource,
    MedicineAvailability, PriceBoard, StoreInventory,
};
