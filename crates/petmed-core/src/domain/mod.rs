//! Domain types for the petmed core.
//!
//! These types represent pets, medicines, stores and their associations,
//! independent of any infrastructure concerns (database, network, etc.).

pub mod medicine;
pub mod pet;
pub mod pet_medicine;
pub mod store;

pub use medicine::{Medicine, MedicineDetails, MedicineUpdate, NewMedicine};
pub use pet::{AnimalType, NewPet, Pet, PetUpdate};
pub use pet_medicine::{MedicineKey, NewPetMedicine, PetMedicine};
pub use store::{ListedPrice, NewStore, Store, StoreListing, StoreUpdate};
