//! Pet domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of animal a pet record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalType {
    Dog,
    Cat,
}

impl AnimalType {
    /// Stable text form used in storage and on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
        }
    }

    /// Parse the stored text form. Unknown values fall back to `Dog`,
    /// matching the lenient reads the app has always done.
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "cat" => Self::Cat,
            _ => Self::Dog,
        }
    }
}

/// A pet that exists in the store with a database ID.
///
/// Use [`NewPet`] for records that haven't been persisted yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    /// Store-assigned identifier, unique and immutable after creation.
    pub id: i64,
    pub name: String,
    pub breed: String,
    /// Age in years, non-negative.
    pub age: u32,
    pub has_pedigree: bool,
    pub animal_type: AnimalType,
    /// Optional photo URI captured by the UI layer.
    pub photo: Option<String>,
    /// UTC timestamp assigned by the store on insert.
    pub created_at: DateTime<Utc>,
}

/// A pet to be inserted (no ID or timestamp yet).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPet {
    pub name: String,
    pub breed: String,
    pub age: u32,
    pub has_pedigree: bool,
    pub animal_type: AnimalType,
    pub photo: Option<String>,
}

/// Partial-field update for a pet. `None` fields are left untouched.
///
/// `photo` is doubly optional so a set photo can be cleared again
/// (`Some(None)` writes NULL).
#[derive(Debug, Clone, Default)]
pub struct PetUpdate {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub has_pedigree: Option<bool>,
    pub animal_type: Option<AnimalType>,
    pub photo: Option<Option<String>>,
}

impl PetUpdate {
    /// True when no field would change. Repositories reject such updates.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.breed.is_none()
            && self.age.is_none()
            && self.has_pedigree.is_none()
            && self.animal_type.is_none()
            && self.photo.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animal_type_round_trips_through_text() {
        assert_eq!(AnimalType::from_str_lossy(AnimalType::Cat.as_str()), AnimalType::Cat);
        assert_eq!(AnimalType::from_str_lossy(AnimalType::Dog.as_str()), AnimalType::Dog);
        // lenient fallback
        assert_eq!(AnimalType::from_str_lossy("parrot"), AnimalType::Dog);
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(PetUpdate::default().is_empty());

        let update = PetUpdate {
            age: Some(4),
            ..Default::default()
        };
        assert!(!update.is_empty());

        // clearing the photo counts as a change
        let update = PetUpdate {
            photo: Some(None),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
