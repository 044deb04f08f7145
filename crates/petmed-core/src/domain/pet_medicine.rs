//! Pet-medicine association types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::medicine::Medicine;

/// Canonical string form of a medicine identifier.
///
/// Medicine ids arrive as integers from the remote catalog and as text from
/// the association table; every comparison goes through this newtype so no
/// ad hoc to-string coercion is scattered around.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MedicineKey(String);

impl MedicineKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for MedicineKey {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for MedicineKey {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for MedicineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MedicineKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Id fields are integers or strings depending on the source.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

/// A persisted (pet, medicine) link row.
///
/// Identity is the (`pet_id`, `medicine_id`) pair — at most one row per
/// pair, re-associating overwrites. `medicine_details` is an opaque JSON
/// snapshot of catalog attributes captured at association time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetMedicine {
    pub id: i64,
    pub pet_id: i64,
    pub medicine_id: MedicineKey,
    pub medicine_name: String,
    pub medicine_details: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PetMedicine {
    /// Parse the details blob back into catalog attributes, if present and
    /// well-formed.
    pub fn parsed_details(&self) -> Option<super::medicine::MedicineDetails> {
        self.medicine_details
            .as_deref()
            .and_then(|blob| serde_json::from_str(blob).ok())
    }
}

/// An association to be upserted (no row ID or timestamp yet).
#[derive(Debug, Clone)]
pub struct NewPetMedicine {
    pub pet_id: i64,
    pub medicine_id: MedicineKey,
    pub medicine_name: String,
    pub medicine_details: Option<String>,
}

impl NewPetMedicine {
    /// Capture a catalog medicine for a pet, snapshotting its attributes
    /// into the details blob.
    pub fn from_catalog(pet_id: i64, medicine: &Medicine) -> Self {
        Self {
            pet_id,
            medicine_id: MedicineKey::from(medicine.id),
            medicine_name: medicine.nome.clone(),
            medicine_details: serde_json::to_string(&medicine.details()).ok(),
        }
    }
}
