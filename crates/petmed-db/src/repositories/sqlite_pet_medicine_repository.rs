//! `SQLite` implementation of the pet-medicine association repository.
//!
//! Association identity is the (petId, medicineId) pair: the table carries
//! a UNIQUE constraint on it and `upsert` uses INSERT OR REPLACE, so
//! re-associating the same medicine overwrites the previous snapshot
//! instead of erroring.

use async_trait::async_trait;
use sqlx::SqlitePool;

use petmed_core::domain::{MedicineKey, NewPetMedicine, PetMedicine};
use petmed_core::ports::{PetMedicineRepository, RepositoryError};

use super::row_mappers::parse_datetime;
use super::storage;

const ENTITY: &str = "pet medicine";

/// `SQLite` implementation of the `PetMedicineRepository` trait.
pub struct SqlitePetMedicineRepository {
    pool: SqlitePool,
}

impl SqlitePetMedicineRepository {
    /// Create a new `SQLite` pet-medicine repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PetMedicineRow {
    id: i64,
    #[sqlx(rename = "petId")]
    pet_id: i64,
    #[sqlx(rename = "medicineId")]
    medicine_id: String,
    #[sqlx(rename = "medicineName")]
    medicine_name: String,
    #[sqlx(rename = "medicineDetails")]
    medicine_details: Option<String>,
    #[sqlx(rename = "createdAt")]
    created_at: String,
}

fn row_to_link(row: PetMedicineRow) -> PetMedicine {
    PetMedicine {
        id: row.id,
        pet_id: row.pet_id,
        medicine_id: MedicineKey::new(row.medicine_id),
        medicine_name: row.medicine_name,
        medicine_details: row.medicine_details.filter(|v| !v.is_empty()),
        created_at: parse_datetime(&row.created_at),
    }
}

const LINK_SELECT: &str = "SELECT id, petId, medicineId, medicineName, medicineDetails, createdAt \
                           FROM pet_medicines";

#[async_trait]
impl PetMedicineRepository for SqlitePetMedicineRepository {
    async fn upsert(&self, link: &NewPetMedicine) -> Result<i64, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT OR REPLACE INTO pet_medicines (petId, medicineId, medicineName, medicineDetails)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(link.pet_id)
        .bind(link.medicine_id.as_str())
        .bind(&link.medicine_name)
        .bind(&link.medicine_details)
        .execute(&self.pool)
        .await
        .map_err(storage("upsert", ENTITY))?;

        Ok(result.last_insert_rowid())
    }

    async fn list_for_pet(&self, pet_id: i64) -> Result<Vec<PetMedicine>, RepositoryError> {
        let rows = sqlx::query_as::<_, PetMedicineRow>(&format!(
            "{LINK_SELECT} WHERE petId = ? ORDER BY createdAt DESC"
        ))
        .bind(pet_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage("list_for_pet", ENTITY))?;

        Ok(rows.into_iter().map(row_to_link).collect())
    }

    async fn search_for_pet(
        &self,
        pet_id: i64,
        term: &str,
    ) -> Result<Vec<PetMedicine>, RepositoryError> {
        let rows = sqlx::query_as::<_, PetMedicineRow>(&format!(
            "{LINK_SELECT} WHERE petId = ? AND medicineName LIKE ? ORDER BY medicineName ASC"
        ))
        .bind(pet_id)
        .bind(format!("%{term}%"))
        .fetch_all(&self.pool)
        .await
        .map_err(storage("search_for_pet", ENTITY))?;

        Ok(rows.into_iter().map(row_to_link).collect())
    }

    async fn delete_one(
        &self,
        pet_id: i64,
        medicine_id: &MedicineKey,
    ) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM pet_medicines WHERE petId = ? AND medicineId = ?")
            .bind(pet_id)
            .bind(medicine_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(storage("delete_one", ENTITY))?;

        Ok(())
    }

    async fn delete_all_for_pet(&self, pet_id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM pet_medicines WHERE petId = ?")
            .bind(pet_id)
            .execute(&self.pool)
            .await
            .map_err(storage("delete_all_for_pet", ENTITY))?;

        Ok(())
    }
}
