//! `SQLite` implementation of the pet repository.

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use petmed_core::domain::{AnimalType, NewPet, Pet, PetUpdate};
use petmed_core::ports::{PetRepository, RepositoryError};

use super::row_mappers::parse_datetime;
use super::storage;

const ENTITY: &str = "pet";

/// `SQLite` implementation of the `PetRepository` trait.
pub struct SqlitePetRepository {
    pool: SqlitePool,
}

impl SqlitePetRepository {
    /// Create a new `SQLite` pet repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PetRow {
    id: i64,
    name: String,
    breed: String,
    age: i64,
    #[sqlx(rename = "hasPedigree")]
    has_pedigree: bool,
    #[sqlx(rename = "animalType")]
    animal_type: String,
    photo: Option<String>,
    #[sqlx(rename = "createdAt")]
    created_at: String,
}

fn row_to_pet(row: PetRow) -> Pet {
    Pet {
        id: row.id,
        name: row.name,
        breed: row.breed,
        age: u32::try_from(row.age).unwrap_or_default(),
        has_pedigree: row.has_pedigree,
        animal_type: AnimalType::from_str_lossy(&row.animal_type),
        // legacy rows stored missing photos as empty strings
        photo: row.photo.filter(|p| !p.is_empty()),
        created_at: parse_datetime(&row.created_at),
    }
}

const PET_SELECT: &str =
    "SELECT id, name, breed, age, hasPedigree, animalType, photo, createdAt FROM pets";

#[async_trait]
impl PetRepository for SqlitePetRepository {
    async fn insert(&self, pet: &NewPet) -> Result<i64, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO pets (name, breed, age, hasPedigree, animalType, photo)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&pet.name)
        .bind(&pet.breed)
        .bind(i64::from(pet.age))
        .bind(pet.has_pedigree)
        .bind(pet.animal_type.as_str())
        .bind(&pet.photo)
        .execute(&self.pool)
        .await
        .map_err(storage("insert", ENTITY))?;

        Ok(result.last_insert_rowid())
    }

    async fn list(&self) -> Result<Vec<Pet>, RepositoryError> {
        let rows = sqlx::query_as::<_, PetRow>(&format!("{PET_SELECT} ORDER BY createdAt DESC"))
            .fetch_all(&self.pool)
            .await
            .map_err(storage("list", ENTITY))?;

        Ok(rows.into_iter().map(row_to_pet).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Pet, RepositoryError> {
        let row = sqlx::query_as::<_, PetRow>(&format!("{PET_SELECT} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage("get", ENTITY))?
            .ok_or_else(|| RepositoryError::NotFound(format!("pet {id}")))?;

        Ok(row_to_pet(row))
    }

    async fn update(&self, id: i64, update: &PetUpdate) -> Result<(), RepositoryError> {
        if update.is_empty() {
            return Err(RepositoryError::EmptyUpdate(ENTITY));
        }

        let mut qb = QueryBuilder::<Sqlite>::new("UPDATE pets SET ");
        {
            let mut set = qb.separated(", ");
            if let Some(name) = &update.name {
                set.push("name = ").push_bind_unseparated(name.clone());
            }
            if let Some(breed) = &update.breed {
                set.push("breed = ").push_bind_unseparated(breed.clone());
            }
            if let Some(age) = update.age {
                set.push("age = ").push_bind_unseparated(i64::from(age));
            }
            if let Some(has_pedigree) = update.has_pedigree {
                set.push("hasPedigree = ").push_bind_unseparated(has_pedigree);
            }
            if let Some(animal_type) = update.animal_type {
                set.push("animalType = ")
                    .push_bind_unseparated(animal_type.as_str());
            }
            if let Some(photo) = &update.photo {
                set.push("photo = ").push_bind_unseparated(photo.clone());
            }
        }
        qb.push(" WHERE id = ").push_bind(id);

        let result = qb
            .build()
            .execute(&self.pool)
            .await
            .map_err(storage("update", ENTITY))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("pet {id}")));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM pets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage("delete", ENTITY))?;

        Ok(())
    }
}
