//! `SQLite` implementation of the medicine cache repository.
//!
//! The medicines table is the last-known-good cache of the remote catalog;
//! `replace_all` swaps the whole snapshot in one transaction after a
//! successful remote fetch.

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use petmed_core::domain::{Medicine, MedicineUpdate, NewMedicine};
use petmed_core::ports::{MedicineRepository, RepositoryError};

use super::storage;

const ENTITY: &str = "medicine";

/// `SQLite` implementation of the `MedicineRepository` trait.
pub struct SqliteMedicineRepository {
    pool: SqlitePool,
}

impl SqliteMedicineRepository {
    /// Create a new `SQLite` medicine repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MedicineRow {
    id: i64,
    nome: String,
    ean: Option<String>,
    tipo: Option<String>,
    laboratorio: Option<String>,
    forma_administracao: Option<String>,
    indicacoes: Option<String>,
}

fn row_to_medicine(row: MedicineRow) -> Medicine {
    Medicine {
        id: row.id,
        nome: row.nome,
        ean: row.ean.filter(|v| !v.is_empty()),
        tipo: row.tipo.filter(|v| !v.is_empty()),
        laboratorio: row.laboratorio.filter(|v| !v.is_empty()),
        forma_administracao: row.forma_administracao.filter(|v| !v.is_empty()),
        indicacoes: row.indicacoes.filter(|v| !v.is_empty()),
    }
}

const MEDICINE_SELECT: &str =
    "SELECT id, nome, ean, tipo, laboratorio, forma_administracao, indicacoes FROM medicines";

#[async_trait]
impl MedicineRepository for SqliteMedicineRepository {
    async fn insert(&self, medicine: &NewMedicine) -> Result<i64, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO medicines (nome, ean, tipo, laboratorio, forma_administracao, indicacoes)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&medicine.nome)
        .bind(&medicine.ean)
        .bind(&medicine.tipo)
        .bind(&medicine.laboratorio)
        .bind(&medicine.forma_administracao)
        .bind(&medicine.indicacoes)
        .execute(&self.pool)
        .await
        .map_err(storage("insert", ENTITY))?;

        Ok(result.last_insert_rowid())
    }

    async fn list(&self) -> Result<Vec<Medicine>, RepositoryError> {
        let rows =
            sqlx::query_as::<_, MedicineRow>(&format!("{MEDICINE_SELECT} ORDER BY nome ASC"))
                .fetch_all(&self.pool)
                .await
                .map_err(storage("list", ENTITY))?;

        Ok(rows.into_iter().map(row_to_medicine).collect())
    }

    async fn update(&self, id: i64, update: &MedicineUpdate) -> Result<(), RepositoryError> {
        if update.is_empty() {
            return Err(RepositoryError::EmptyUpdate(ENTITY));
        }

        let mut qb = QueryBuilder::<Sqlite>::new("UPDATE medicines SET ");
        {
            let mut set = qb.separated(", ");
            if let Some(nome) = &update.nome {
                set.push("nome = ").push_bind_unseparated(nome.clone());
            }
            if let Some(ean) = &update.ean {
                set.push("ean = ").push_bind_unseparated(ean.clone());
            }
            if let Some(tipo) = &update.tipo {
                set.push("tipo = ").push_bind_unseparated(tipo.clone());
            }
            if let Some(laboratorio) = &update.laboratorio {
                set.push("laboratorio = ")
                    .push_bind_unseparated(laboratorio.clone());
            }
            if let Some(forma) = &update.forma_administracao {
                set.push("forma_administracao = ")
                    .push_bind_unseparated(forma.clone());
            }
            if let Some(indicacoes) = &update.indicacoes {
                set.push("indicacoes = ")
                    .push_bind_unseparated(indicacoes.clone());
            }
        }
        qb.push(" WHERE id = ").push_bind(id);

        let result = qb
            .build()
            .execute(&self.pool)
            .await
            .map_err(storage("update", ENTITY))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("medicine {id}")));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM medicines WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage("delete", ENTITY))?;

        Ok(())
    }

    async fn replace_all(&self, catalog: &[Medicine]) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(storage("replace_all", ENTITY))?;

        sqlx::query("DELETE FROM medicines")
            .execute(&mut *tx)
            .await
            .map_err(storage("replace_all", ENTITY))?;

        for medicine in catalog {
            // keep the source-assigned id so association keys stay valid
            sqlx::query(
                r#"
                INSERT INTO medicines (id, nome, ean, tipo, laboratorio, forma_administracao, indicacoes)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(medicine.id)
            .bind(&medicine.nome)
            .bind(&medicine.ean)
            .bind(&medicine.tipo)
            .bind(&medicine.laboratorio)
            .bind(&medicine.forma_administracao)
            .bind(&medicine.indicacoes)
            .execute(&mut *tx)
            .await
            .map_err(storage("replace_all", ENTITY))?;
        }

        tx.commit().await.map_err(storage("replace_all", ENTITY))
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM medicines")
            .fetch_one(&self.pool)
            .await
            .map_err(storage("count", ENTITY))?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    fn dipirona() -> NewMedicine {
        NewMedicine {
            nome: "Dipirona 500mg".to_string(),
            ean: Some("7891234567890".to_string()),
            tipo: Some("Analgésico".to_string()),
            laboratorio: Some("EMS".to_string()),
            forma_administracao: Some("Comprimido".to_string()),
            indicacoes: Some("Dor e febre".to_string()),
        }
    }

    fn catalog_medicine(id: i64, nome: &str) -> Medicine {
        Medicine {
            id,
            nome: nome.to_string(),
            ean: None,
            tipo: None,
            laboratorio: None,
            forma_administracao: None,
            indicacoes: None,
        }
    }

    async fn repo() -> SqliteMedicineRepository {
        SqliteMedicineRepository::new(setup_test_database().await.unwrap())
    }

    #[tokio::test]
    async fn insert_and_list_ordered_by_name() {
        let repo = repo().await;
        repo.insert(&NewMedicine {
            nome: "Paracetamol 750mg".to_string(),
            ean: None,
            tipo: None,
            laboratorio: None,
            forma_administracao: None,
            indicacoes: None,
        })
        .await
        .unwrap();
        repo.insert(&dipirona()).await.unwrap();

        let medicines = repo.list().await.unwrap();
        assert_eq!(medicines.len(), 2);
        assert_eq!(medicines[0].nome, "Dipirona 500mg");
        assert_eq!(medicines[1].nome, "Paracetamol 750mg");
    }

    #[tokio::test]
    async fn replace_all_swaps_the_snapshot_and_keeps_ids() {
        let repo = repo().await;
        repo.insert(&dipirona()).await.unwrap();

        repo.replace_all(&[
            catalog_medicine(10, "Ibuprofeno 600mg"),
            catalog_medicine(11, "Vermífugo"),
        ])
        .await
        .unwrap();

        let medicines = repo.list().await.unwrap();
        assert_eq!(medicines.len(), 2);
        assert!(medicines.iter().any(|m| m.id == 10));
        assert!(medicines.iter().any(|m| m.id == 11));
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn partial_update_and_delete() {
        let repo = repo().await;
        let id = repo.insert(&dipirona()).await.unwrap();

        repo.update(
            id,
            &MedicineUpdate {
                laboratorio: Some("Medley".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let medicines = repo.list().await.unwrap();
        assert_eq!(medicines[0].laboratorio.as_deref(), Some("Medley"));
        assert_eq!(medicines[0].nome, "Dipirona 500mg");

        repo.delete(id).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn empty_update_is_rejected() {
        let repo = repo().await;
        let id = repo.insert(&dipirona()).await.unwrap();

        let result = repo.update(id, &MedicineUpdate::default()).await;
        assert!(matches!(
            result,
            Err(RepositoryError::EmptyUpdate("medicine"))
        ));
    }
}
