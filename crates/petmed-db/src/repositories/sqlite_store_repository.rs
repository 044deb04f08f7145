//! `SQLite` implementation of the store repository.
//!
//! Stores are never hard-deleted: `deactivate` flips the `ativa` flag and
//! every list query filters on it, so history and identifiers survive.

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use petmed_core::domain::{NewStore, Store, StoreUpdate};
use petmed_core::ports::{RepositoryError, StoreRepository};

use super::row_mappers::parse_datetime;
use super::storage;

const ENTITY: &str = "store";

/// `SQLite` implementation of the `StoreRepository` trait.
pub struct SqliteStoreRepository {
    pool: SqlitePool,
}

impl SqliteStoreRepository {
    /// Create a new `SQLite` store repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct StoreRow {
    id: i64,
    nome: String,
    endereco: Option<String>,
    telefone: Option<String>,
    email: Option<String>,
    cnpj: Option<String>,
    horario_funcionamento: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    ativa: bool,
    #[sqlx(rename = "createdAt")]
    created_at: String,
}

fn row_to_store(row: StoreRow) -> Store {
    Store {
        id: row.id,
        nome: row.nome,
        endereco: row.endereco.filter(|v| !v.is_empty()),
        telefone: row.telefone.filter(|v| !v.is_empty()),
        email: row.email.filter(|v| !v.is_empty()),
        cnpj: row.cnpj.filter(|v| !v.is_empty()),
        horario_funcionamento: row.horario_funcionamento.filter(|v| !v.is_empty()),
        latitude: row.latitude,
        longitude: row.longitude,
        ativa: row.ativa,
        created_at: parse_datetime(&row.created_at),
    }
}

const STORE_SELECT: &str = "SELECT id, nome, endereco, telefone, email, cnpj, \
                            horario_funcionamento, latitude, longitude, ativa, createdAt \
                            FROM stores";

#[async_trait]
impl StoreRepository for SqliteStoreRepository {
    async fn insert(&self, store: &NewStore) -> Result<i64, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO stores (nome, endereco, telefone, email, cnpj, horario_funcionamento, latitude, longitude)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&store.nome)
        .bind(&store.endereco)
        .bind(&store.telefone)
        .bind(&store.email)
        .bind(&store.cnpj)
        .bind(&store.horario_funcionamento)
        .bind(store.latitude)
        .bind(store.longitude)
        .execute(&self.pool)
        .await
        .map_err(storage("insert", ENTITY))?;

        Ok(result.last_insert_rowid())
    }

    async fn list_active(&self) -> Result<Vec<Store>, RepositoryError> {
        let rows = sqlx::query_as::<_, StoreRow>(&format!(
            "{STORE_SELECT} WHERE ativa = 1 ORDER BY nome ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(storage("list_active", ENTITY))?;

        Ok(rows.into_iter().map(row_to_store).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Store, RepositoryError> {
        let row = sqlx::query_as::<_, StoreRow>(&format!("{STORE_SELECT} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage("get", ENTITY))?
            .ok_or_else(|| RepositoryError::NotFound(format!("store {id}")))?;

        Ok(row_to_store(row))
    }

    async fn update(&self, id: i64, update: &StoreUpdate) -> Result<(), RepositoryError> {
        if update.is_empty() {
            return Err(RepositoryError::EmptyUpdate(ENTITY));
        }

        let mut qb = QueryBuilder::<Sqlite>::new("UPDATE stores SET ");
        {
            let mut set = qb.separated(", ");
            if let Some(nome) = &update.nome {
                set.push("nome = ").push_bind_unseparated(nome.clone());
            }
            if let Some(endereco) = &update.endereco {
                set.push("endereco = ")
                    .push_bind_unseparated(endereco.clone());
            }
            if let Some(telefone) = &update.telefone {
                set.push("telefone = ")
                    .push_bind_unseparated(telefone.clone());
            }
            if let Some(email) = &update.email {
                set.push("email = ").push_bind_unseparated(email.clone());
            }
            if let Some(cnpj) = &update.cnpj {
                set.push("cnpj = ").push_bind_unseparated(cnpj.clone());
            }
            if let Some(horario) = &update.horario_funcionamento {
                set.push("horario_funcionamento = ")
                    .push_bind_unseparated(horario.clone());
            }
            if let Some(latitude) = update.latitude {
                set.push("latitude = ").push_bind_unseparated(latitude);
            }
            if let Some(longitude) = update.longitude {
                set.push("longitude = ").push_bind_unseparated(longitude);
            }
            if let Some(ativa) = update.ativa {
                set.push("ativa = ").push_bind_unseparated(ativa);
            }
        }
        qb.push(" WHERE id = ").push_bind(id);

        let result = qb
            .build()
            .execute(&self.pool)
            .await
            .map_err(storage("update", ENTITY))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("store {id}")));
        }

        Ok(())
    }

    async fn deactivate(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE stores SET ativa = 0 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage("deactivate", ENTITY))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("store {id}")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    fn petcenter() -> NewStore {
        NewStore {
            nome: "PetCenter Araxá".to_string(),
            endereco: Some("Rua das Flores, 123 - Araxá, MG".to_string()),
            telefone: Some("(34) 3661-0000".to_string()),
            email: Some("contato@petcenter.com.br".to_string()),
            cnpj: Some("12.345.678/0001-90".to_string()),
            horario_funcionamento: Some("08:00-18:00".to_string()),
            latitude: Some(-19.5902),
            longitude: Some(-46.9408),
        }
    }

    async fn repo() -> SqliteStoreRepository {
        SqliteStoreRepository::new(setup_test_database().await.unwrap())
    }

    #[tokio::test]
    async fn insert_defaults_to_active() {
        let repo = repo().await;
        let id = repo.insert(&petcenter()).await.unwrap();

        let store = repo.get_by_id(id).await.unwrap();
        assert!(store.ativa);
        assert_eq!(store.nome, "PetCenter Araxá");
        assert_eq!(store.latitude, Some(-19.5902));
    }

    #[tokio::test]
    async fn deactivation_hides_from_list_but_keeps_the_row() {
        let repo = repo().await;
        let id = repo.insert(&petcenter()).await.unwrap();

        repo.deactivate(id).await.unwrap();

        assert!(repo.list_active().await.unwrap().is_empty());

        // the row is still retrievable by id
        let store = repo.get_by_id(id).await.unwrap();
        assert!(!store.ativa);
        assert_eq!(store.id, id);
    }

    #[tokio::test]
    async fn list_active_orders_by_name() {
        let repo = repo().await;
        repo.insert(&NewStore {
            nome: "Vet Shop Sul".to_string(),
            endereco: None,
            telefone: None,
            email: None,
            cnpj: None,
            horario_funcionamento: None,
            latitude: None,
            longitude: None,
        })
        .await
        .unwrap();
        repo.insert(&petcenter()).await.unwrap();

        let stores = repo.list_active().await.unwrap();
        assert_eq!(stores.len(), 2);
        assert_eq!(stores[0].nome, "PetCenter Araxá");
    }

    #[tokio::test]
    async fn update_can_reactivate_a_store() {
        let repo = repo().await;
        let id = repo.insert(&petcenter()).await.unwrap();
        repo.deactivate(id).await.unwrap();

        repo.update(
            id,
            &StoreUpdate {
                ativa: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(repo.list_active().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn coordinates_can_be_cleared() {
        let repo = repo().await;
        let id = repo.insert(&petcenter()).await.unwrap();

        repo.update(
            id,
            &StoreUpdate {
                latitude: Some(None),
                longitude: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let store = repo.get_by_id(id).await.unwrap();
        assert!(store.latitude.is_none());
        assert!(store.longitude.is_none());
    }

    #[tokio::test]
    async fn deactivating_a_missing_store_is_not_found() {
        let repo = repo().await;
        let result = repo.deactivate(42).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }
}
