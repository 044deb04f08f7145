//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for opening the
//! shared `SQLite` store and running the bootstrap sequence. Entry points
//! call this once with the resolved database path and only build
//! repositories from the returned pool — awaiting the returned future IS
//! the initialization-complete signal.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Error raised when opening the store or creating its schema fails.
///
/// Schema failures carry the name of the bootstrap step that failed; steps
/// already applied stay applied (creation is idempotent, retry is safe).
#[derive(Debug, Error)]
pub enum SetupError {
    /// The database file could not be opened or created.
    #[error("failed to open database: {source}")]
    Open {
        #[source]
        source: sqlx::Error,
    },

    /// One schema-creation step failed.
    #[error("schema step '{step}' failed: {source}")]
    Schema {
        step: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Opens the shared `SQLite` store and ensures the schema exists.
///
/// This function:
/// 1. Creates the parent directory and database file if missing
/// 2. Opens a single-connection pool (one writer; `SQLite` serializes
///    every statement through it)
/// 3. Creates all four tables and their indexes, in fixed order
///
/// # Errors
///
/// Returns [`SetupError::Open`] if the file cannot be opened or created,
/// or [`SetupError::Schema`] naming the failing bootstrap step.
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool, SetupError> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SetupError::Open {
            source: sqlx::Error::Io(e),
        })?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(db_path)
                .create_if_missing(true),
        )
        .await
        .map_err(|source| SetupError::Open { source })?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Creates a fresh in-memory database with the full production schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool, SetupError> {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .map_err(|source| SetupError::Open { source })?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// Steps run strictly in order — pets, medicines, stores, then the
/// association table whose uniqueness constraint keys on pet ids. Safe to
/// call multiple times as all statements use IF NOT EXISTS; the first
/// failing step aborts the sequence.
pub(crate) async fn create_schema(pool: &SqlitePool) -> Result<(), SetupError> {
    run_step(
        pool,
        "create pets table",
        r#"
        CREATE TABLE IF NOT EXISTS pets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            breed TEXT NOT NULL,
            age INTEGER NOT NULL,
            hasPedigree BOOLEAN NOT NULL,
            animalType TEXT NOT NULL,
            photo TEXT,
            createdAt DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .await?;

    run_step(
        pool,
        "create medicines table",
        r#"
        CREATE TABLE IF NOT EXISTS medicines (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL,
            ean TEXT,
            tipo TEXT,
            laboratorio TEXT,
            forma_administracao TEXT,
            indicacoes TEXT,
            createdAt DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .await?;

    run_step(
        pool,
        "create stores table",
        r#"
        CREATE TABLE IF NOT EXISTS stores (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL,
            endereco TEXT,
            telefone TEXT,
            email TEXT,
            cnpj TEXT,
            horario_funcionamento TEXT,
            latitude REAL,
            longitude REAL,
            ativa BOOLEAN DEFAULT 1,
            createdAt DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .await?;

    run_step(
        pool,
        "create pet_medicines table",
        r#"
        CREATE TABLE IF NOT EXISTS pet_medicines (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            petId INTEGER NOT NULL,
            medicineId TEXT NOT NULL,
            medicineName TEXT NOT NULL,
            medicineDetails TEXT,
            createdAt DATETIME DEFAULT CURRENT_TIMESTAMP,
            UNIQUE(petId, medicineId)
        )
        "#,
    )
    .await?;

    // Index on petId for the per-pet list and search queries
    run_step(
        pool,
        "index pet_medicines by pet",
        "CREATE INDEX IF NOT EXISTS idx_pet_medicines_pet ON pet_medicines(petId)",
    )
    .await?;

    Ok(())
}

async fn run_step(
    pool: &SqlitePool,
    step: &'static str,
    sql: &str,
) -> Result<(), SetupError> {
    sqlx::query(sql)
        .execute(pool)
        .await
        .map_err(|source| SetupError::Schema { step, source })?;
    debug!(step, "schema step applied");
    Ok(())
}
