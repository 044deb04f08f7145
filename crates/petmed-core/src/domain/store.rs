//! Partner store domain types, plus the wire types the price service
//! returns for each store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::pet_medicine::MedicineKey;

/// A partner store record.
///
/// Stores are soft-deleted: `ativa = false` removes them from every list
/// query but the row stays retrievable by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub nome: String,
    pub endereco: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub cnpj: Option<String>,
    pub horario_funcionamento: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub ativa: bool,
    pub created_at: DateTime<Utc>,
}

/// A store to be inserted (no ID or timestamp yet). `ativa` defaults true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStore {
    pub nome: String,
    pub endereco: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub cnpj: Option<String>,
    pub horario_funcionamento: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Partial-field update for a store. Coordinates are doubly optional so a
/// set position can be cleared again.
#[derive(Debug, Clone, Default)]
pub struct StoreUpdate {
    pub nome: Option<String>,
    pub endereco: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub cnpj: Option<String>,
    pub horario_funcionamento: Option<String>,
    pub latitude: Option<Option<f64>>,
    pub longitude: Option<Option<f64>>,
    pub ativa: Option<bool>,
}

impl StoreUpdate {
    pub const fn is_empty(&self) -> bool {
        self.nome.is_none()
            && self.endereco.is_none()
            && self.telefone.is_none()
            && self.email.is_none()
            && self.cnpj.is_none()
            && self.horario_funcionamento.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.ativa.is_none()
    }
}

/// One (medicine, price) entry in a store's remote product listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListedPrice {
    #[serde(rename = "medicamentoId")]
    pub medicamento_id: MedicineKey,
    #[serde(with = "rust_decimal::serde::float")]
    pub preco: Decimal,
}

/// A store as returned by the remote price service, carrying its product
/// listing. Not persisted locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreListing {
    #[serde(deserialize_with = "string_or_int")]
    pub id: String,
    pub nome: String,
    #[serde(default)]
    pub endereco: Option<String>,
    #[serde(default)]
    pub produtos: Vec<ListedPrice>,
}

impl StoreListing {
    /// Price this store charges for the given medicine, if listed.
    pub fn price_of(&self, key: &MedicineKey) -> Option<Decimal> {
        self.produtos
            .iter()
            .find(|p| p.medicamento_id == *key)
            .map(|p| p.preco)
    }

    pub fn carries(&self, key: &MedicineKey) -> bool {
        self.price_of(key).is_some()
    }
}

/// Store ids arrive as integers or strings depending on the service
/// revision; normalize to text at the boundary.
fn string_or_int<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Int(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}
