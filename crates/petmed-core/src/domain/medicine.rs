//! Medicine catalog domain types.
//!
//! Field names match the remote catalog protocol (and the legacy cache
//! table columns) verbatim, so the same struct deserializes straight off
//! the wire.

use serde::{Deserialize, Serialize};

/// A catalog medicine.
///
/// The identifier is assigned by whichever source produced the record —
/// the remote catalog service or the local cache. The remote copy is
/// authoritative whenever reachable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medicine {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub ean: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub laboratorio: Option<String>,
    #[serde(default)]
    pub forma_administracao: Option<String>,
    #[serde(default)]
    pub indicacoes: Option<String>,
}

impl Medicine {
    /// Case-insensitive substring match over name, laboratory and type,
    /// the same fields the search screen filters on.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        let hit = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|v| v.to_lowercase().contains(&term))
        };
        self.nome.to_lowercase().contains(&term) || hit(&self.laboratorio) || hit(&self.tipo)
    }

    /// Catalog attributes captured into the association details blob.
    pub fn details(&self) -> MedicineDetails {
        MedicineDetails {
            ean: self.ean.clone(),
            tipo: self.tipo.clone(),
            laboratorio: self.laboratorio.clone(),
            forma_administracao: self.forma_administracao.clone(),
            indicacoes: self.indicacoes.clone(),
        }
    }
}

/// The denormalized attribute bag stored alongside a pet-medicine
/// association. A snapshot at association time — never live-synced with
/// later catalog updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MedicineDetails {
    #[serde(default)]
    pub ean: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub laboratorio: Option<String>,
    #[serde(default)]
    pub forma_administracao: Option<String>,
    #[serde(default)]
    pub indicacoes: Option<String>,
}

/// A medicine to be inserted into the local cache (no ID yet).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMedicine {
    pub nome: String,
    pub ean: Option<String>,
    pub tipo: Option<String>,
    pub laboratorio: Option<String>,
    pub forma_administracao: Option<String>,
    pub indicacoes: Option<String>,
}

/// Partial-field update for a cached medicine.
#[derive(Debug, Clone, Default)]
pub struct MedicineUpdate {
    pub nome: Option<String>,
    pub ean: Option<String>,
    pub tipo: Option<String>,
    pub laboratorio: Option<String>,
    pub forma_administracao: Option<String>,
    pub indicacoes: Option<String>,
}

impl MedicineUpdate {
    pub const fn is_empty(&self) -> bool {
        self.nome.is_none()
            && self.ean.is_none()
            && self.tipo.is_none()
            && self.laboratorio.is_none()
            && self.forma_administracao.is_none()
            && self.indicacoes.is_none()
    }
}
