//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use petmed_core::domain::AnimalType;

/// Pet medicine companion: register pets, keep their medicine cabinet,
/// and compare prices across partner stores.
#[derive(Parser)]
#[command(name = "petmed", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage pets
    Pet {
        #[command(subcommand)]
        command: PetCommand,
    },
    /// Manage a pet's medicine cabinet
    Cabinet {
        #[command(subcommand)]
        command: CabinetCommand,
    },
    /// Manage partner stores
    Store {
        #[command(subcommand)]
        command: StoreCommand,
    },
    /// Search the remote medicine catalog
    Search {
        /// Filter by name, laboratory or type
        term: Option<String>,
        /// Preferred catalog server base URL, probed before the defaults
        #[arg(long, env = "PETMED_ENDPOINT")]
        endpoint: Option<String>,
    },
    /// Compare prices for a pet's medicines across stores
    Prices {
        /// Pet whose cabinet to price
        pet_id: i64,
        /// Group the report by store instead of by medicine
        #[arg(long)]
        by_store: bool,
        /// Preferred catalog server base URL, probed before the defaults
        #[arg(long, env = "PETMED_ENDPOINT")]
        endpoint: Option<String>,
    },
}

/// CLI-facing animal kind, mapped onto the domain enum.
#[derive(Clone, Copy, ValueEnum)]
pub enum AnimalKind {
    Dog,
    Cat,
}

impl From<AnimalKind> for AnimalType {
    fn from(kind: AnimalKind) -> Self {
        match kind {
            AnimalKind::Dog => Self::Dog,
            AnimalKind::Cat => Self::Cat,
        }
    }
}

#[derive(Subcommand)]
pub enum PetCommand {
    /// Register a pet
    Add {
        name: String,
        breed: String,
        age: u32,
        #[arg(long)]
        pedigree: bool,
        #[arg(long, value_enum, default_value = "dog")]
        kind: AnimalKind,
        #[arg(long)]
        photo: Option<String>,
    },
    /// List registered pets
    List,
    /// Show one pet
    Show { id: i64 },
    /// Update fields of a pet
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        breed: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        pedigree: Option<bool>,
        #[arg(long, value_enum)]
        kind: Option<AnimalKind>,
        #[arg(long)]
        photo: Option<String>,
        /// Remove the stored photo
        #[arg(long, conflicts_with = "photo")]
        clear_photo: bool,
    },
    /// Delete a pet
    Remove { id: i64 },
}

#[derive(Subcommand)]
pub enum CabinetCommand {
    /// Attach a catalog medicine to a pet
    Add {
        pet_id: i64,
        /// Catalog id of the medicine to attach
        medicine_id: i64,
        /// Preferred catalog server base URL, probed before the defaults
        #[arg(long, env = "PETMED_ENDPOINT")]
        endpoint: Option<String>,
    },
    /// List a pet's medicines
    List { pet_id: i64 },
    /// Search a pet's medicines by name
    Search { pet_id: i64, term: String },
    /// Detach one medicine from a pet
    Remove { pet_id: i64, medicine_id: String },
    /// Detach every medicine from a pet
    Clear { pet_id: i64 },
}

#[derive(Subcommand)]
pub enum StoreCommand {
    /// Register a partner store
    Add {
        nome: String,
        #[arg(long)]
        endereco: Option<String>,
        #[arg(long)]
        telefone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        cnpj: Option<String>,
        #[arg(long)]
        horario: Option<String>,
        #[arg(long, requires = "longitude")]
        latitude: Option<f64>,
        #[arg(long, requires = "latitude")]
        longitude: Option<f64>,
    },
    /// List active stores
    List,
    /// Show one store, active or not
    Show { id: i64 },
    /// Update fields of a store
    Update {
        id: i64,
        #[arg(long)]
        nome: Option<String>,
        #[arg(long)]
        endereco: Option<String>,
        #[arg(long)]
        telefone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        cnpj: Option<String>,
        #[arg(long)]
        horario: Option<String>,
        /// Reactivate a deactivated store
        #[arg(long)]
        reactivate: bool,
    },
    /// Soft-delete a store (its row is kept)
    Deactivate { id: i64 },
}
