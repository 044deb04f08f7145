//! CLI adapter for the petmed core.
//!
//! The binary stands in for the excluded mobile UI: every collaborator
//! operation the screens would call is a subcommand. All wiring happens in
//! [`bootstrap`]; handlers only see the composed context.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod handlers;
pub mod parser;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use parser::{CabinetCommand, Cli, Commands, PetCommand, StoreCommand};
