//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers; all infrastructure wiring happens
//! in `bootstrap`.

use clap::Parser;

use petmed_cli::{CabinetCommand, Cli, CliConfig, Commands, PetCommand, StoreCommand, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root); every table exists
    // before any handler runs
    let config = CliConfig::with_defaults()?;
    let ctx = bootstrap(config).await?;

    match command {
        Commands::Pet { command } => match command {
            PetCommand::Add {
                name,
                breed,
                age,
                pedigree,
                kind,
                photo,
            } => {
                let args = handlers::pet::AddArgs {
                    name,
                    breed,
                    age,
                    pedigree,
                    kind,
                    photo,
                };
                handlers::pet::add(&ctx, args).await?;
            }
            PetCommand::List => {
                handlers::pet::list(&ctx).await?;
            }
            PetCommand::Show { id } => {
                handlers::pet::show(&ctx, id).await?;
            }
            PetCommand::Update {
                id,
                name,
                breed,
                age,
                pedigree,
                kind,
                photo,
                clear_photo,
            } => {
                let args = handlers::pet::UpdateArgs {
                    name,
                    breed,
                    age,
                    pedigree,
                    kind,
                    photo,
                    clear_photo,
                };
                handlers::pet::update(&ctx, id, args).await?;
            }
            PetCommand::Remove { id } => {
                handlers::pet::remove(&ctx, id).await?;
            }
        },
        Commands::Cabinet { command } => match command {
            CabinetCommand::Add {
                pet_id,
                medicine_id,
                endpoint,
            } => {
                handlers::cabinet::add(&ctx, pet_id, medicine_id, endpoint.as_deref()).await?;
            }
            CabinetCommand::List { pet_id } => {
                handlers::cabinet::list(&ctx, pet_id).await?;
            }
            CabinetCommand::Search { pet_id, term } => {
                handlers::cabinet::search(&ctx, pet_id, &term).await?;
            }
            CabinetCommand::Remove {
                pet_id,
                medicine_id,
            } => {
                handlers::cabinet::remove(&ctx, pet_id, &medicine_id).await?;
            }
            CabinetCommand::Clear { pet_id } => {
                handlers::cabinet::clear(&ctx, pet_id).await?;
            }
        },
        Commands::Store { command } => match command {
            StoreCommand::Add {
                nome,
                endereco,
                telefone,
                email,
                cnpj,
                horario,
                latitude,
                longitude,
            } => {
                let args = handlers::store::AddArgs {
                    nome,
                    endereco,
                    telefone,
                    email,
                    cnpj,
                    horario,
                    latitude,
                    longitude,
                };
                handlers::store::add(&ctx, args).await?;
            }
            StoreCommand::List => {
                handlers::store::list(&ctx).await?;
            }
            StoreCommand::Show { id } => {
                handlers::store::show(&ctx, id).await?;
            }
            StoreCommand::Update {
                id,
                nome,
                endereco,
                telefone,
                email,
                cnpj,
                horario,
                reactivate,
            } => {
                let args = handlers::store::UpdateArgs {
                    nome,
                    endereco,
                    telefone,
                    email,
                    cnpj,
                    horario,
                    reactivate,
                };
                handlers::store::update(&ctx, id, args).await?;
            }
            StoreCommand::Deactivate { id } => {
                handlers::store::deactivate(&ctx, id).await?;
            }
        },
        Commands::Search { term, endpoint } => {
            handlers::catalog::search(&ctx, term.as_deref(), endpoint.as_deref()).await?;
        }
        Commands::Prices {
            pet_id,
            by_store,
            endpoint,
        } => {
            handlers::prices::execute(&ctx, pet_id, by_store, endpoint.as_deref()).await?;
        }
    }

    Ok(())
}
