//! `petmed store` handlers.

use anyhow::Result;

use petmed_core::domain::{NewStore, Store, StoreUpdate};

use crate::bootstrap::CliContext;

pub struct AddArgs {
    pub nome: String,
    pub endereco: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub cnpj: Option<String>,
    pub horario: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

pub async fn add(ctx: &CliContext, args: AddArgs) -> Result<()> {
    let id = ctx
        .repos
        .stores
        .insert(&NewStore {
            nome: args.nome,
            endereco: args.endereco,
            telefone: args.telefone,
            email: args.email,
            cnpj: args.cnpj,
            horario_funcionamento: args.horario,
            latitude: args.latitude,
            longitude: args.longitude,
        })
        .await?;

    println!("Registered store (id {id})");
    Ok(())
}

pub async fn list(ctx: &CliContext) -> Result<()> {
    let stores = ctx.repos.stores.list_active().await?;
    if stores.is_empty() {
        println!("No active stores.");
        return Ok(());
    }

    for store in stores {
        print_line(&store);
    }
    Ok(())
}

pub async fn show(ctx: &CliContext, id: i64) -> Result<()> {
    let store = ctx.repos.stores.get_by_id(id).await?;
    print_line(&store);
    if let Some(telefone) = &store.telefone {
        println!("  phone: {telefone}");
    }
    if let Some(email) = &store.email {
        println!("  email: {email}");
    }
    if let Some(cnpj) = &store.cnpj {
        println!("  CNPJ: {cnpj}");
    }
    if let Some(horario) = &store.horario_funcionamento {
        println!("  hours: {horario}");
    }
    if let (Some(lat), Some(lon)) = (store.latitude, store.longitude) {
        println!("  location: {lat}, {lon}");
    }
    if !store.ativa {
        println!("  deactivated");
    }
    Ok(())
}

pub struct UpdateArgs {
    pub nome: Option<String>,
    pub endereco: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub cnpj: Option<String>,
    pub horario: Option<String>,
    pub reactivate: bool,
}

pub async fn update(ctx: &CliContext, id: i64, args: UpdateArgs) -> Result<()> {
    ctx.repos
        .stores
        .update(
            id,
            &StoreUpdate {
                nome: args.nome,
                endereco: args.endereco,
                telefone: args.telefone,
                email: args.email,
                cnpj: args.cnpj,
                horario_funcionamento: args.horario,
                latitude: None,
                longitude: None,
                ativa: args.reactivate.then_some(true),
            },
        )
        .await?;

    println!("Updated store {id}");
    Ok(())
}

pub async fn deactivate(ctx: &CliContext, id: i64) -> Result<()> {
    ctx.repos.stores.deactivate(id).await?;
    println!("Deactivated store {id} (history kept)");
    Ok(())
}

fn print_line(store: &Store) {
    match &store.endereco {
        Some(endereco) => println!("#{} {} - {endereco}", store.id, store.nome),
        None => println!("#{} {}", store.id, store.nome),
    }
}
