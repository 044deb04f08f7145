//! `petmed cabinet` handlers.

use anyhow::{Result, bail};

use petmed_core::domain::{MedicineKey, NewPetMedicine, PetMedicine};

use super::print_catalog_source;
use crate::bootstrap::CliContext;

pub async fn add(
    ctx: &CliContext,
    pet_id: i64,
    medicine_id: i64,
    endpoint: Option<&str>,
) -> Result<()> {
    let pet = ctx.repos.pets.get_by_id(pet_id).await?;

    let catalog = ctx.catalog_service(endpoint)?;
    let search = catalog.search(None).await?;
    print_catalog_source(&search.source, &search.failures);

    let Some(medicine) = search.medicines.iter().find(|m| m.id == medicine_id) else {
        bail!("medicine {medicine_id} is not in the catalog");
    };

    ctx.repos
        .pet_medicines
        .upsert(&NewPetMedicine::from_catalog(pet_id, medicine))
        .await?;

    println!("Added {} to {}'s cabinet", medicine.nome, pet.name);
    Ok(())
}

pub async fn list(ctx: &CliContext, pet_id: i64) -> Result<()> {
    let pet = ctx.repos.pets.get_by_id(pet_id).await?;
    let links = ctx.repos.pet_medicines.list_for_pet(pet_id).await?;

    if links.is_empty() {
        println!("{} has no medicines yet.", pet.name);
        return Ok(());
    }

    println!("Medicines for {}:", pet.name);
    for link in links {
        print_line(&link);
    }
    Ok(())
}

pub async fn search(ctx: &CliContext, pet_id: i64, term: &str) -> Result<()> {
    let links = ctx.repos.pet_medicines.search_for_pet(pet_id, term).await?;
    if links.is_empty() {
        println!("No medicines matching \"{term}\".");
        return Ok(());
    }

    for link in links {
        print_line(&link);
    }
    Ok(())
}

pub async fn remove(ctx: &CliContext, pet_id: i64, medicine_id: &str) -> Result<()> {
    ctx.repos
        .pet_medicines
        .delete_one(pet_id, &MedicineKey::from(medicine_id))
        .await?;
    println!("Removed medicine {medicine_id} from pet {pet_id}");
    Ok(())
}

pub async fn clear(ctx: &CliContext, pet_id: i64) -> Result<()> {
    ctx.repos.pet_medicines.delete_all_for_pet(pet_id).await?;
    println!("Cleared every medicine for pet {pet_id}");
    Ok(())
}

fn print_line(link: &PetMedicine) {
    let mut extras = Vec::new();
    if let Some(details) = link.parsed_details() {
        if let Some(laboratorio) = details.laboratorio {
            extras.push(laboratorio);
        }
        if let Some(tipo) = details.tipo {
            extras.push(tipo);
        }
    }

    if extras.is_empty() {
        println!("[{}] {}", link.medicine_id, link.medicine_name);
    } else {
        println!(
            "[{}] {} ({})",
            link.medicine_id,
            link.medicine_name,
            extras.join(", ")
        );
    }
}
