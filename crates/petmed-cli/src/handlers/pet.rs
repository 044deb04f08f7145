//! `petmed pet` handlers.

use anyhow::Result;

use petmed_core::domain::{AnimalType, NewPet, Pet, PetUpdate};

use crate::bootstrap::CliContext;
use crate::parser::AnimalKind;

pub struct AddArgs {
    pub name: String,
    pub breed: String,
    pub age: u32,
    pub pedigree: bool,
    pub kind: AnimalKind,
    pub photo: Option<String>,
}

pub async fn add(ctx: &CliContext, args: AddArgs) -> Result<()> {
    let id = ctx
        .repos
        .pets
        .insert(&NewPet {
            name: args.name,
            breed: args.breed,
            age: args.age,
            has_pedigree: args.pedigree,
            animal_type: args.kind.into(),
            photo: args.photo,
        })
        .await?;

    let pet = ctx.repos.pets.get_by_id(id).await?;
    println!("Registered {} (id {})", pet.name, pet.id);
    Ok(())
}

pub async fn list(ctx: &CliContext) -> Result<()> {
    let pets = ctx.repos.pets.list().await?;
    if pets.is_empty() {
        println!("No pets registered yet.");
        return Ok(());
    }

    for pet in pets {
        print_line(&pet);
    }
    Ok(())
}

pub async fn show(ctx: &CliContext, id: i64) -> Result<()> {
    let pet = ctx.repos.pets.get_by_id(id).await?;
    print_line(&pet);
    if let Some(photo) = &pet.photo {
        println!("  photo: {photo}");
    }
    println!("  registered: {}", pet.created_at.format("%Y-%m-%d"));
    Ok(())
}

pub struct UpdateArgs {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub pedigree: Option<bool>,
    pub kind: Option<AnimalKind>,
    pub photo: Option<String>,
    pub clear_photo: bool,
}

pub async fn update(ctx: &CliContext, id: i64, args: UpdateArgs) -> Result<()> {
    let photo = if args.clear_photo {
        Some(None)
    } else {
        args.photo.map(Some)
    };

    ctx.repos
        .pets
        .update(
            id,
            &PetUpdate {
                name: args.name,
                breed: args.breed,
                age: args.age,
                has_pedigree: args.pedigree,
                animal_type: args.kind.map(Into::into),
                photo,
            },
        )
        .await?;

    println!("Updated pet {id}");
    Ok(())
}

pub async fn remove(ctx: &CliContext, id: i64) -> Result<()> {
    // drop the cabinet with the pet so no orphan associations linger
    ctx.repos.pet_medicines.delete_all_for_pet(id).await?;
    ctx.repos.pets.delete(id).await?;
    println!("Removed pet {id}");
    Ok(())
}

fn print_line(pet: &Pet) {
    let kind = match pet.animal_type {
        AnimalType::Dog => "dog",
        AnimalType::Cat => "cat",
    };
    let pedigree = if pet.has_pedigree { ", pedigree" } else { "" };
    println!(
        "#{} {} - {} {} ({} years{})",
        pet.id, pet.name, pet.breed, kind, pet.age, pedigree
    );
}
