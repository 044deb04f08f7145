//! `petmed prices` handler - the price comparison report.

use anyhow::Result;

use petmed_core::services::PriceBoard;

use super::print_listing_source;
use crate::bootstrap::CliContext;

pub async fn execute(
    ctx: &CliContext,
    pet_id: i64,
    by_store: bool,
    endpoint: Option<&str>,
) -> Result<()> {
    let pet = ctx.repos.pets.get_by_id(pet_id).await?;
    let cabinet = ctx.repos.pet_medicines.list_for_pet(pet_id).await?;

    if cabinet.is_empty() {
        println!("{} has no medicines to price.", pet.name);
        return Ok(());
    }

    let catalog = ctx.catalog_service(endpoint)?;
    let outcome = catalog.fetch_listings().await;
    print_listing_source(&outcome);

    println!("Prices for {}'s medicines:", pet.name);
    let board = PriceBoard::new(cabinet, outcome.items);

    if by_store {
        by_store_report(&board);
    } else {
        by_medicine_report(&board);
    }
    Ok(())
}

fn by_medicine_report(board: &PriceBoard) {
    for row in board.availability_view() {
        println!("{}", row.medicine.medicine_name);
        match &row.best {
            Some(best) => {
                println!("  best price: R$ {:.2} at {}", best.preco, best.store_nome);
                for store in &row.stores {
                    let preco = store
                        .price_of(&row.medicine.medicine_id)
                        .unwrap_or_default();
                    let tag = if store.id == best.store_id {
                        "  <- best"
                    } else {
                        ""
                    };
                    println!("    {} R$ {preco:.2}{tag}", store.nome);
                }
            }
            None => println!("  not available in the consulted stores"),
        }
    }
}

fn by_store_report(board: &PriceBoard) {
    let inventories = board.inventory_view();
    if inventories.is_empty() {
        println!("No consulted store carries these medicines.");
        return;
    }

    for inventory in inventories {
        println!("{}", inventory.store.nome);
        if let Some(endereco) = &inventory.store.endereco {
            println!("  {endereco}");
        }
        for carried in inventory.carried {
            let tag = if carried.is_best_price {
                "  <- best price"
            } else {
                ""
            };
            println!(
                "    {} R$ {:.2}{tag}",
                carried.medicine.medicine_name, carried.preco
            );
        }
    }
}
