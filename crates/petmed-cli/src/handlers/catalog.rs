//! `petmed search` handler.

use anyhow::Result;

use super::print_catalog_source;
use crate::bootstrap::CliContext;

pub async fn search(ctx: &CliContext, term: Option<&str>, endpoint: Option<&str>) -> Result<()> {
    let catalog = ctx.catalog_service(endpoint)?;
    let result = catalog.search(term).await?;

    print_catalog_source(&result.source, &result.failures);

    if result.medicines.is_empty() {
        println!("No medicines found.");
        return Ok(());
    }

    for medicine in &result.medicines {
        let laboratorio = medicine.laboratorio.as_deref().unwrap_or("-");
        let tipo = medicine.tipo.as_deref().unwrap_or("-");
        println!("[{}] {} - {laboratorio}, {tipo}", medicine.id, medicine.nome);
        if let Some(indicacoes) = &medicine.indicacoes {
            println!("     {indicacoes}");
        }
    }
    println!("{} medicine(s)", result.medicines.len());
    Ok(())
}
