use voltrix_core::catalog::infer::infer_specs;
use voltrix_core::error::VoltrixError;

pub fn list() -> Result<(), VoltrixError> {
    let catalog = voltrix_core::load_builtin()?;

    println!("Available assemblies:\n");
    for record in catalog.assemblies() {
        println!("  {:<18} {}", record.id, record.project);
        println!("  {:<18} {}", "", record.specs);
        println!();
    }
    Ok(())
}

pub fn show(assembly_id: &str) -> Result<(), VoltrixError> {
    let catalog = voltrix_core::load_builtin()?;
    let record = catalog
        .get(assembly_id)
        .ok_or_else(|| VoltrixError::UnknownAssembly {
            id: assembly_id.to_string(),
            available: catalog.ids(),
        })?;

    println!("{} -- {}\n", record.id, record.project);
    println!("Specifications: {}\n", record.specs);

    let max_part = record
        .parts
        .iter()
        .map(|p| p.part_number.len())
        .max()
        .unwrap_or(11);

    println!("Parts ({}):", record.parts.len());
    for part in &record.parts {
        println!(
            "  {:>4}  {:<width$}  {:>3}  {}",
            part.sequence,
            part.part_number,
            part.quantity,
            part.description,
            width = max_part
        );
    }

    // Diagnostic: what the part descriptions themselves imply, so
    // disagreements with the asserted specs are visible.
    let inferred = infer_specs(record);
    println!("\nInferred from parts:");
    println!("  height:  {}", inferred.height.as_deref().unwrap_or("-"));
    println!("  width:   {}", inferred.width.as_deref().unwrap_or("-"));
    println!("  depth:   {}", inferred.depth.as_deref().unwrap_or("-"));
    println!(
        "  breaker: {}",
        inferred.breaker_family.as_deref().unwrap_or("-")
    );
    println!(
        "  mount:   {}",
        inferred
            .mount
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".into())
    );
    println!("  seismic: {}", if inferred.seismic { "yes" } else { "no" });

    Ok(())
}
