use std::path::PathBuf;
use voltrix_core::bom::export::bom_to_csv;
use voltrix_core::bom::generate_bom;
use voltrix_core::error::VoltrixError;

use crate::output;

pub fn run(
    assembly_id: &str,
    output_format: &str,
    csv: Option<PathBuf>,
) -> Result<(), VoltrixError> {
    let catalog = voltrix_core::load_builtin()?;
    let bom = generate_bom(&catalog, assembly_id)?;

    match output_format {
        "json" => output::json::print(&bom)?,
        _ => output::table::print_bom(&bom),
    }

    if let Some(path) = csv {
        std::fs::write(&path, bom_to_csv(&bom))?;
        eprintln!("Wrote {} rows to {}", bom.components.len(), path.display());
    }

    Ok(())
}
