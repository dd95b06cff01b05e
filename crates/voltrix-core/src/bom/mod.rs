//! Bill-of-materials generation: a pure lookup against the catalog.

pub mod export;

use crate::catalog::Catalog;
use crate::error::VoltrixError;
use crate::model::AssemblySpecs;
use serde::{Deserialize, Serialize};

/// One line of a generated BOM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomLine {
    pub part_number: String,
    pub description: String,
    pub quantity: u32,
    pub sequence: u32,
}

/// A complete bill of materials for one assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bom {
    pub assembly_number: String,
    pub project: String,
    pub specifications: AssemblySpecs,
    pub total_parts: usize,
    pub components: Vec<BomLine>,
}

/// Look up the BOM for an assembly id.
///
/// An unknown id is an error carrying the full list of valid ids, in
/// catalog declaration order, so callers can present the alternatives.
pub fn generate_bom(catalog: &Catalog, id: &str) -> Result<Bom, VoltrixError> {
    let record = catalog.get(id).ok_or_else(|| VoltrixError::UnknownAssembly {
        id: id.to_string(),
        available: catalog.ids(),
    })?;

    let components: Vec<BomLine> = record
        .parts
        .iter()
        .map(|part| BomLine {
            part_number: part.part_number.clone(),
            description: part.description.clone(),
            quantity: part.quantity,
            sequence: part.sequence,
        })
        .collect();

    Ok(Bom {
        assembly_number: record.id.clone(),
        project: record.project.clone(),
        specifications: record.specs.clone(),
        total_parts: components.len(),
        components,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::load_builtin;

    #[test]
    fn test_bom_lookup_preserves_part_order() {
        let catalog = load_builtin().unwrap();
        let bom = generate_bom(&catalog, "123456-0100-101").unwrap();
        assert_eq!(bom.assembly_number, "123456-0100-101");
        assert_eq!(bom.total_parts, bom.components.len());
        let sequences: Vec<u32> = bom.components.iter().map(|c| c.sequence).collect();
        let mut sorted = sequences.clone();
        sorted.sort_unstable();
        assert_eq!(sequences, sorted);
    }

    #[test]
    fn test_unknown_id_lists_available() {
        let catalog = load_builtin().unwrap();
        let err = generate_bom(&catalog, "999999-0000-000").unwrap_err();
        match err {
            VoltrixError::UnknownAssembly { id, available } => {
                assert_eq!(id, "999999-0000-000");
                assert_eq!(available, catalog.ids());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
