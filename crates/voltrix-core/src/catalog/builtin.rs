use crate::catalog::schema::AssemblyPartsDef;
use crate::catalog::Catalog;
use crate::error::VoltrixError;
use crate::model::{Access, AssemblyRecord, AssemblySpecs, BreakerCount, Mount, Part};
use std::collections::HashMap;

const MODULE1_PARTS_JSON: &str = include_str!("../../../../catalog/module1-parts.json");

/// One row of the hand-asserted specification table.
///
/// The parts source alone does not reliably yield dimensions, breaker
/// configuration, mount, or access, so those fields are asserted here per
/// assembly rather than inferred.
struct SpecRow {
    id: &'static str,
    project: &'static str,
    height: &'static str,
    width: &'static str,
    depth: &'static str,
    breaker_type: &'static str,
    breaker_quantity: BreakerCount,
    mount: Mount,
    access: Access,
}

/// Declaration order is load-bearing: closest-match ranking breaks ties by
/// catalog order, so reordering this table changes no-match suggestions.
const ASSEMBLY_SPECS: &[SpecRow] = &[
    SpecRow {
        id: "123456-0100-101",
        project: "UL891-S41A Section 101",
        height: "90",
        width: "40",
        depth: "60",
        breaker_type: "ABB SACE Emax 6.2",
        breaker_quantity: BreakerCount::Count(1),
        mount: Mount::Fixed,
        access: Access::FrontAndRear,
    },
    SpecRow {
        id: "123456-0100-102",
        project: "UL891-S41A Section 102",
        height: "90",
        width: "36",
        depth: "60",
        breaker_type: "ABB SACE Emax 2.2",
        breaker_quantity: BreakerCount::Count(3),
        mount: Mount::Fixed,
        access: Access::FrontAndRear,
    },
    SpecRow {
        id: "123456-0100-103",
        project: "UL891-S41A Section 103",
        height: "90",
        width: "36",
        depth: "60",
        breaker_type: "ABB SACE Emax 2.2",
        breaker_quantity: BreakerCount::Count(2),
        mount: Mount::Fixed,
        access: Access::FrontAndRear,
    },
    SpecRow {
        id: "123456-0100-201",
        project: "UL891-S41B Section 101",
        height: "90",
        width: "40",
        depth: "60",
        breaker_type: "ABB SACE Emax 6.2",
        breaker_quantity: BreakerCount::Count(1),
        mount: Mount::Drawout,
        access: Access::FrontOnly,
    },
    SpecRow {
        id: "123456-0100-202",
        project: "UL891-S41B Section 102",
        height: "90",
        width: "36",
        depth: "60",
        breaker_type: "ABB SACE Emax 2.2",
        breaker_quantity: BreakerCount::Count(1),
        mount: Mount::Drawout,
        access: Access::FrontOnly,
    },
    SpecRow {
        id: "123456-0100-203",
        project: "UL891-S41B Section 103",
        height: "90",
        width: "36",
        depth: "60",
        breaker_type: "ABB SACE Emax 2.2",
        breaker_quantity: BreakerCount::Count(2),
        mount: Mount::Drawout,
        access: Access::FrontOnly,
    },
    SpecRow {
        id: "123456-0100-204",
        project: "UL891-S41B Section 104",
        height: "90",
        width: "42",
        depth: "60",
        breaker_type: "ABB SACE Tmax",
        breaker_quantity: BreakerCount::Multiple,
        mount: Mount::Fixed,
        access: Access::FrontOnly,
    },
    SpecRow {
        id: "123456-0100-301",
        project: "UL891-S4S1 Section 101",
        height: "90",
        width: "30",
        depth: "48",
        breaker_type: "ABB SACE Emax 2.2",
        breaker_quantity: BreakerCount::Count(1),
        mount: Mount::Drawout,
        access: Access::FrontAndRear,
    },
    SpecRow {
        id: "123456-0100-302",
        project: "UL891-S4S1 Section 102",
        height: "90",
        width: "42",
        depth: "48",
        breaker_type: "ABB SACE Tmax",
        breaker_quantity: BreakerCount::Multiple,
        mount: Mount::Fixed,
        access: Access::FrontAndRear,
    },
    SpecRow {
        id: "123456-0100-401",
        project: "400kW GVX Section 101",
        height: "78",
        width: "42",
        depth: "33",
        breaker_type: "Square D",
        breaker_quantity: BreakerCount::Multiple,
        mount: Mount::Fixed,
        access: Access::FrontOnly,
    },
];

/// Load the built-in Module 1 catalog: bundled parts table joined with the
/// asserted specification rows. Any mismatch between the two sources is a
/// load error; the catalog must be complete at startup.
pub fn load_builtin() -> Result<Catalog, VoltrixError> {
    let defs: Vec<AssemblyPartsDef> = serde_json::from_str(MODULE1_PARTS_JSON)
        .map_err(|e| VoltrixError::CatalogLoad(format!("bundled parts table: {e}")))?;

    let mut parts_by_id: HashMap<String, Vec<Part>> = HashMap::new();
    for def in defs {
        if parts_by_id
            .insert(def.assembly_number.clone(), def.parts)
            .is_some()
        {
            return Err(VoltrixError::CatalogLoad(format!(
                "duplicate parts rows for assembly '{}'",
                def.assembly_number
            )));
        }
    }

    let mut records = Vec::with_capacity(ASSEMBLY_SPECS.len());
    for row in ASSEMBLY_SPECS {
        let parts = parts_by_id.remove(row.id).ok_or_else(|| {
            VoltrixError::CatalogLoad(format!("no parts rows for assembly '{}'", row.id))
        })?;
        records.push(AssemblyRecord {
            id: row.id.to_string(),
            project: row.project.to_string(),
            specs: AssemblySpecs {
                height: row.height.to_string(),
                width: row.width.to_string(),
                depth: row.depth.to_string(),
                breaker_type: row.breaker_type.to_string(),
                breaker_quantity: row.breaker_quantity,
                mount: row.mount,
                access: row.access,
            },
            parts,
        });
    }

    if !parts_by_id.is_empty() {
        let mut orphans: Vec<String> = parts_by_id.into_keys().collect();
        orphans.sort();
        return Err(VoltrixError::CatalogLoad(format!(
            "parts rows without a specification row: {}",
            orphans.join(", ")
        )));
    }

    Catalog::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_loads_ten_assemblies() {
        let catalog = load_builtin().unwrap();
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn test_builtin_declaration_order() {
        let catalog = load_builtin().unwrap();
        let ids = catalog.ids();
        assert_eq!(ids.first().map(String::as_str), Some("123456-0100-101"));
        assert_eq!(ids.last().map(String::as_str), Some("123456-0100-401"));
    }

    #[test]
    fn test_builtin_every_assembly_has_parts() {
        let catalog = load_builtin().unwrap();
        for record in catalog.assemblies() {
            assert!(!record.parts.is_empty(), "{} has no parts", record.id);
        }
    }

    #[test]
    fn test_builtin_multiple_quantity_entries() {
        let catalog = load_builtin().unwrap();
        let multiple: Vec<&str> = catalog
            .assemblies()
            .filter(|a| a.specs.breaker_quantity == BreakerCount::Multiple)
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(
            multiple,
            ["123456-0100-204", "123456-0100-302", "123456-0100-401"]
        );
    }
}
