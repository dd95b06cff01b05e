pub mod builtin;
pub mod infer;
pub mod schema;

use crate::error::VoltrixError;
use crate::model::AssemblyRecord;
use std::collections::HashMap;

/// The fixed assembly catalog.
///
/// Records keep their declaration order; closest-match ranking ties break
/// on that order, so it is part of the catalog's contract. Constructed once
/// at startup and passed by reference to the matcher and BOM generator.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<AssemblyRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from assembly records, validating as we go.
    /// A malformed catalog is a startup failure, not a per-query one.
    pub fn new(mut records: Vec<AssemblyRecord>) -> Result<Self, VoltrixError> {
        if records.is_empty() {
            return Err(VoltrixError::CatalogInvalid(
                "catalog must not be empty".into(),
            ));
        }

        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter_mut().enumerate() {
            if record.id.trim().is_empty() {
                return Err(VoltrixError::CatalogInvalid(
                    "assembly id must not be empty".into(),
                ));
            }
            if index.insert(record.id.clone(), i).is_some() {
                return Err(VoltrixError::CatalogInvalid(format!(
                    "duplicate assembly id '{}'",
                    record.id
                )));
            }
            if record.parts.is_empty() {
                return Err(VoltrixError::CatalogInvalid(format!(
                    "assembly '{}' has no parts",
                    record.id
                )));
            }
            for dim in [
                &record.specs.height,
                &record.specs.width,
                &record.specs.depth,
            ] {
                if dim.trim().is_empty() {
                    return Err(VoltrixError::CatalogInvalid(format!(
                        "assembly '{}' has an empty dimension",
                        record.id
                    )));
                }
            }
            record.parts.sort_by_key(|p| p.sequence);
        }

        tracing::info!(assemblies = records.len(), "loaded assembly catalog");

        Ok(Catalog { records, index })
    }

    pub fn get(&self, id: &str) -> Option<&AssemblyRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Assemblies in declaration order.
    pub fn assemblies(&self) -> impl Iterator<Item = &AssemblyRecord> {
        self.records.iter()
    }

    /// Assembly ids in declaration order.
    pub fn ids(&self) -> Vec<String> {
        self.records.iter().map(|r| r.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
