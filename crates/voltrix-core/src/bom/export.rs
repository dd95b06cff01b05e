//! Flattened tabular BOM export.
//!
//! The flat form carries Item, Part Number, Description, and Quantity; the
//! `sequence` field does not survive the export. Downstream consumers key
//! on the exact header, so both it and the column order are fixed.

use crate::bom::Bom;
use crate::error::VoltrixError;
use serde::{Deserialize, Serialize};

/// The fixed header row of the flat export.
pub const BOM_CSV_HEADER: &str = "Item,Part Number,Description,Quantity";

/// One row of the flat export, as re-read by [`parse_bom_csv`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatBomRow {
    pub item: u32,
    pub part_number: String,
    pub description: String,
    pub quantity: u32,
}

/// Render a BOM as the flat CSV form, one 1-based item per component.
///
/// Field text is scrubbed so rows stay four columns wide: embedded commas
/// become semicolons and newlines become spaces.
pub fn bom_to_csv(bom: &Bom) -> String {
    let mut out = String::from(BOM_CSV_HEADER);
    for (i, line) in bom.components.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!(
            "{},{},{},{}",
            i + 1,
            scrub(&line.part_number),
            scrub(&line.description),
            line.quantity
        ));
    }
    out
}

fn scrub(field: &str) -> String {
    field.replace(',', ";").replace(['\n', '\r'], " ")
}

/// Re-read the flat CSV form produced by [`bom_to_csv`].
pub fn parse_bom_csv(text: &str) -> Result<Vec<FlatBomRow>, VoltrixError> {
    let mut lines = text.lines();
    match lines.next() {
        Some(header) if header.trim_end() == BOM_CSV_HEADER => {}
        Some(header) => {
            return Err(VoltrixError::BomExport(format!(
                "unexpected header '{header}' (expected '{BOM_CSV_HEADER}')"
            )))
        }
        None => return Err(VoltrixError::BomExport("empty document".into())),
    }

    let mut rows = Vec::new();
    for (line_number, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            return Err(VoltrixError::BomExport(format!(
                "line {}: expected 4 fields, found {}",
                line_number + 2,
                fields.len()
            )));
        }
        let item = fields[0].trim().parse().map_err(|_| {
            VoltrixError::BomExport(format!("line {}: bad item number", line_number + 2))
        })?;
        let quantity = fields[3].trim().parse().map_err(|_| {
            VoltrixError::BomExport(format!("line {}: bad quantity", line_number + 2))
        })?;
        rows.push(FlatBomRow {
            item,
            part_number: fields[1].to_string(),
            description: fields[2].to_string(),
            quantity,
        });
    }
    Ok(rows)
}
