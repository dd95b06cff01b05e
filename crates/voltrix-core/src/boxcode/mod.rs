//! Box identifier generation.
//!
//! Maps a section's extracted specs plus board-level construction notes to
//! the fixed-format identifier `APBX{H}{W}{D}{FRONT}{FRONT}{HW}{SEIS}-G01-{FINISH}`.
//! The four sub-decisions (dimensions, cornerpost, hardware/seismic, finish)
//! are independent table lookups; consumers parse the code positionally, so
//! the layout is part of the wire contract.

pub mod tables;

use serde::{Deserialize, Serialize};
use std::fmt;
use tables::{
    contains_any, dimension_code, finish_code, ABB_KEYWORDS, BELLEVILLE_KEYWORD, DEPTH_CODES,
    DRAWOUT_KEYWORDS, HEIGHT_CODES, OTHER_FINISH_CODE, SCHNEIDER_KEYWORDS, SEISMIC_KEYWORDS,
    WIDTH_CODES,
};

/// Extracted specs for the section being coded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionSpecs {
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub depth: Option<String>,
    #[serde(default)]
    pub breaker_manufacturer: Option<String>,
    #[serde(default)]
    pub mounting_type: Option<String>,
}

/// Board-level specs shared by every section of the order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardSpecs {
    #[serde(default)]
    pub seismic_inclusions: Option<String>,
    #[serde(default)]
    pub hardware_notes: Option<String>,
    #[serde(default)]
    pub finish: Option<String>,
}

/// The categorical codes of one box identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxCode {
    pub height: char,
    pub width: char,
    pub depth: char,
    pub front_cornerpost: char,
    pub hardware: char,
    pub seismic: char,
    pub finish: String,
}

impl fmt::Display for BoxCode {
    /// The front cornerpost code appears twice, once per front post.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "APBX{}{}{}{}{}{}{}-G01-{}",
            self.height,
            self.width,
            self.depth,
            self.front_cornerpost,
            self.front_cornerpost,
            self.hardware,
            self.seismic,
            self.finish
        )
    }
}

enum ManufacturerFamily {
    Abb,
    Schneider,
    Unknown,
}

/// ABB keywords are checked ahead of Schneider keywords; a description
/// naming both families resolves to ABB.
fn manufacturer_family(text: &str) -> ManufacturerFamily {
    if contains_any(text, ABB_KEYWORDS) {
        ManufacturerFamily::Abb
    } else if contains_any(text, SCHNEIDER_KEYWORDS) {
        ManufacturerFamily::Schneider
    } else {
        ManufacturerFamily::Unknown
    }
}

/// Front cornerpost decision tree.
///
/// No breaker named: structural post, `S` (`2` under seismic bracing).
/// Otherwise manufacturer family crossed with mounting selects one of
/// A/B/C/D; an unrecognized manufacturer falls back to the no-breaker code.
fn front_cornerpost(section: &SectionSpecs, seismic: bool) -> char {
    let structural = if seismic { '2' } else { 'S' };

    let Some(manufacturer) = section
        .breaker_manufacturer
        .as_deref()
        .filter(|m| !m.trim().is_empty())
    else {
        return structural;
    };

    let drawout = section
        .mounting_type
        .as_deref()
        .is_some_and(|m| contains_any(m, DRAWOUT_KEYWORDS));

    match (manufacturer_family(manufacturer), drawout) {
        (ManufacturerFamily::Abb, false) => 'A',
        (ManufacturerFamily::Schneider, false) => 'B',
        (ManufacturerFamily::Schneider, true) => 'C',
        (ManufacturerFamily::Abb, true) => 'D',
        (ManufacturerFamily::Unknown, _) => structural,
    }
}

/// Generate the box code for one section.
pub fn generate_box_code(section: &SectionSpecs, board: &BoardSpecs) -> BoxCode {
    let seismic = board
        .seismic_inclusions
        .as_deref()
        .is_some_and(|text| contains_any(text, SEISMIC_KEYWORDS));

    let hardware = board
        .hardware_notes
        .as_deref()
        .is_some_and(|text| text.to_uppercase().contains(BELLEVILLE_KEYWORD));

    let code = BoxCode {
        height: lookup_dimension(section.height.as_deref(), HEIGHT_CODES),
        width: lookup_dimension(section.width.as_deref(), WIDTH_CODES),
        depth: lookup_dimension(section.depth.as_deref(), DEPTH_CODES),
        front_cornerpost: front_cornerpost(section, seismic),
        hardware: if hardware { 'B' } else { 'L' },
        seismic: if seismic { 'S' } else { 'X' },
        finish: board
            .finish
            .as_deref()
            .map(finish_code)
            .unwrap_or(OTHER_FINISH_CODE)
            .to_string(),
    };

    tracing::debug!(code = %code, "generated box code");
    code
}

fn lookup_dimension(value: Option<&str>, table: &[(&str, char)]) -> char {
    match value {
        Some(v) => dimension_code(v, table),
        None => tables::CUSTOM_DIMENSION_CODE,
    }
}
