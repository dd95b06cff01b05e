//! Declarative lookup tables for box-code generation.
//!
//! Every keyword list is ordered and scanned front to back, first match
//! wins, so the tie-break between overlapping keywords is visible here
//! rather than buried in control flow.

/// Height codes, keyed by the dimension string in inches.
pub const HEIGHT_CODES: &[(&str, char)] = &[
    ("72", 'A'),
    ("78", 'B'),
    ("90", 'C'),
    ("96", 'D'),
];

/// Width codes.
pub const WIDTH_CODES: &[(&str, char)] = &[
    ("30", 'A'),
    ("36", 'B'),
    ("40", 'C'),
    ("42", 'D'),
    ("44", 'E'),
];

/// Depth codes.
pub const DEPTH_CODES: &[(&str, char)] = &[
    ("33", 'A'),
    ("48", 'B'),
    ("56", 'C'),
    ("60", 'D'),
];

/// Code for a dimension not present in its table.
pub const CUSTOM_DIMENSION_CODE: char = 'Z';

/// Keywords marking an ABB-family breaker manufacturer.
pub const ABB_KEYWORDS: &[&str] = &["ABB", "SACE", "EMAX", "TMAX"];

/// Keywords marking a Schneider-family breaker manufacturer.
pub const SCHNEIDER_KEYWORDS: &[&str] = &[
    "SCHNEIDER",
    "SQUARE D",
    "SQUARE-D",
    "POWERPACT",
    "MASTERPACT",
];

/// Keywords classifying a mounting description as drawout.
pub const DRAWOUT_KEYWORDS: &[&str] = &[
    "DRAWOUT",
    "DRAW-OUT",
    "DRAW OUT",
    "WITHDRAWABLE",
    "RACK-OUT",
    "RACKOUT",
];

/// Keywords marking seismic construction requirements.
pub const SEISMIC_KEYWORDS: &[&str] = &["SEISMIC", "IBC", "OSHPD", "ZONE 4"];

/// Hardware note keyword selecting Belleville washers.
pub const BELLEVILLE_KEYWORD: &str = "BELLEVILLE";

/// Finish keyword to two-digit code table.
pub const FINISH_CODES: &[(&str, &str)] = &[
    ("ANSI 61", "11"),
    ("ANSI 49", "12"),
    ("GALVANIZ", "20"),
    ("STAINLESS", "30"),
    ("WHITE", "41"),
];

/// Finish code for anything not in the table.
pub const OTHER_FINISH_CODE: &str = "99";

/// Resolve a dimension string against a code table: exact string match
/// first, then numeric equality so `"90.0"` resolves like `"90"`, else the
/// custom code.
pub fn dimension_code(value: &str, table: &[(&str, char)]) -> char {
    let trimmed = value.trim();
    if let Some((_, code)) = table.iter().find(|(key, _)| *key == trimmed) {
        return *code;
    }
    if let Ok(number) = trimmed.parse::<f64>() {
        for (key, code) in table {
            if key.parse::<f64>().is_ok_and(|k| k == number) {
                return *code;
            }
        }
    }
    CUSTOM_DIMENSION_CODE
}

/// Case-insensitive scan for the first keyword contained in `text`.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let upper = text.to_uppercase();
    keywords.iter().any(|keyword| upper.contains(keyword))
}

/// Resolve a finish description to its two-digit code, first table entry
/// found in the text wins.
pub fn finish_code(text: &str) -> &'static str {
    let upper = text.to_uppercase();
    FINISH_CODES
        .iter()
        .find(|(keyword, _)| upper.contains(keyword))
        .map(|(_, code)| *code)
        .unwrap_or(OTHER_FINISH_CODE)
}
