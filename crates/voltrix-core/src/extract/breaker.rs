//! Breaker type canonicalization and family compatibility.
//!
//! Quote text names breakers many ways ("EMAX 6.2", "E6.2", "Emax6.2 frame").
//! Matching needs one canonical spelling per model, plus a looser family
//! test so an assembly stocked with one Emax frame can stand in for a quote
//! naming another.

use std::collections::HashSet;

/// Ordered (keyword, canonical form) table. Matched case-insensitively,
/// first hit wins, so more specific model strings must stay ahead of the
/// generic family keywords.
pub const CANONICAL_BREAKERS: &[(&str, &str)] = &[
    ("EMAX 6.2", "ABB SACE Emax 6.2"),
    ("E6.2", "ABB SACE Emax 6.2"),
    ("EMAX 4.2", "ABB SACE Emax 4.2"),
    ("E4.2", "ABB SACE Emax 4.2"),
    ("EMAX 2.2", "ABB SACE Emax 2.2"),
    ("E2.2", "ABB SACE Emax 2.2"),
    ("TMAX", "ABB SACE Tmax"),
    ("SQUARE D", "Square D"),
];

/// Return the canonical form for the first table keyword found in `text`
/// (uppercased scan), or `None` when no keyword occurs.
pub fn detect_breaker_type(text: &str) -> Option<&'static str> {
    let upper = text.to_uppercase();
    CANONICAL_BREAKERS
        .iter()
        .find(|(keyword, _)| upper.contains(keyword))
        .map(|(_, canonical)| *canonical)
}

/// Canonicalize a breaker type string. Unrecognized input passes through
/// unchanged so the matcher can still compare it verbatim.
pub fn canonical_breaker_type(raw: &str) -> String {
    match detect_breaker_type(raw) {
        Some(canonical) => canonical.to_string(),
        None => raw.to_string(),
    }
}

/// Family compatibility between two breaker type strings.
///
/// Exact equality (case-insensitive), or a shared manufacturer+line token
/// pair: ABB+EMAX, ABB+TMAX, or SQUARE on both sides. Tokens are
/// whitespace-split words, so "EMAX" must appear as its own word.
/// Symmetric by construction.
pub fn families_compatible(a: &str, b: &str) -> bool {
    let a_upper = a.to_uppercase();
    let b_upper = b.to_uppercase();

    if a_upper == b_upper {
        return true;
    }

    let a_terms: HashSet<&str> = a_upper.split_whitespace().collect();
    let b_terms: HashSet<&str> = b_upper.split_whitespace().collect();

    if a_terms.contains("ABB") && b_terms.contains("ABB") {
        if a_terms.contains("EMAX") && b_terms.contains("EMAX") {
            return true;
        }
        if a_terms.contains("TMAX") && b_terms.contains("TMAX") {
            return true;
        }
    }

    a_terms.contains("SQUARE") && b_terms.contains("SQUARE")
}
