//! Voltrix core: assembly matching and BOM generation for switchgear quotes.
//!
//! A quote arrives either as free text or as the structured JSON an upstream
//! extraction step produces. Its specifications are normalized into a
//! [`model::FeatureRecord`], matched against the fixed Module 1 assembly
//! catalog, and the result reported with the matched assembly's bill of
//! materials when the match is exact. Box identifier generation and the
//! learned pattern memory live in their own modules.

pub mod bom;
pub mod boxcode;
pub mod catalog;
pub mod error;
pub mod extract;
pub mod matching;
pub mod memory;
pub mod model;

use catalog::Catalog;
use error::VoltrixError;
use matching::outcome::{MatchReport, MatchStatus};
use model::{FeatureRecord, QuoteDoc};

pub use catalog::builtin::load_builtin;

/// Match an already-extracted feature record against the catalog.
///
/// The report carries the features the query was reduced to, and the BOM is
/// populated only when exactly one assembly matched.
pub fn match_features(
    features: FeatureRecord,
    catalog: &Catalog,
) -> Result<MatchReport, VoltrixError> {
    let outcome = matching::engine::match_assembly(&features, catalog);

    let bom = match (outcome.status, outcome.matched_assemblies.first()) {
        (MatchStatus::ExactMatch, Some(id)) => Some(bom::generate_bom(catalog, id)?),
        _ => None,
    };

    Ok(MatchReport {
        status: outcome.status,
        message: outcome.message,
        matched_assemblies: outcome.matched_assemblies,
        extracted_features: features,
        candidates: outcome.candidates,
        bom,
    })
}

/// Match a structured quote document (first section only).
pub fn match_quote(quote: &QuoteDoc, catalog: &Catalog) -> Result<MatchReport, VoltrixError> {
    match_features(extract::features_from_quote(quote), catalog)
}

/// Match a free-text specification line.
pub fn match_text(input: &str, catalog: &Catalog) -> Result<MatchReport, VoltrixError> {
    match_features(extract::features_from_text(input), catalog)
}
