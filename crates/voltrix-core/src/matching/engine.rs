//! The assembly matcher: accept-all-constraints filtering over the catalog,
//! with a weighted closest-match ranking when nothing passes.

use crate::catalog::Catalog;
use crate::extract::breaker::families_compatible;
use crate::matching::constraint::{Constraint, MatchQuery};
use crate::matching::outcome::{CandidateScore, MatchBreakdown, MatchOutcome, MatchStatus};
use crate::model::{AssemblyRecord, FeatureRecord};

const DIMENSION_POINTS: u32 = 3;
const BREAKER_POINTS: u32 = 2;
const CLOSEST_LIMIT: usize = 3;

/// Match a feature record against every catalog entry.
///
/// An entry is accepted only when every constrained field agrees; absent
/// query fields constrain nothing. One survivor is an exact match, several
/// are ambiguous, none yields a ranked closest-match fallback over the
/// whole catalog. Ties in the fallback ranking keep catalog declaration
/// order.
pub fn match_assembly(features: &FeatureRecord, catalog: &Catalog) -> MatchOutcome {
    let query = MatchQuery::from_features(features);

    let accepted: Vec<&AssemblyRecord> = catalog
        .assemblies()
        .filter(|record| query.accepts(&record.specs))
        .collect();

    tracing::debug!(accepted = accepted.len(), "matched catalog entries");

    match accepted.as_slice() {
        [single] => MatchOutcome {
            status: MatchStatus::ExactMatch,
            matched_assemblies: vec![single.id.clone()],
            message: format!(
                "Exact match: {} ({}), {} parts.",
                single.id,
                single.project,
                single.parts.len()
            ),
            candidates: vec![],
        },
        [] => no_match_outcome(&query, catalog),
        several => {
            let ids: Vec<String> = several.iter().map(|r| r.id.clone()).collect();
            let candidates = several
                .iter()
                .map(|record| score_candidate(&query, record))
                .collect();
            MatchOutcome {
                status: MatchStatus::Ambiguous,
                message: format!(
                    "{} assemblies match: {}. Specify access (Front only / Front and rear) \
                     and mount (Fixed / Drawout) to narrow it down.",
                    ids.len(),
                    ids.join(", ")
                ),
                matched_assemblies: ids,
                candidates,
            }
        }
    }
}

fn no_match_outcome(query: &MatchQuery, catalog: &Catalog) -> MatchOutcome {
    let mut ranked: Vec<CandidateScore> = catalog
        .assemblies()
        .map(|record| score_candidate(query, record))
        .collect();
    // Stable sort: equal scores keep catalog declaration order.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(CLOSEST_LIMIT);

    let mut message = String::from(
        "No assembly matches the requested specifications. Closest assemblies:",
    );
    for (i, candidate) in ranked.iter().enumerate() {
        let specs = catalog
            .get(&candidate.id)
            .map(|r| r.specs.to_string())
            .unwrap_or_default();
        message.push_str(&format!(
            "\n  {}. {} ({}): {}",
            i + 1,
            candidate.id,
            candidate.project,
            specs
        ));
    }

    MatchOutcome {
        status: MatchStatus::NoMatch,
        matched_assemblies: vec![],
        message,
        candidates: ranked,
    }
}

/// Score one catalog entry: 3 points per agreeing dimension, 2 points for a
/// family-compatible breaker. Absent query fields award nothing.
fn score_candidate(query: &MatchQuery, record: &AssemblyRecord) -> CandidateScore {
    let height = dimension_agrees(&query.height, &record.specs.height);
    let width = dimension_agrees(&query.width, &record.specs.width);
    let depth = dimension_agrees(&query.depth, &record.specs.depth);
    let breaker = match &query.breaker_type {
        Constraint::CompatibleFamily(wanted) => {
            families_compatible(wanted, &record.specs.breaker_type)
        }
        _ => false,
    };

    let score = DIMENSION_POINTS * (height as u32 + width as u32 + depth as u32)
        + BREAKER_POINTS * breaker as u32;

    let mut best = 0;
    for constrained in [&query.height, &query.width, &query.depth] {
        if !constrained.is_unconstrained() {
            best += DIMENSION_POINTS;
        }
    }
    if !query.breaker_type.is_unconstrained() {
        best += BREAKER_POINTS;
    }
    let percent = if best == 0 { 0 } else { score * 100 / best };

    CandidateScore {
        id: record.id.clone(),
        project: record.project.clone(),
        score,
        breakdown: MatchBreakdown {
            height,
            width,
            depth,
            breaker,
            percent,
        },
    }
}

fn dimension_agrees(constraint: &Constraint<String>, value: &str) -> bool {
    matches!(constraint, Constraint::Equals(wanted) if wanted == value)
}
