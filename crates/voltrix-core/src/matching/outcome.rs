use crate::bom::Bom;
use crate::model::FeatureRecord;
use serde::{Deserialize, Serialize};

/// How many catalog entries satisfied every constraint in the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    ExactMatch,
    Ambiguous,
    NoMatch,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::ExactMatch => write!(f, "exact match"),
            MatchStatus::Ambiguous => write!(f, "ambiguous"),
            MatchStatus::NoMatch => write!(f, "no match"),
        }
    }
}

/// Per-field agreement between the query and one candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub height: bool,
    pub width: bool,
    pub depth: bool,
    pub breaker: bool,
    /// Score as a share of the best score the query could award.
    pub percent: u32,
}

/// One scored candidate, reported for ambiguous and no-match outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateScore {
    pub id: String,
    pub project: String,
    pub score: u32,
    pub breakdown: MatchBreakdown,
}

/// Raw matcher outcome: status, matched ids, scored candidates, and the
/// human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub status: MatchStatus,
    pub matched_assemblies: Vec<String>,
    pub message: String,
    pub candidates: Vec<CandidateScore>,
}

/// Full result handed back to callers: the outcome plus the features the
/// query was reduced to, and the BOM when exactly one assembly matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub status: MatchStatus,
    pub message: String,
    pub matched_assemblies: Vec<String>,
    pub extracted_features: FeatureRecord,
    pub candidates: Vec<CandidateScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bom: Option<Bom>,
}
