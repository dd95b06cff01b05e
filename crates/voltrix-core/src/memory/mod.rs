//! Learned pattern memory.
//!
//! Quotes that matched (or were assigned an identifier by hand) are kept as
//! {features, box identifier} pairs so later quotes with no catalog match can
//! still get a suggestion. The log is one document: every update loads it
//! whole, scores the new features against each entry, and rewrites the file.
//! A [`std::sync::Mutex`] serializes that cycle within this process;
//! concurrent *processes* writing the same file can still clobber each
//! other's updates. Known limitation of the document-store layout, surfaced
//! here rather than hidden.

pub mod store;

pub use store::{FilePatternStore, PatternStore};

use crate::error::VoltrixError;
use crate::model::FeatureRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Where a stored pattern came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternSource {
    Quote,
    Text,
    Manual,
}

/// One remembered {features, identifier} pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryPattern {
    pub features: FeatureRecord,
    pub box_identifier: String,
    pub source_type: PatternSource,
    pub timestamp: DateTime<Utc>,
    pub match_count: u32,
}

/// A stored identifier offered for an unmatched feature set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSuggestion {
    pub box_identifier: String,
    pub similarity: f64,
    pub match_count: u32,
}

/// What `record` did with the incoming features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// No stored pattern was similar enough; a new entry was appended.
    Appended,
    /// An equivalent pattern existed; its match count is now this value.
    Reinforced(u32),
}

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;

/// Fraction of agreeing fields over fields present in either record.
///
/// A field both records leave unset says nothing and is ignored; two records
/// with no fields at all score 0.0, not 1.0, so an empty query never
/// reinforces an empty pattern.
pub fn similarity(a: &FeatureRecord, b: &FeatureRecord) -> f64 {
    let mut present = 0u32;
    let mut agree = 0u32;

    let mut field = |a_set: bool, b_set: bool, equal: bool| {
        if a_set || b_set {
            present += 1;
            if a_set && b_set && equal {
                agree += 1;
            }
        }
    };

    field(a.height.is_some(), b.height.is_some(), a.height == b.height);
    field(a.width.is_some(), b.width.is_some(), a.width == b.width);
    field(a.depth.is_some(), b.depth.is_some(), a.depth == b.depth);
    field(
        a.breaker_type.is_some(),
        b.breaker_type.is_some(),
        a.breaker_type == b.breaker_type,
    );
    field(
        a.breaker_quantity.is_some(),
        b.breaker_quantity.is_some(),
        a.breaker_quantity == b.breaker_quantity,
    );
    field(a.mount.is_some(), b.mount.is_some(), a.mount == b.mount);
    field(a.access.is_some(), b.access.is_some(), a.access == b.access);

    if present == 0 {
        return 0.0;
    }
    f64::from(agree) / f64::from(present)
}

/// The pattern log behind a single-writer lock.
pub struct PatternMemory {
    store: Box<dyn PatternStore>,
    threshold: f64,
    writer: Mutex<()>,
}

impl PatternMemory {
    pub fn new(store: Box<dyn PatternStore>) -> Self {
        Self::with_threshold(store, DEFAULT_SIMILARITY_THRESHOLD)
    }

    pub fn with_threshold(store: Box<dyn PatternStore>, threshold: f64) -> Self {
        PatternMemory {
            store,
            threshold,
            writer: Mutex::new(()),
        }
    }

    /// All stored patterns, in log order.
    pub fn all(&self) -> Result<Vec<MemoryPattern>, VoltrixError> {
        self.store.load()
    }

    /// Remember `features` under `box_identifier`.
    ///
    /// When the most similar stored pattern reaches the threshold it is
    /// reinforced in place (count bumped, timestamp refreshed) instead of
    /// growing the log with a near-duplicate.
    pub fn record(
        &self,
        features: &FeatureRecord,
        box_identifier: &str,
        source: PatternSource,
    ) -> Result<RecordOutcome, VoltrixError> {
        let _guard = self
            .writer
            .lock()
            .map_err(|_| VoltrixError::PatternStore("pattern log lock poisoned".into()))?;

        let mut patterns = self.store.load()?;

        let best = patterns
            .iter()
            .enumerate()
            .map(|(i, p)| (similarity(features, &p.features), i))
            .filter(|(score, _)| *score >= self.threshold)
            .max_by(|(a, _), (b, _)| a.total_cmp(b));

        let outcome = match best {
            Some((score, i)) => {
                let existing = &mut patterns[i];
                existing.match_count += 1;
                existing.timestamp = Utc::now();
                tracing::debug!(
                    box_identifier = %existing.box_identifier,
                    similarity = score,
                    match_count = existing.match_count,
                    "reinforced stored pattern"
                );
                RecordOutcome::Reinforced(existing.match_count)
            }
            None => {
                patterns.push(MemoryPattern {
                    features: features.clone(),
                    box_identifier: box_identifier.to_string(),
                    source_type: source,
                    timestamp: Utc::now(),
                    match_count: 1,
                });
                tracing::debug!(%box_identifier, "appended new pattern");
                RecordOutcome::Appended
            }
        };

        self.store.save(&patterns)?;
        Ok(outcome)
    }

    /// The stored identifier most similar to `features`, if any entry
    /// reaches the threshold.
    pub fn suggest(
        &self,
        features: &FeatureRecord,
    ) -> Result<Option<PatternSuggestion>, VoltrixError> {
        let patterns = self.store.load()?;

        Ok(patterns
            .iter()
            .map(|p| (similarity(features, &p.features), p))
            .filter(|(score, _)| *score >= self.threshold)
            .max_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(score, pattern)| PatternSuggestion {
                box_identifier: pattern.box_identifier.clone(),
                similarity: score,
                match_count: pattern.match_count,
            }))
    }
}
