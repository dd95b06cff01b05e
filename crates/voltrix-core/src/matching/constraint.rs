//! Per-field match constraints.
//!
//! A query field is either absent (no constraint), an exact requirement, or
//! a family requirement that also accepts compatible values. Evaluating all
//! fields through one type keeps the "absent means unconstrained" rule in a
//! single place instead of per-field `if present` checks.

use crate::extract::breaker::{canonical_breaker_type, families_compatible};
use crate::model::{Access, AssemblySpecs, BreakerCount, FeatureRecord, Mount};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint<T> {
    Unconstrained,
    Equals(T),
    CompatibleFamily(T),
}

impl<T: PartialEq> Constraint<T> {
    /// Accept `value` under this constraint, using `compatible` to decide
    /// the family case. `Unconstrained` accepts everything.
    pub fn accepts_with(&self, value: &T, compatible: impl Fn(&T, &T) -> bool) -> bool {
        match self {
            Constraint::Unconstrained => true,
            Constraint::Equals(wanted) => wanted == value,
            Constraint::CompatibleFamily(wanted) => wanted == value || compatible(wanted, value),
        }
    }

    /// Accept `value` with no family relation defined.
    pub fn accepts(&self, value: &T) -> bool {
        self.accepts_with(value, |_, _| false)
    }

    pub fn is_unconstrained(&self) -> bool {
        matches!(self, Constraint::Unconstrained)
    }
}

fn from_option<T>(field: Option<T>) -> Constraint<T> {
    match field {
        Some(value) => Constraint::Equals(value),
        None => Constraint::Unconstrained,
    }
}

/// A feature record compiled into per-field constraints.
#[derive(Debug, Clone)]
pub struct MatchQuery {
    pub height: Constraint<String>,
    pub width: Constraint<String>,
    pub depth: Constraint<String>,
    pub breaker_type: Constraint<String>,
    pub breaker_quantity: Constraint<u32>,
    pub mount: Constraint<Mount>,
    pub access: Constraint<Access>,
}

impl MatchQuery {
    /// Compile a feature record. The breaker type is canonicalized here so
    /// the matcher and the closest-match scorer see the same spelling.
    pub fn from_features(features: &FeatureRecord) -> Self {
        MatchQuery {
            height: from_option(features.height.clone()),
            width: from_option(features.width.clone()),
            depth: from_option(features.depth.clone()),
            breaker_type: match &features.breaker_type {
                Some(raw) => Constraint::CompatibleFamily(canonical_breaker_type(raw)),
                None => Constraint::Unconstrained,
            },
            breaker_quantity: from_option(features.breaker_quantity),
            mount: from_option(features.mount),
            access: from_option(features.access),
        }
    }

    /// True when the assembly satisfies every constrained field.
    pub fn accepts(&self, specs: &AssemblySpecs) -> bool {
        self.height.accepts(&specs.height)
            && self.width.accepts(&specs.width)
            && self.depth.accepts(&specs.depth)
            && self
                .breaker_type
                .accepts_with(&specs.breaker_type, |a, b| families_compatible(a, b))
            && self.accepts_quantity(&specs.breaker_quantity)
            && self.mount.accepts(&specs.mount)
            && self.access.accepts(&specs.access)
    }

    /// Quantity rule: a "multiple" catalog entry accepts any requested
    /// count; otherwise the counts must be equal.
    fn accepts_quantity(&self, catalog_quantity: &BreakerCount) -> bool {
        match catalog_quantity {
            BreakerCount::Multiple => true,
            BreakerCount::Count(n) => self.breaker_quantity.accepts(n),
        }
    }
}
