//! Diagnostic inference of assembly specs from part descriptions.
//!
//! The asserted spec table is authoritative; this scan exists so
//! `voltrix catalog show` can surface what the parts list itself implies
//! and make disagreements between the two visible.

use crate::extract::breaker::detect_breaker_type;
use crate::model::{AssemblyRecord, Mount};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static HEIGHT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)H\b").expect("height token pattern"));

static WIDTH_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)W\b").expect("width token pattern"));

static DEPTH_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*D\b").expect("depth token pattern"));

/// What the parts list implies about an assembly, independent of the
/// asserted spec table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InferredSpecs {
    pub height: Option<String>,
    pub width: Option<String>,
    pub depth: Option<String>,
    pub breaker_family: Option<String>,
    pub mount: Option<Mount>,
    pub seismic: bool,
}

/// Scan an assembly's part descriptions for dimension tokens, breaker
/// keywords, mount phrasing, and seismic hardware.
pub fn infer_specs(record: &AssemblyRecord) -> InferredSpecs {
    let text = record
        .parts
        .iter()
        .map(|p| p.description.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let upper = text.to_uppercase();

    InferredSpecs {
        height: first_capture(&HEIGHT_TOKEN, &upper),
        width: first_capture(&WIDTH_TOKEN, &upper),
        depth: first_capture(&DEPTH_TOKEN, &upper),
        breaker_family: detect_breaker_type(&upper).map(str::to_string),
        mount: Mount::from_str_loose(&text),
        seismic: upper.contains("SEISMIC"),
    }
}

fn first_capture(re: &Regex, upper: &str) -> Option<String> {
    re.captures(upper).map(|caps| caps[1].to_string())
}
