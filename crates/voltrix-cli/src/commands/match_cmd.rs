use std::path::PathBuf;
use voltrix_core::error::VoltrixError;
use voltrix_core::matching::outcome::MatchStatus;
use voltrix_core::memory::{FilePatternStore, PatternMemory, PatternSource};
use voltrix_core::model::QuoteDoc;

use crate::output;

pub fn run(
    specs: Option<String>,
    quote: Option<PathBuf>,
    output_format: &str,
    memory_file: Option<PathBuf>,
) -> Result<(), VoltrixError> {
    let catalog = voltrix_core::load_builtin()?;

    let (report, source) = match (specs, quote) {
        (_, Some(path)) => {
            let bytes = std::fs::read(&path)?;
            let doc: QuoteDoc = serde_json::from_slice(&bytes)?;
            (
                voltrix_core::match_quote(&doc, &catalog)?,
                PatternSource::Quote,
            )
        }
        (Some(text), None) => (
            voltrix_core::match_text(&text, &catalog)?,
            PatternSource::Text,
        ),
        (None, None) => {
            return Err(VoltrixError::Extraction(
                "no input: pass a specification string or --quote FILE".into(),
            ))
        }
    };

    // Exact matches feed the pattern log; unmatched queries consult it.
    let suggestion = match &memory_file {
        Some(path) => {
            let memory = PatternMemory::new(Box::new(FilePatternStore::new(path)));
            match report.status {
                MatchStatus::ExactMatch => {
                    memory.record(
                        &report.extracted_features,
                        &report.matched_assemblies[0],
                        source,
                    )?;
                    None
                }
                MatchStatus::NoMatch => memory.suggest(&report.extracted_features)?,
                MatchStatus::Ambiguous => None,
            }
        }
        None => None,
    };

    match output_format {
        "json" => output::json::print(&report)?,
        _ => output::table::print_report(&report),
    }

    if let Some(s) = suggestion {
        println!();
        println!(
            "A similar quote was previously assigned {} (similarity {:.0}%, seen {} times).",
            s.box_identifier,
            s.similarity * 100.0,
            s.match_count
        );
    }

    Ok(())
}
