use std::path::Path;
use voltrix_core::error::VoltrixError;
use voltrix_core::extract::features_from_text;
use voltrix_core::memory::{FilePatternStore, PatternMemory};

fn open(memory_file: &Path) -> PatternMemory {
    PatternMemory::new(Box::new(FilePatternStore::new(memory_file)))
}

pub fn list(memory_file: &Path) -> Result<(), VoltrixError> {
    let patterns = open(memory_file).all()?;

    if patterns.is_empty() {
        println!("No stored patterns.");
        return Ok(());
    }

    println!("Stored patterns ({}):\n", patterns.len());
    for pattern in &patterns {
        println!(
            "  {:<18} seen {:>3}x  last {}",
            pattern.box_identifier,
            pattern.match_count,
            pattern.timestamp.format("%Y-%m-%d %H:%M")
        );
        let f = &pattern.features;
        println!(
            "  {:<18} {}H x {}W x {}D, {}",
            "",
            f.height.as_deref().unwrap_or("-"),
            f.width.as_deref().unwrap_or("-"),
            f.depth.as_deref().unwrap_or("-"),
            f.breaker_type.as_deref().unwrap_or("no breaker")
        );
        println!();
    }
    Ok(())
}

pub fn suggest(specs: &str, memory_file: &Path) -> Result<(), VoltrixError> {
    let features = features_from_text(specs);

    match open(memory_file).suggest(&features)? {
        Some(s) => {
            println!(
                "{} (similarity {:.0}%, seen {} times)",
                s.box_identifier,
                s.similarity * 100.0,
                s.match_count
            );
        }
        None => println!("No stored pattern is similar enough."),
    }
    Ok(())
}
