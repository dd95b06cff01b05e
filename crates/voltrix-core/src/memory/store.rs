use crate::error::VoltrixError;
use crate::memory::MemoryPattern;
use std::path::{Path, PathBuf};

/// Backend for the pattern log.
///
/// The log is a single document read and rewritten whole on every update,
/// matching the blob-store collaborator it stands in for.
pub trait PatternStore: Send + Sync {
    fn load(&self) -> Result<Vec<MemoryPattern>, VoltrixError>;

    fn save(&self, patterns: &[MemoryPattern]) -> Result<(), VoltrixError>;

    /// Name of this store backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// JSON-file-backed pattern store. A missing file reads as an empty log.
#[derive(Debug, Clone)]
pub struct FilePatternStore {
    path: PathBuf,
}

impl FilePatternStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FilePatternStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PatternStore for FilePatternStore {
    fn load(&self) -> Result<Vec<MemoryPattern>, VoltrixError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            VoltrixError::PatternStore(format!("{}: {e}", self.path.display()))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            VoltrixError::PatternStore(format!("{}: {e}", self.path.display()))
        })
    }

    fn save(&self, patterns: &[MemoryPattern]) -> Result<(), VoltrixError> {
        let json = serde_json::to_string_pretty(patterns)?;
        std::fs::write(&self.path, json).map_err(|e| {
            VoltrixError::PatternStore(format!("{}: {e}", self.path.display()))
        })
    }

    fn backend_name(&self) -> &str {
        "json-file"
    }
}
