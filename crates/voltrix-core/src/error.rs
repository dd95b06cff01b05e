#[derive(Debug, thiserror::Error)]
pub enum VoltrixError {
    #[error("feature extraction failed: {0}")]
    Extraction(String),

    #[error("failed to load assembly catalog: {0}")]
    CatalogLoad(String),

    #[error("invalid assembly catalog: {0}")]
    CatalogInvalid(String),

    #[error("assembly '{id}' not found. Available assemblies: {}", available.join(", "))]
    UnknownAssembly { id: String, available: Vec<String> },

    #[error("malformed BOM export: {0}")]
    BomExport(String),

    #[error("pattern store failure: {0}")]
    PatternStore(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
