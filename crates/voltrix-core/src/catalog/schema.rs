use crate::model::Part;
use serde::{Deserialize, Serialize};

/// One assembly's rows in the bundled parts table, grouped by the
/// "assembly number" key of the tabular source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyPartsDef {
    pub assembly_number: String,
    pub parts: Vec<Part>,
}
