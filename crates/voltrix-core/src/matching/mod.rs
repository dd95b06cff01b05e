pub mod constraint;
pub mod engine;
pub mod outcome;

pub use engine::match_assembly;
pub use outcome::{MatchOutcome, MatchReport, MatchStatus};
