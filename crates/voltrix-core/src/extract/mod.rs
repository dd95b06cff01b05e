pub mod breaker;
pub mod dimension;
pub mod quote;
pub mod text;

pub use quote::features_from_quote;
pub use text::features_from_text;
