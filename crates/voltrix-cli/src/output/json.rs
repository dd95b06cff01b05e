use serde::Serialize;
use voltrix_core::error::VoltrixError;

pub fn print<T: Serialize>(value: &T) -> Result<(), VoltrixError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
