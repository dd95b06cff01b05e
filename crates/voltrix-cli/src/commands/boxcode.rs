use voltrix_core::boxcode::{generate_box_code, BoardSpecs, SectionSpecs};
use voltrix_core::error::VoltrixError;

use crate::output;

#[allow(clippy::too_many_arguments)]
pub fn run(
    height: Option<String>,
    width: Option<String>,
    depth: Option<String>,
    breaker: Option<String>,
    mounting: Option<String>,
    seismic: Option<String>,
    hardware: Option<String>,
    finish: Option<String>,
    output_format: &str,
) -> Result<(), VoltrixError> {
    let section = SectionSpecs {
        height,
        width,
        depth,
        breaker_manufacturer: breaker,
        mounting_type: mounting,
    };
    let board = BoardSpecs {
        seismic_inclusions: seismic,
        hardware_notes: hardware,
        finish,
    };

    let code = generate_box_code(&section, &board);

    match output_format {
        "json" => output::json::print(&serde_json::json!({
            "identifier": code.to_string(),
            "codes": code,
        }))?,
        _ => {
            println!("{code}\n");
            println!("  height:      {}", code.height);
            println!("  width:       {}", code.width);
            println!("  depth:       {}", code.depth);
            println!("  cornerpost:  {}", code.front_cornerpost);
            println!("  hardware:    {}", code.hardware);
            println!("  seismic:     {}", code.seismic);
            println!("  finish:      {}", code.finish);
        }
    }

    Ok(())
}
