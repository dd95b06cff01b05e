use voltrix_core::bom::Bom;
use voltrix_core::matching::outcome::MatchReport;

pub fn print_report(report: &MatchReport) {
    println!("Status: {}\n", report.status);
    println!("{}\n", report.message);

    let f = &report.extracted_features;
    println!("Extracted features:");
    println!("  height:   {}", f.height.as_deref().unwrap_or("-"));
    println!("  width:    {}", f.width.as_deref().unwrap_or("-"));
    println!("  depth:    {}", f.depth.as_deref().unwrap_or("-"));
    println!("  breaker:  {}", f.breaker_type.as_deref().unwrap_or("-"));
    println!(
        "  quantity: {}",
        f.breaker_quantity
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".into())
    );
    println!(
        "  mount:    {}",
        f.mount.map(|m| m.to_string()).unwrap_or_else(|| "-".into())
    );
    println!(
        "  access:   {}",
        f.access.map(|a| a.to_string()).unwrap_or_else(|| "-".into())
    );

    if !report.candidates.is_empty() {
        println!("\nCandidates:");
        for candidate in &report.candidates {
            let b = &candidate.breakdown;
            let mark = |hit: bool| if hit { "yes" } else { "no" };
            println!(
                "  {:<18} score {:>2} ({:>3}%)  H:{:<3} W:{:<3} D:{:<3} breaker:{}",
                candidate.id,
                candidate.score,
                b.percent,
                mark(b.height),
                mark(b.width),
                mark(b.depth),
                mark(b.breaker)
            );
        }
    }

    if let Some(ref bom) = report.bom {
        println!();
        print_bom(bom);
    }
}

pub fn print_bom(bom: &Bom) {
    println!("Assembly: {} ({})", bom.assembly_number, bom.project);
    println!("Specifications: {}", bom.specifications);
    println!("Total parts: {}\n", bom.total_parts);

    let max_part = bom
        .components
        .iter()
        .map(|c| c.part_number.len())
        .max()
        .unwrap_or(11);

    println!(
        "  {:>4}  {:<width$}  {:>3}  {}",
        "Item",
        "Part Number",
        "Qty",
        "Description",
        width = max_part
    );
    for (i, line) in bom.components.iter().enumerate() {
        println!(
            "  {:>4}  {:<width$}  {:>3}  {}",
            i + 1,
            line.part_number,
            line.quantity,
            line.description,
            width = max_part
        );
    }
}
