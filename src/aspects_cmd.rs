use anyhow::Result;

use crate::cli::AspectsArgs;
use crate::setup::{build_engine, parse_instant};

pub fn run(args: AspectsArgs) -> Result<()> {
    let instant = parse_instant(args.at.as_deref())?;
    let engine = build_engine();
    let positions = engine.positions(instant)?;
    let aspects = engine.aspects(&positions);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&aspects)?);
        return Ok(());
    }

    println!("Aspects at {}", instant.to_rfc3339());
    if aspects.is_empty() {
        println!("  none within orb");
        return Ok(());
    }
    for aspect in &aspects {
        println!(
            "  {:<11} {}–{} at {:.1}° (priority {})",
            aspect.kind.name(),
            aspect.body_a,
            aspect.body_b,
            aspect.separation_degrees,
            aspect.priority
        );
    }
    Ok(())
}
