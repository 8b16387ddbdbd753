use anyhow::Result;

use ecliptic_engine::{format_cache_info, format_supermoon_info};

use crate::cli::MoonArgs;
use crate::setup::{build_engine, parse_instant};

pub fn run(args: MoonArgs) -> Result<()> {
    let instant = parse_instant(args.at.as_deref())?;
    let engine = build_engine();
    let data = engine.moon(instant)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!("Moon at {}", instant.to_rfc3339());
    println!(
        "  {} {} — {}% illuminated ({:.2}% precise)",
        data.emoji, data.name, data.illumination, data.illumination_precise
    );
    println!(
        "  age {:.1} d, phase angle {:.1}°, {:?}",
        data.age_days, data.phase_angle, data.trend
    );
    println!("  {}", format_supermoon_info(&data));
    println!("  energy: {} (priority {})", data.energy, data.priority);
    println!("  {}", format_cache_info(&data));
    Ok(())
}
