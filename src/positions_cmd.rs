use anyhow::Result;

use crate::cli::PositionsArgs;
use crate::setup::{build_engine, parse_instant};

pub fn run(args: PositionsArgs) -> Result<()> {
    let instant = parse_instant(args.at.as_deref())?;
    let engine = build_engine();
    let positions = engine.positions(instant)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&positions)?);
        return Ok(());
    }

    println!("Positions at {}", instant.to_rfc3339());
    for (body, pos) in &positions {
        let motion = if pos.newly_retrograde {
            " (stations retrograde)"
        } else if pos.newly_direct {
            " (stations direct)"
        } else if pos.retrograde {
            " ℞"
        } else {
            ""
        };
        let transit = pos
            .transit
            .as_ref()
            .map(|t| format!(", {}", t.display))
            .unwrap_or_default();
        println!(
            "  {:<8} {:>7} {}{}{}",
            body.name(),
            pos.degree_minutes(),
            pos.sign,
            motion,
            transit
        );
    }
    Ok(())
}
