use clap::{Parser, Subcommand};

/// Ecliptic geocentric position and Moon-illumination engine.
#[derive(Parser)]
#[command(
    name = "ecliptic",
    version,
    about = "Geocentric positions, Moon illumination, and aspects"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Report zodiacal positions for all ten bodies.
    Positions(PositionsArgs),
    /// Report Moon illumination, phase, and distance.
    Moon(MoonArgs),
    /// Report aspects between the current positions.
    Aspects(AspectsArgs),
}

/// Arguments for the `positions` subcommand.
#[derive(clap::Args)]
pub struct PositionsArgs {
    /// Instant to compute for, RFC 3339 (default: now).
    #[arg(short = 't', long = "at")]
    pub at: Option<String>,

    /// Emit JSON instead of the human-readable report.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `moon` subcommand.
#[derive(clap::Args)]
pub struct MoonArgs {
    /// Instant to compute for, RFC 3339 (default: now).
    #[arg(short = 't', long = "at")]
    pub at: Option<String>,

    /// Emit JSON instead of the human-readable report.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `aspects` subcommand.
#[derive(clap::Args)]
pub struct AspectsArgs {
    /// Instant to compute for, RFC 3339 (default: now).
    #[arg(short = 't', long = "at")]
    pub at: Option<String>,

    /// Emit JSON instead of the human-readable report.
    #[arg(long)]
    pub json: bool,
}
