use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use ecliptic_engine::AstroEngine;
use ecliptic_ephemeris::AnalyticEphemeris;
use ecliptic_positions::MeanMotionTransits;

/// Builds an engine on the built-in analytic provider and the mean-motion
/// transit estimator.
pub fn build_engine() -> AstroEngine {
    AstroEngine::new(
        Arc::new(AnalyticEphemeris::new()),
        Arc::new(MeanMotionTransits::new()),
    )
}

/// Parses an optional RFC 3339 instant, defaulting to now.
pub fn parse_instant(at: Option<&str>) -> Result<DateTime<Utc>> {
    match at {
        None => Ok(Utc::now()),
        Some(raw) => {
            let parsed = DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("invalid RFC 3339 instant: {raw}"))?;
            Ok(parsed.with_timezone(&Utc))
        }
    }
}
