//! Builds a [`MoonData`] record from the ephemeris provider.

use chrono::{DateTime, Datelike, Utc};
use tracing::trace;

use ecliptic_ephemeris::{Ephemeris, EphemerisError};

use crate::data::{MoonData, Trend};
use crate::phase::{Phase, classify, full_moon_name, is_significant};
use crate::rate::{change_rate_per_hour, next_percentage_in_secs, optimal_cache_ttl_secs};
use crate::{APOGEE_KM, DISTANCE_BAND_KM, MOON_RADIUS_KM, PERIGEE_KM, SYNODIC_MONTH_DAYS};

/// Radians-to-arcseconds conversion factor.
const ARCSEC_PER_RAD: f64 = 206_264.806_247_096_36;

/// Supermoon posting priority floor.
const SUPERMOON_PRIORITY: u8 = 9;

/// Computes Moon illumination metrics for an instant.
///
/// # Errors
///
/// Propagates [`EphemerisError`] from the provider unchanged; no partial
/// record is ever produced.
pub fn compute_moon_data(
    ephemeris: &dyn Ephemeris,
    instant: DateTime<Utc>,
) -> Result<MoonData, EphemerisError> {
    let state = ephemeris.moon_state(instant)?;

    let illumination_precise = (state.illuminated_fraction * 100.0).clamp(0.0, 100.0);
    let illumination = illumination_precise.round() as u8;
    let phase_angle = state.phase_angle.rem_euclid(360.0);
    let age_days = phase_angle / 360.0 * SYNODIC_MONTH_DAYS;
    let trend = if phase_angle < 180.0 {
        Trend::Waxing
    } else {
        Trend::Waning
    };

    let distance_km = state.distance_km;
    let is_super_moon = distance_km <= PERIGEE_KM + DISTANCE_BAND_KM;
    let is_micro_moon = distance_km >= APOGEE_KM - DISTANCE_BAND_KM;
    let angular_size_arcsec = 2.0 * MOON_RADIUS_KM / distance_km * ARCSEC_PER_RAD;

    let change_rate = change_rate_per_hour(phase_angle);
    let next_in = next_percentage_in_secs(illumination_precise, trend, change_rate);
    let ttl = optimal_cache_ttl_secs(next_in);

    let phase = classify(illumination, phase_angle);
    let name = match phase {
        Phase::Full => full_moon_name(instant.month()).to_string(),
        other => other.name().to_string(),
    };
    let mut energy = phase.energy().to_string();
    let mut priority = phase.priority();
    if is_super_moon {
        energy.push_str(" (Supermoon!)");
        priority = priority.max(SUPERMOON_PRIORITY);
    }

    trace!(
        illumination,
        phase_angle,
        distance_km,
        ttl_secs = ttl,
        "computed moon data"
    );

    Ok(MoonData {
        illumination,
        illumination_precise,
        phase_angle,
        age_days,
        trend,
        distance_km,
        is_super_moon,
        is_micro_moon,
        angular_size_arcsec,
        change_rate_per_hour: change_rate,
        next_percentage_in_secs: next_in,
        optimal_cache_ttl_secs: ttl,
        phase,
        name,
        energy,
        emoji: phase.emoji(),
        priority,
        is_significant: is_significant(phase_angle),
    })
}
