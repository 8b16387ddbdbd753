//! The per-instant Moon record.

use serde::Serialize;

use crate::phase::Phase;

/// Whether the illuminated fraction is growing or shrinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Waxing,
    Waning,
}

/// Moon illumination metrics for one instant.
///
/// Constructed by [`crate::compute_moon_data`] on cache miss, keyed by the
/// minute-rounded instant; immutable, superseded (never mutated) on
/// recompute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoonData {
    /// Displayed illumination, whole percent `0..=100`.
    pub illumination: u8,
    /// Full-precision illumination percent, `[0, 100]`.
    pub illumination_precise: f64,
    /// Phase angle in degrees, `[0, 360)`: 0 = new, 180 = full.
    pub phase_angle: f64,
    /// Lunar age in days, `[0, 29.53)`.
    pub age_days: f64,
    /// Waxing below 180° phase angle, waning above.
    pub trend: Trend,
    /// Earth-Moon center distance, kilometers.
    pub distance_km: f64,
    /// True within the perigee-side 10% distance band.
    pub is_super_moon: bool,
    /// True within the apogee-side 10% distance band. Mutually exclusive
    /// with `is_super_moon` by construction: the bands do not overlap.
    pub is_micro_moon: bool,
    /// Apparent angular diameter, arc seconds.
    pub angular_size_arcsec: f64,
    /// Modeled illumination change rate, percent per hour.
    pub change_rate_per_hour: f64,
    /// Seconds until the displayed percent next changes.
    pub next_percentage_in_secs: f64,
    /// `next_percentage_in_secs` clamped into `[60, 3600]`; the smart
    /// cache stores this record for exactly this long.
    pub optimal_cache_ttl_secs: f64,
    /// Display phase.
    pub phase: Phase,
    /// Display name; month-traditional for full moons ("Buck Moon").
    pub name: String,
    /// Thematic keywords, "(Supermoon!)"-qualified when applicable.
    pub energy: String,
    /// Phase emoji.
    pub emoji: &'static str,
    /// Posting priority, 1..=10; at least 9 for supermoons.
    pub priority: u8,
    /// True only within ±2° of a cardinal phase angle.
    pub is_significant: bool,
}
