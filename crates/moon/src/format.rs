//! Human-readable debug summaries.

use crate::data::MoonData;

/// One-line distance/classification summary.
pub fn format_supermoon_info(data: &MoonData) -> String {
    let class = if data.is_super_moon {
        "Supermoon (near perigee)"
    } else if data.is_micro_moon {
        "Micromoon (near apogee)"
    } else {
        "Average distance"
    };
    format!(
        "{}: {:.0} km, {:.1}″ across",
        class, data.distance_km, data.angular_size_arcsec
    )
}

/// One-line cache-timing summary: when the displayed percent next changes
/// and how long the smart cache will hold this record.
pub fn format_cache_info(data: &MoonData) -> String {
    format!(
        "{}% {} ({:?}); next 1% in ~{:.0} min, cache TTL {:.0}s",
        data.illumination,
        data.name,
        data.trend,
        data.next_percentage_in_secs / 60.0,
        data.optimal_cache_ttl_secs
    )
}
