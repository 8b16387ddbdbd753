//! Illumination change-rate model and next-percent timing.
//!
//! The rate model is a deliberate heuristic: the true rate of illumination
//! change is not sinusoidal, but a half-sine peaking at the quarters and
//! vanishing toward new/full captures the qualitative behavior well enough
//! to drive cache expiry. Do not make it more astronomically exact without
//! revisiting the TTL-convergence tests — the two are coupled.

use std::f64::consts::FRAC_PI_2;

use crate::data::Trend;

/// Peak illumination change rate, percent per hour (at the quarters).
pub const MAX_RATE_PCT_PER_HOUR: f64 = 0.28;

/// Rate floor, percent per hour. A zero rate would make the next-percent
/// time undefined, so the model never returns less than this.
pub const MIN_RATE_PCT_PER_HOUR: f64 = 0.01;

/// Smart-cache TTL bounds, seconds.
pub const TTL_MIN_SECS: f64 = 60.0;
pub const TTL_MAX_SECS: f64 = 3_600.0;

/// Modeled instantaneous illumination change rate, percent per hour.
///
/// `max_rate × sin((d/90) × π/2)` where `d` is the angular distance from
/// the phase angle to the nearest of {0°, 180°, 360°}, floored at
/// [`MIN_RATE_PCT_PER_HOUR`].
pub fn change_rate_per_hour(phase_angle: f64) -> f64 {
    let pa = phase_angle.rem_euclid(360.0);
    let from_peak = [0.0_f64, 180.0, 360.0]
        .iter()
        .map(|peak| (pa - peak).abs())
        .fold(f64::INFINITY, f64::min);
    let rate = MAX_RATE_PCT_PER_HOUR * ((from_peak / 90.0) * FRAC_PI_2).sin();
    rate.max(MIN_RATE_PCT_PER_HOUR)
}

/// Seconds until the precise illumination crosses the next whole percent
/// in the current trend direction.
///
/// If the precise value sits on a whole percent (just crossed), the gap is
/// taken as a full percent: the next target is one whole point away.
pub fn next_percentage_in_secs(illumination_precise: f64, trend: Trend, rate_per_hour: f64) -> f64 {
    let gap = match trend {
        Trend::Waxing => illumination_precise.ceil() - illumination_precise,
        Trend::Waning => illumination_precise - illumination_precise.floor(),
    };
    let gap = if gap < 1e-9 { 1.0 } else { gap };
    gap / rate_per_hour * 3_600.0
}

/// Clamps a next-percent time into the smart-cache TTL bounds.
pub fn optimal_cache_ttl_secs(next_percentage_in_secs: f64) -> f64 {
    next_percentage_in_secs.clamp(TTL_MIN_SECS, TTL_MAX_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rate_peaks_at_quarters() {
        assert_relative_eq!(change_rate_per_hour(90.0), 0.28, epsilon = 1e-12);
        assert_relative_eq!(change_rate_per_hour(270.0), 0.28, epsilon = 1e-12);
    }

    #[test]
    fn rate_is_floored_at_the_peaks() {
        assert_relative_eq!(change_rate_per_hour(0.0), 0.01, epsilon = 1e-12);
        assert_relative_eq!(change_rate_per_hour(180.0), 0.01, epsilon = 1e-12);
        assert_relative_eq!(change_rate_per_hour(359.999), 0.01, epsilon = 1e-6);
    }

    #[test]
    fn rate_is_symmetric_about_the_full_moon() {
        assert_relative_eq!(
            change_rate_per_hour(135.0),
            change_rate_per_hour(225.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn waxing_gap_targets_the_ceiling() {
        // 42.25% waxing at 0.25%/h: 0.75% to go = 3 h.
        let secs = next_percentage_in_secs(42.25, Trend::Waxing, 0.25);
        assert_relative_eq!(secs, 10_800.0, epsilon = 1e-9);
    }

    #[test]
    fn waning_gap_targets_the_floor() {
        // 42.25% waning at 0.25%/h: 0.25% to go = 1 h.
        let secs = next_percentage_in_secs(42.25, Trend::Waning, 0.25);
        assert_relative_eq!(secs, 3_600.0, epsilon = 1e-9);
    }

    #[test]
    fn whole_percent_counts_as_a_full_gap() {
        let secs = next_percentage_in_secs(50.0, Trend::Waxing, 0.28);
        assert_relative_eq!(secs, 1.0 / 0.28 * 3_600.0, epsilon = 1e-9);
        let secs = next_percentage_in_secs(50.0, Trend::Waning, 0.28);
        assert_relative_eq!(secs, 1.0 / 0.28 * 3_600.0, epsilon = 1e-9);
    }

    #[test]
    fn ttl_is_clamped_both_ways() {
        assert_relative_eq!(optimal_cache_ttl_secs(5.0), 60.0);
        assert_relative_eq!(optimal_cache_ttl_secs(1_000.0), 1_000.0);
        assert_relative_eq!(optimal_cache_ttl_secs(500_000.0), 3_600.0);
    }
}
