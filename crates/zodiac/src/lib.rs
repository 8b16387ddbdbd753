//! # ecliptic-zodiac
//!
//! Pure math mapping an ecliptic longitude (degrees) to a zodiac sign,
//! degree-within-sign, arc minutes, and a `D°MM′` display string.
//!
//! Every function is total over any finite `f64` input: longitudes are
//! normalized into `[0, 360)` via `rem_euclid` before any indexing, so
//! negative and >360° inputs are handled transparently.
//!
//! ## Quick start
//!
//! ```
//! use ecliptic_zodiac::{Sign, degree_in_sign, format_degree_minutes};
//!
//! let lon = 45.5; // 15°30′ Taurus
//! assert_eq!(Sign::from_longitude(lon), Sign::Taurus);
//! assert_eq!(degree_in_sign(lon), 15);
//! assert_eq!(format_degree_minutes(lon), "15°30′");
//! ```

pub mod sign;

pub use sign::Sign;

/// Normalizes a longitude into `[0, 360)`.
pub fn normalize(longitude: f64) -> f64 {
    longitude.rem_euclid(360.0)
}

/// Whole degrees within the current sign, `0..30`.
pub fn degree_in_sign(longitude: f64) -> u8 {
    normalize(longitude).rem_euclid(30.0).floor() as u8
}

/// Arc minutes within the current degree, `0..60`.
///
/// The fractional degree is rounded to the nearest minute. Rounding can
/// land on 60 (e.g. 15.9999°); the value is clamped to 59 so it never
/// disagrees with [`degree_in_sign`], which floors independently.
pub fn minutes_in_degree(longitude: f64) -> u8 {
    let fract = normalize(longitude).rem_euclid(30.0).fract();
    ((fract * 60.0).round() as u8).min(59)
}

/// Formats a longitude as degrees and minutes within its sign, `D°MM′`.
///
/// Operates on `longitude mod 30`, independent of which sign the body is
/// in: `30.5` and `0.5` both format as `0°30′`.
pub fn format_degree_minutes(longitude: f64) -> String {
    format!("{}°{:02}′", degree_in_sign(longitude), minutes_in_degree(longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_both_directions() {
        assert_eq!(normalize(0.0), 0.0);
        assert_eq!(normalize(360.0), 0.0);
        assert_eq!(normalize(-30.0), 330.0);
        assert_eq!(normalize(725.0), 5.0);
    }

    #[test]
    fn degree_in_sign_range() {
        for lon in [0.0, 29.999, 30.0, 45.5, 359.9, -0.1, 720.25] {
            let d = degree_in_sign(lon);
            assert!(d < 30, "degree {} out of range for lon {}", d, lon);
        }
    }

    #[test]
    fn minutes_never_reach_sixty() {
        // 15.9999 * 60 rounds to 60; must clamp to 59.
        assert_eq!(minutes_in_degree(15.9999), 59);
        assert_eq!(minutes_in_degree(29.9999), 59);
    }

    #[test]
    fn minutes_round_half_up() {
        assert_eq!(minutes_in_degree(10.5), 30);
        assert_eq!(minutes_in_degree(0.25), 15);
    }
}
