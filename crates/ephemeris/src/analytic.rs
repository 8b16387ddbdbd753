//! Low-precision analytic ephemeris from mean orbital elements.
//!
//! Solar and lunar longitudes use truncated trigonometric series; planetary
//! longitudes come from circular heliocentric orbits (mean longitude + mean
//! motion) converted to geocentric longitudes, which reproduces retrograde
//! loops qualitatively. Expected accuracy is on the order of a degree for
//! the fast bodies and better for the slow ones — sufficient for sign
//! placement, motion direction, and illumination trends, not for precision
//! astronomy.

use chrono::{DateTime, TimeZone, Utc};

use crate::body::Body;
use crate::error::EphemerisError;
use crate::provider::{Ephemeris, MoonState};

/// Mean Earth-Moon distance in kilometers (series constant term).
const MOON_MEAN_DISTANCE_KM: f64 = 385_001.0;

/// Circular-orbit mean elements: semi-major axis (AU), mean longitude at
/// J2000 (degrees), mean daily motion (degrees/day).
struct MeanElements {
    a: f64,
    l0: f64,
    n: f64,
}

/// Earth's own mean elements, used to shift heliocentric to geocentric.
const EARTH: MeanElements = MeanElements {
    a: 1.000,
    l0: 100.464,
    n: 0.985_609,
};

fn planet_elements(body: Body) -> Option<MeanElements> {
    let (a, l0, n) = match body {
        Body::Mercury => (0.387, 252.251, 4.092_317),
        Body::Venus => (0.723, 181.980, 1.602_136),
        Body::Mars => (1.524, 355.433, 0.524_039),
        Body::Jupiter => (5.203, 34.351, 0.083_056),
        Body::Saturn => (9.537, 50.077, 0.033_371),
        Body::Uranus => (19.191, 314.055, 0.011_698),
        Body::Neptune => (30.069, 304.349, 0.005_965),
        Body::Pluto => (39.482, 238.958, 0.003_964),
        Body::Sun | Body::Moon => return None,
    };
    Some(MeanElements { a, l0, n })
}

/// Built-in deterministic provider. Stateless and cheap to clone.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Apparent solar ecliptic longitude, degrees.
    fn sun_longitude(d: f64) -> f64 {
        let g = (357.529 + 0.985_600_28 * d).to_radians();
        let q = 280.459 + 0.985_647_36 * d;
        (q + 1.915 * g.sin() + 0.020 * (2.0 * g).sin()).rem_euclid(360.0)
    }

    /// Lunar ecliptic longitude, degrees (principal term only).
    fn moon_longitude(d: f64) -> f64 {
        let l = 218.316 + 13.176_396 * d;
        let m = (134.963 + 13.064_993 * d).to_radians();
        (l + 6.289 * m.sin()).rem_euclid(360.0)
    }

    /// Earth-Moon distance, kilometers (three principal terms).
    fn moon_distance_km(d: f64) -> f64 {
        let m = (134.963 + 13.064_993 * d).to_radians();
        let elong = (297.850 + 12.190_749 * d).to_radians();
        MOON_MEAN_DISTANCE_KM
            - 20_905.0 * m.cos()
            - 3_699.0 * (2.0 * elong - m).cos()
            - 2_956.0 * (2.0 * elong).cos()
    }

    /// Geocentric longitude of a planet from circular heliocentric orbits.
    fn planet_longitude(elements: &MeanElements, d: f64) -> f64 {
        let lp = (elements.l0 + elements.n * d).to_radians();
        let le = (EARTH.l0 + EARTH.n * d).to_radians();
        let (xp, yp) = (elements.a * lp.cos(), elements.a * lp.sin());
        let (xe, ye) = (EARTH.a * le.cos(), EARTH.a * le.sin());
        (yp - ye).atan2(xp - xe).to_degrees().rem_euclid(360.0)
    }
}

/// Days since the J2000.0 epoch (2000-01-01 12:00 TT, taken as UTC here).
fn days_since_j2000(instant: DateTime<Utc>) -> f64 {
    let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    let delta = instant - j2000;
    delta.num_milliseconds() as f64 / 86_400_000.0
}

impl Ephemeris for AnalyticEphemeris {
    fn ecliptic_longitude(
        &self,
        body: Body,
        instant: DateTime<Utc>,
    ) -> Result<f64, EphemerisError> {
        let d = days_since_j2000(instant);
        let lon = match body {
            Body::Sun => Self::sun_longitude(d),
            Body::Moon => Self::moon_longitude(d),
            other => {
                let elements = planet_elements(other).ok_or_else(|| {
                    EphemerisError::ComputationFailed {
                        body: other,
                        instant,
                        reason: "no mean elements for body".into(),
                    }
                })?;
                Self::planet_longitude(&elements, d)
            }
        };
        if lon.is_finite() {
            Ok(lon)
        } else {
            Err(EphemerisError::ComputationFailed {
                body,
                instant,
                reason: "non-finite longitude".into(),
            })
        }
    }

    fn moon_state(&self, instant: DateTime<Utc>) -> Result<MoonState, EphemerisError> {
        let d = days_since_j2000(instant);
        let sun = Self::sun_longitude(d);
        let moon = Self::moon_longitude(d);
        // Elongation from the Sun doubles as the phase angle here:
        // 0° = new, 180° = full, waxing below 180°, waning above.
        let phase_angle = (moon - sun).rem_euclid(360.0);
        let illuminated_fraction = (1.0 - phase_angle.to_radians().cos()) / 2.0;
        let distance_km = Self::moon_distance_km(d);
        if !distance_km.is_finite() || !phase_angle.is_finite() {
            return Err(EphemerisError::ComputationFailed {
                body: Body::Moon,
                instant,
                reason: "non-finite moon state".into(),
            });
        }
        Ok(MoonState {
            illuminated_fraction,
            phase_angle,
            distance_km,
        })
    }
}
