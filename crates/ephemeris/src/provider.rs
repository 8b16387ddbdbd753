//! The ephemeris provider trait and its Moon-state record.

use chrono::{DateTime, Utc};

use crate::body::Body;
use crate::error::EphemerisError;

/// Moon state needed for illumination metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonState {
    /// Illuminated fraction of the disc, `[0, 1]`.
    pub illuminated_fraction: f64,
    /// Phase angle in degrees, `[0, 360)`: 0 = new, 180 = full.
    pub phase_angle: f64,
    /// Earth-Moon center distance in kilometers.
    pub distance_km: f64,
}

/// An ephemeris provider: geocentric ecliptic state for a body at an instant.
///
/// Implementations must be deterministic and pure for a given instant; the
/// caching layers above rely on "same instant ⇒ same result" to tolerate
/// duplicate recomputation under concurrency.
pub trait Ephemeris: Send + Sync {
    /// Geocentric ecliptic longitude in degrees, `[0, 360)`.
    fn ecliptic_longitude(&self, body: Body, instant: DateTime<Utc>)
    -> Result<f64, EphemerisError>;

    /// Moon illumination and distance state.
    fn moon_state(&self, instant: DateTime<Utc>) -> Result<MoonState, EphemerisError>;
}
