//! The immutable per-body position record.

use serde::Serialize;

use ecliptic_ephemeris::Body;
use ecliptic_zodiac::Sign;

use crate::transit::SignTransit;

/// A body's zodiacal position at one instant.
///
/// Constructed by [`crate::resolve_position`] on cache miss, never mutated;
/// the caches replace whole records on recompute.
///
/// Invariant: `degree_in_sign + minutes/60 ≈ longitude mod 30` within
/// rounding, and `longitude ∈ [0, 360)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetPosition {
    /// The body this record describes.
    pub body: Body,
    /// Geocentric ecliptic longitude in degrees, `[0, 360)`.
    pub longitude: f64,
    /// Zodiac sign containing `longitude`.
    pub sign: Sign,
    /// Whole degrees within the sign, `0..30`.
    pub degree_in_sign: u8,
    /// Arc minutes within the degree, `0..60`.
    pub minutes: u8,
    /// True while apparent motion is backward.
    pub retrograde: bool,
    /// True only on the sample where motion turned backward (station).
    pub newly_retrograde: bool,
    /// True only on the sample where motion turned forward again.
    pub newly_direct: bool,
    /// Sign-transit annotation; `None` means the estimator could not
    /// resolve it, which is not an error.
    pub transit: Option<SignTransit>,
}

impl PlanetPosition {
    /// `D°MM′` display string for this position.
    pub fn degree_minutes(&self) -> String {
        ecliptic_zodiac::format_degree_minutes(self.longitude)
    }
}
