//! Assembles a [`PlanetPosition`] from ephemeris samples.

use chrono::{DateTime, Duration, Utc};
use tracing::trace;

use ecliptic_ephemeris::{Body, Ephemeris, EphemerisError};
use ecliptic_zodiac::{Sign, degree_in_sign, minutes_in_degree};

use crate::motion::{Motion, motion_between};
use crate::position::PlanetPosition;
use crate::transit::TransitEstimator;

/// Resolves a body's position at an instant.
///
/// Samples the ephemeris at the instant, −24 h, and −48 h. The two day-apart
/// sample pairs give the current and the previous motion direction; a station
/// is the sample where they disagree. Bodies that never appear retrograde
/// (Sun, Moon) skip the extra sampling; note this also means a provider
/// failure confined to the prior-day instants goes unnoticed for them.
///
/// The transit estimator is consulted for every placement, retrograde
/// included; whether a retrograde placement is estimable is the
/// estimator's decision.
///
/// # Errors
///
/// Propagates [`EphemerisError`] unchanged if any sample fails. No synthetic
/// data is substituted: the computation succeeds or fails atomically.
pub fn resolve_position(
    ephemeris: &dyn Ephemeris,
    transits: &dyn TransitEstimator,
    body: Body,
    instant: DateTime<Utc>,
) -> Result<PlanetPosition, EphemerisError> {
    let longitude = ephemeris.ecliptic_longitude(body, instant)?;

    let (current, earlier) = if body.always_direct() {
        (Motion::Direct, Motion::Direct)
    } else {
        let prev = ephemeris.ecliptic_longitude(body, instant - Duration::hours(24))?;
        let prev2 = ephemeris.ecliptic_longitude(body, instant - Duration::hours(48))?;
        (motion_between(prev, longitude), motion_between(prev2, prev))
    };

    let retrograde = current == Motion::Retrograde;
    let newly_retrograde = retrograde && earlier == Motion::Direct;
    let newly_direct = !retrograde && earlier == Motion::Retrograde;

    let sign = Sign::from_longitude(longitude);
    let transit = transits.estimate(body, sign, longitude, retrograde, instant);

    trace!(
        body = %body,
        longitude,
        %sign,
        retrograde,
        newly_retrograde,
        newly_direct,
        "resolved position"
    );

    Ok(PlanetPosition {
        body,
        longitude,
        sign,
        degree_in_sign: degree_in_sign(longitude),
        minutes: minutes_in_degree(longitude),
        retrograde,
        newly_retrograde,
        newly_direct,
        transit,
    })
}
