//! Resolver integration tests against a scripted ephemeris.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};

use ecliptic_ephemeris::{Body, Ephemeris, EphemerisError, MoonState};
use ecliptic_positions::{MeanMotionTransits, SignTransit, TransitEstimator, resolve_position};
use ecliptic_zodiac::Sign;

/// Replays pre-scripted longitudes keyed by (body, unix seconds).
struct ScriptedEphemeris {
    longitudes: HashMap<(Body, i64), f64>,
}

impl ScriptedEphemeris {
    fn new() -> Self {
        Self {
            longitudes: HashMap::new(),
        }
    }

    /// Scripts samples at `instant`, −24 h, and −48 h (newest first).
    fn with_samples(mut self, body: Body, instant: DateTime<Utc>, samples: [f64; 3]) -> Self {
        for (i, lon) in samples.iter().enumerate() {
            let t = instant.timestamp() - i as i64 * 86_400;
            self.longitudes.insert((body, t), *lon);
        }
        self
    }

    /// Scripts only the instant itself.
    fn with_single(mut self, body: Body, instant: DateTime<Utc>, lon: f64) -> Self {
        self.longitudes.insert((body, instant.timestamp()), lon);
        self
    }
}

impl Ephemeris for ScriptedEphemeris {
    fn ecliptic_longitude(
        &self,
        body: Body,
        instant: DateTime<Utc>,
    ) -> Result<f64, EphemerisError> {
        self.longitudes
            .get(&(body, instant.timestamp()))
            .copied()
            .ok_or_else(|| EphemerisError::ComputationFailed {
                body,
                instant,
                reason: "no scripted sample".into(),
            })
    }

    fn moon_state(&self, instant: DateTime<Utc>) -> Result<MoonState, EphemerisError> {
        Err(EphemerisError::ComputationFailed {
            body: Body::Moon,
            instant,
            reason: "moon state not scripted".into(),
        })
    }
}

/// Estimator that always answers, to observe when the resolver asks.
struct ConstantTransits;

impl TransitEstimator for ConstantTransits {
    fn estimate(
        &self,
        _body: Body,
        sign: Sign,
        _longitude: f64,
        _retrograde: bool,
        instant: DateTime<Utc>,
    ) -> Option<SignTransit> {
        Some(SignTransit {
            total_days: 30.0,
            remaining_days: 10.0,
            display: format!("10 more days in {}", sign),
            start: instant,
            end: instant,
        })
    }
}

/// Estimator that never resolves.
struct UnknownTransits;

impl TransitEstimator for UnknownTransits {
    fn estimate(
        &self,
        _body: Body,
        _sign: Sign,
        _longitude: f64,
        _retrograde: bool,
        _instant: DateTime<Utc>,
    ) -> Option<SignTransit> {
        None
    }
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 1, 6, 0, 0).unwrap()
}

#[test]
fn direct_motion_resolves_with_transit() {
    let eph = ScriptedEphemeris::new().with_samples(Body::Mars, t0(), [46.0, 45.5, 45.0]);
    let pos = resolve_position(&eph, &ConstantTransits, Body::Mars, t0()).unwrap();
    assert_eq!(pos.sign, Sign::Taurus);
    assert_eq!(pos.degree_in_sign, 16);
    assert!(!pos.retrograde);
    assert!(!pos.newly_retrograde);
    assert!(!pos.newly_direct);
    assert!(pos.transit.is_some());
}

#[test]
fn steady_retrograde_sets_only_the_retrograde_flag() {
    let eph = ScriptedEphemeris::new().with_samples(Body::Mercury, t0(), [120.0, 120.4, 120.8]);
    let pos = resolve_position(&eph, &ConstantTransits, Body::Mercury, t0()).unwrap();
    assert!(pos.retrograde);
    assert!(!pos.newly_retrograde);
    assert!(!pos.newly_direct);
}

#[test]
fn station_retrograde_is_flagged_once() {
    // Direct between −48h and −24h, backward since: station retrograde.
    let eph = ScriptedEphemeris::new().with_samples(Body::Saturn, t0(), [200.0, 200.1, 200.05]);
    let pos = resolve_position(&eph, &ConstantTransits, Body::Saturn, t0()).unwrap();
    assert!(pos.retrograde);
    assert!(pos.newly_retrograde);
    assert!(!pos.newly_direct);
}

#[test]
fn station_direct_is_flagged_once() {
    // Backward between −48h and −24h, forward since: station direct.
    let eph = ScriptedEphemeris::new().with_samples(Body::Jupiter, t0(), [310.2, 310.1, 310.15]);
    let pos = resolve_position(&eph, &ConstantTransits, Body::Jupiter, t0()).unwrap();
    assert!(!pos.retrograde);
    assert!(!pos.newly_direct || !pos.newly_retrograde);
    assert!(pos.newly_direct);
}

#[test]
fn mean_motion_leaves_retrograde_transits_unresolved() {
    let eph = ScriptedEphemeris::new().with_samples(Body::Venus, t0(), [88.0, 88.5, 89.0]);
    let pos = resolve_position(&eph, &MeanMotionTransits::new(), Body::Venus, t0()).unwrap();
    assert!(pos.retrograde);
    assert!(pos.transit.is_none());
}

#[test]
fn estimator_is_consulted_for_retrograde_placements() {
    // The resolver asks the estimator regardless of motion direction; one
    // that can resolve retrograde placements gets to annotate them.
    let eph = ScriptedEphemeris::new().with_samples(Body::Venus, t0(), [88.0, 88.5, 89.0]);
    let pos = resolve_position(&eph, &ConstantTransits, Body::Venus, t0()).unwrap();
    assert!(pos.retrograde);
    assert!(pos.transit.is_some());
}

#[test]
fn seam_crossing_direct_is_not_retrograde() {
    let eph = ScriptedEphemeris::new().with_samples(Body::Mars, t0(), [0.2, 359.7, 359.2]);
    let pos = resolve_position(&eph, &ConstantTransits, Body::Mars, t0()).unwrap();
    assert!(!pos.retrograde);
    assert_eq!(pos.sign, Sign::Aries);
}

#[test]
fn sun_skips_motion_sampling() {
    // Only the instant itself is scripted; a prior-day sample would fail,
    // so this passes only if the resolver skips the motion samples.
    let eph = ScriptedEphemeris::new().with_single(Body::Sun, t0(), 15.5);
    let pos = resolve_position(&eph, &UnknownTransits, Body::Sun, t0()).unwrap();
    assert!(!pos.retrograde);
    assert!(pos.transit.is_none());
}

#[test]
fn missing_sample_propagates_computation_failed() {
    let eph = ScriptedEphemeris::new();
    let err = resolve_position(&eph, &UnknownTransits, Body::Pluto, t0()).unwrap_err();
    assert!(matches!(err, EphemerisError::ComputationFailed { body, .. } if body == Body::Pluto));
}

#[test]
fn invariant_ranges_hold() {
    let eph = ScriptedEphemeris::new().with_samples(Body::Mars, t0(), [29.99, 29.5, 29.0]);
    let pos = resolve_position(&eph, &UnknownTransits, Body::Mars, t0()).unwrap();
    assert!((0.0..360.0).contains(&pos.longitude));
    assert!(pos.degree_in_sign < 30);
    assert!(pos.minutes < 60);
    let rebuilt = pos.degree_in_sign as f64 + pos.minutes as f64 / 60.0;
    assert!((rebuilt - pos.longitude.rem_euclid(30.0)).abs() <= 0.5 / 60.0 + 1e-9);
}
