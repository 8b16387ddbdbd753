//! Sign-transit estimation boundary and the mean-motion default estimator.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use ecliptic_ephemeris::Body;
use ecliptic_zodiac::Sign;

/// How long a body's current sign placement lasts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignTransit {
    /// Estimated total days spent in the sign.
    pub total_days: f64,
    /// Estimated days until the body leaves the sign.
    pub remaining_days: f64,
    /// Human-readable summary.
    pub display: String,
    /// Estimated sign-entry instant.
    pub start: DateTime<Utc>,
    /// Estimated sign-exit instant.
    pub end: DateTime<Utc>,
}

/// External transit-duration collaborator.
///
/// `None` means "unknown", not an error; positions are built either way.
/// The resolver always asks; whether a placement is estimable (for
/// example, during retrograde motion) is the estimator's call.
pub trait TransitEstimator: Send + Sync {
    /// Optionally annotates a placement with its transit duration.
    fn estimate(
        &self,
        body: Body,
        sign: Sign,
        longitude: f64,
        retrograde: bool,
        instant: DateTime<Utc>,
    ) -> Option<SignTransit>;
}

/// Mean geocentric daily motion in degrees/day, used for linear
/// extrapolation of sign entry and exit.
pub fn mean_daily_motion(body: Body) -> f64 {
    match body {
        Body::Moon => 13.176,
        Body::Sun => 0.9856,
        Body::Mercury => 1.383,
        Body::Venus => 1.2,
        Body::Mars => 0.524,
        Body::Jupiter => 0.083,
        Body::Saturn => 0.0334,
        Body::Uranus => 0.0117,
        Body::Neptune => 0.006,
        Body::Pluto => 0.004,
    }
}

/// Default estimator: linear extrapolation from mean daily motion.
///
/// Good to a few days for the fast bodies; slow outer planets get
/// correspondingly coarse estimates. Retrograde placements are
/// unresolved: a forward linear estimate would be misleading while the
/// body moves backward.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanMotionTransits;

impl MeanMotionTransits {
    pub fn new() -> Self {
        Self
    }
}

impl TransitEstimator for MeanMotionTransits {
    fn estimate(
        &self,
        body: Body,
        sign: Sign,
        longitude: f64,
        retrograde: bool,
        instant: DateTime<Utc>,
    ) -> Option<SignTransit> {
        if retrograde {
            return None;
        }
        let speed = mean_daily_motion(body);
        let degrees_in = longitude.rem_euclid(30.0);
        let total_days = 30.0 / speed;
        let elapsed_days = degrees_in / speed;
        let remaining_days = total_days - elapsed_days;
        let start = instant - duration_from_days(elapsed_days)?;
        let end = instant + duration_from_days(remaining_days)?;
        let display = format!("~{:.0} more days in {}", remaining_days, sign);
        Some(SignTransit {
            total_days,
            remaining_days,
            display,
            start,
            end,
        })
    }
}

/// Converts fractional days to a chrono duration, `None` on overflow.
fn duration_from_days(days: f64) -> Option<Duration> {
    let millis = days * 86_400_000.0;
    if millis.is_finite() {
        Some(Duration::milliseconds(millis as i64))
    } else {
        None
    }
}
