//! # ecliptic-positions
//!
//! Builds one immutable [`PlanetPosition`] per body per instant: zodiacal
//! placement from [`ecliptic_zodiac`], motion direction and station flags
//! from three ephemeris samples (the instant, −24 h, −48 h), and an optional
//! sign-transit annotation from a [`TransitEstimator`].
//!
//! ## Architecture
//!
//! ```text
//! resolve_position()
//!   ├─ three longitude samples     (Ephemeris provider)
//!   ├─ motion_between() × 2        (motion.rs, pure)
//!   ├─ sign/degree/minute split    (ecliptic_zodiac)
//!   └─ TransitEstimator::estimate  (transit.rs, always consulted)
//! ```
//!
//! Motion inference is a pure function over longitude samples so the
//! finite-difference math stays testable without an ephemeris.

pub mod motion;
pub mod position;
pub mod resolver;
pub mod transit;

pub use motion::{Motion, motion_between};
pub use position::PlanetPosition;
pub use resolver::resolve_position;
pub use transit::{MeanMotionTransits, SignTransit, TransitEstimator, mean_daily_motion};
