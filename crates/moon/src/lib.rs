//! # ecliptic-moon
//!
//! Moon illumination metrics for one instant: illuminated percentage, phase
//! angle and age, Earth-Moon distance with super/micro-moon classification,
//! and angular size. The smart cache additionally depends on the modeled
//! rate of illumination change and the seconds until the displayed whole
//! percent next ticks over.
//!
//! ## Architecture
//!
//! ```text
//! compute_moon_data()
//!   ├─ MoonState                    (Ephemeris provider)
//!   ├─ classify()/full_moon_name()  (phase.rs)
//!   ├─ change_rate_per_hour()       (rate.rs, heuristic)
//!   └─ next_percentage_in_secs()    (rate.rs)
//! ```
//!
//! The rate model is deliberately a caching heuristic, not an ephemeris:
//! see [`rate`] for its shape and bounds.

pub mod data;
pub mod engine;
pub mod format;
pub mod phase;
pub mod rate;

pub use data::{MoonData, Trend};
pub use engine::compute_moon_data;
pub use format::{format_cache_info, format_supermoon_info};
pub use phase::{Phase, classify, full_moon_name, is_significant};
pub use rate::{change_rate_per_hour, next_percentage_in_secs, optimal_cache_ttl_secs};

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Reference perigee distance, kilometers.
pub const PERIGEE_KM: f64 = 356_500.0;

/// Reference apogee distance, kilometers.
pub const APOGEE_KM: f64 = 406_700.0;

/// Super/micro-moon band: 10% of the perigee-apogee span. The perigee-side
/// and apogee-side bands cannot overlap, so a Moon is never both.
pub const DISTANCE_BAND_KM: f64 = (APOGEE_KM - PERIGEE_KM) * 0.1;

/// Volumetric mean radius of the Moon, kilometers.
pub const MOON_RADIUS_KM: f64 = 1_737.4;
