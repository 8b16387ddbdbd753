//! # ecliptic-ephemeris
//!
//! The ephemeris boundary of the engine: the [`Body`] catalog (Sun through
//! Pluto), the [`Ephemeris`] provider trait, and [`EphemerisError`].
//!
//! The engine treats the provider as an external collaborator: given a body
//! and an instant it returns a geocentric ecliptic longitude, and for the
//! Moon an illuminated fraction, phase angle, and center distance. Providers
//! are assumed deterministic and pure for a given instant.
//!
//! A built-in low-precision provider, [`AnalyticEphemeris`], implements the
//! trait from mean orbital elements so the workspace is usable without an
//! external ephemeris. Its accuracy is qualitative (degree-level); swap in a
//! real provider behind the same trait for anything better.
//!
//! ## Quick start
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use ecliptic_ephemeris::{AnalyticEphemeris, Body, Ephemeris};
//!
//! let eph = AnalyticEphemeris::new();
//! let t = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
//! let lon = eph.ecliptic_longitude(Body::Sun, t).unwrap();
//! assert!((0.0..360.0).contains(&lon));
//! ```

pub mod analytic;
pub mod body;
pub mod error;
pub mod provider;

pub use analytic::AnalyticEphemeris;
pub use body::{ALL_BODIES, Body};
pub use error::EphemerisError;
pub use provider::{Ephemeris, MoonState};
