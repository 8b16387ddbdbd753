//! # ecliptic-engine
//!
//! The process-wide cache service. One [`AstroEngine`] owns the three
//! stores — per-body positions, Moon data, aspect lists — and is passed by
//! handle to callers; there are no module-level singletons. Each entry
//! point consults its cache, recomputes on miss/expiry, and stores the
//! result under a freshly computed TTL:
//!
//! - positions: per-body base TTL from the policy table, quartered inside
//!   the sign-boundary band;
//! - Moon data: the record's own `optimal_cache_ttl_secs`, which lands on
//!   the next visible percentage change;
//! - aspects: fixed one-hour TTL keyed by a rounded longitude signature.
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use chrono::Utc;
//! use ecliptic_engine::AstroEngine;
//! use ecliptic_ephemeris::AnalyticEphemeris;
//! use ecliptic_positions::MeanMotionTransits;
//!
//! let engine = AstroEngine::new(
//!     Arc::new(AnalyticEphemeris::new()),
//!     Arc::new(MeanMotionTransits::new()),
//! );
//! let positions = engine.positions(Utc::now()).unwrap();
//! assert_eq!(positions.len(), 10);
//! ```

pub mod service;

pub use service::{AstroEngine, EngineCacheStats};

// Caller-facing helper formatters, re-exported so consumers need only
// this crate.
pub use ecliptic_moon::{format_cache_info, format_supermoon_info};
pub use ecliptic_zodiac::format_degree_minutes;
