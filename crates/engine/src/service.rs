//! The engine service and its three caches.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use ecliptic_aspects::{Aspect, find_aspects, signature};
use ecliptic_cache::{Clock, SystemClock, TtlCache, aspect_ttl, position_ttl};
use ecliptic_ephemeris::{ALL_BODIES, Body, Ephemeris, EphemerisError};
use ecliptic_moon::{MoonData, compute_moon_data};
use ecliptic_positions::{PlanetPosition, TransitEstimator, resolve_position};

/// Position cache key: body plus the instant floored to the second.
/// Positions are deterministic functions of the instant, so
/// second-granularity keying is safe.
type PositionKey = (Body, i64);

/// Per-store statistics snapshot.
#[derive(Debug, Clone, Copy)]
pub struct EngineCacheStats {
    pub positions: ecliptic_cache::CacheStats,
    pub moon: ecliptic_cache::CacheStats,
    pub aspects: ecliptic_cache::CacheStats,
}

/// The shared cache service.
///
/// Construct one per process and hand out references (or wrap in an `Arc`);
/// all methods take `&self` and the stores are key-sharded internally, so
/// readers of different keys never contend.
pub struct AstroEngine {
    ephemeris: Arc<dyn Ephemeris>,
    transits: Arc<dyn TransitEstimator>,
    clock: Arc<dyn Clock>,
    positions: TtlCache<PositionKey, PlanetPosition>,
    moon: TtlCache<i64, MoonData>,
    aspects: TtlCache<String, Vec<Aspect>>,
}

impl AstroEngine {
    /// Creates an engine on the wall clock.
    pub fn new(ephemeris: Arc<dyn Ephemeris>, transits: Arc<dyn TransitEstimator>) -> Self {
        Self::with_clock(ephemeris, transits, Arc::new(SystemClock))
    }

    /// Creates an engine with an explicit time source (tests use a
    /// manually advanced clock to exercise expiry).
    pub fn with_clock(
        ephemeris: Arc<dyn Ephemeris>,
        transits: Arc<dyn TransitEstimator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            ephemeris,
            transits,
            clock,
            positions: TtlCache::new(),
            moon: TtlCache::new(),
            aspects: TtlCache::new(),
        }
    }

    /// Position of one body at an instant, cached per (body, second).
    ///
    /// # Errors
    ///
    /// Propagates [`EphemerisError`] from the provider; nothing partial is
    /// cached on failure.
    pub fn position(
        &self,
        body: Body,
        instant: DateTime<Utc>,
    ) -> Result<PlanetPosition, EphemerisError> {
        let key = (body, instant.timestamp());
        let now = self.clock.now();
        if let Some(hit) = self.positions.get(&key, now) {
            return Ok(hit);
        }
        let position = resolve_position(
            self.ephemeris.as_ref(),
            self.transits.as_ref(),
            body,
            instant,
        )?;
        let ttl = position_ttl(body, position.degree_in_sign);
        debug!(
            body = %body,
            degree_in_sign = position.degree_in_sign,
            ttl_secs = ttl.num_seconds(),
            "position cache miss, stored"
        );
        self.positions.insert(key, position.clone(), ttl, now);
        Ok(position)
    }

    /// Positions of all ten bodies at an instant.
    pub fn positions(
        &self,
        instant: DateTime<Utc>,
    ) -> Result<BTreeMap<Body, PlanetPosition>, EphemerisError> {
        ALL_BODIES
            .iter()
            .map(|&body| Ok((body, self.position(body, instant)?)))
            .collect()
    }

    /// Moon illumination data, cached per minute with the record's own
    /// next-percent TTL.
    pub fn moon(&self, instant: DateTime<Utc>) -> Result<MoonData, EphemerisError> {
        let key = instant.timestamp().div_euclid(60);
        let now = self.clock.now();
        if let Some(hit) = self.moon.get(&key, now) {
            return Ok(hit);
        }
        let data = compute_moon_data(self.ephemeris.as_ref(), instant)?;
        let ttl = Duration::milliseconds((data.optimal_cache_ttl_secs * 1_000.0) as i64);
        debug!(
            illumination = data.illumination,
            ttl_secs = data.optimal_cache_ttl_secs,
            "moon cache miss, stored"
        );
        self.moon.insert(key, data.clone(), ttl, now);
        Ok(data)
    }

    /// Aspect list for a set of positions, cached for one hour under a
    /// rounded longitude signature. Never fails: an empty position map
    /// yields an empty list.
    pub fn aspects(&self, positions: &BTreeMap<Body, PlanetPosition>) -> Vec<Aspect> {
        let longitudes: BTreeMap<Body, f64> = positions
            .iter()
            .map(|(body, pos)| (*body, pos.longitude))
            .collect();
        let key = signature(&longitudes);
        let now = self.clock.now();
        if let Some(hit) = self.aspects.get(&key, now) {
            return hit;
        }
        let aspects = find_aspects(&longitudes);
        debug!(count = aspects.len(), "aspect cache miss, stored");
        self.aspects.insert(key, aspects.clone(), aspect_ttl(), now);
        aspects
    }

    /// Statistics for all three stores.
    pub fn cache_stats(&self) -> EngineCacheStats {
        EngineCacheStats {
            positions: self.positions.stats(),
            moon: self.moon.stats(),
            aspects: self.aspects.stats(),
        }
    }
}
