//! # ecliptic-cache
//!
//! The caching substrate shared by the position, Moon, and aspect caches:
//! a key-sharded TTL store ([`TtlCache`]), the expiry-first bounded
//! eviction policy it applies on every write, the per-body TTL policy with
//! boundary dynamic refresh ([`policy`]), and a [`Clock`] abstraction so
//! expiry is deterministic under test.
//!
//! Concurrency model: the store is a `DashMap`, so reads of different keys
//! never contend. Concurrent misses on the same key may both recompute and
//! write; the last writer wins. Values are deterministic functions of the
//! instant in their key, so duplicate computation is wasteful but never
//! incorrect.

pub mod clock;
pub mod policy;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use policy::{aspect_ttl, base_ttl, position_ttl};
pub use store::{CacheStats, TtlCache};
