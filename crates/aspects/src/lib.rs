//! # ecliptic-aspects
//!
//! Pairwise angular separations between current body longitudes, classified
//! against fixed orb tables into the five major aspects, ordered by
//! priority. Stateless: the caching of aspect lists (keyed by a rounded
//! longitude signature from [`signature`]) lives in the engine crate.
//!
//! ## Quick start
//!
//! ```
//! use std::collections::BTreeMap;
//! use ecliptic_aspects::{AspectKind, find_aspects};
//! use ecliptic_ephemeris::Body;
//!
//! let mut longitudes = BTreeMap::new();
//! longitudes.insert(Body::Sun, 10.0);
//! longitudes.insert(Body::Mars, 100.5);
//! let aspects = find_aspects(&longitudes);
//! assert_eq!(aspects[0].kind, AspectKind::Square);
//! ```

pub mod aspect;
pub mod resolver;

pub use aspect::{Aspect, AspectKind};
pub use resolver::{find_aspects, min_separation, signature};
