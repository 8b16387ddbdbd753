//! Pairwise separation scan and longitude signatures.

use std::collections::BTreeMap;

use ecliptic_ephemeris::Body;

use crate::aspect::{Aspect, AspectKind};

/// Minimal angular separation between two longitudes, degrees `[0, 180]`.
pub fn min_separation(a: f64, b: f64) -> f64 {
    let d = (a - b).abs().rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Cache signature for a set of longitudes: body names with longitudes
/// rounded to one decimal, in canonical body order. Positions that agree
/// to 0.1° produce the same signature and can share a cached aspect list.
pub fn signature(longitudes: &BTreeMap<Body, f64>) -> String {
    longitudes
        .iter()
        .map(|(body, lon)| format!("{}:{:.1}", body, lon.rem_euclid(360.0)))
        .collect::<Vec<_>>()
        .join("|")
}

/// Classifies every unordered pair of bodies, ordered by descending
/// priority (ties keep canonical pair order).
///
/// An empty or single-entry map yields an empty list, not an error.
pub fn find_aspects(longitudes: &BTreeMap<Body, f64>) -> Vec<Aspect> {
    let entries: Vec<(Body, f64)> = longitudes.iter().map(|(b, l)| (*b, *l)).collect();
    let mut aspects = Vec::new();
    for (i, &(body_a, lon_a)) in entries.iter().enumerate() {
        for &(body_b, lon_b) in &entries[i + 1..] {
            let separation = min_separation(lon_a, lon_b);
            if let Some(kind) = AspectKind::classify(separation) {
                aspects.push(Aspect {
                    body_a,
                    body_b,
                    kind,
                    separation_degrees: separation,
                    priority: Aspect::priority_for(kind, body_a, body_b),
                });
            }
        }
    }
    aspects.sort_by(|a, b| b.priority.cmp(&a.priority));
    aspects
}
