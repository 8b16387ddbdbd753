//! Aspect classification integration tests.

use std::collections::BTreeMap;

use approx::assert_relative_eq;
use ecliptic_aspects::{AspectKind, find_aspects};
use ecliptic_ephemeris::Body;

fn longitudes(pairs: &[(Body, f64)]) -> BTreeMap<Body, f64> {
    pairs.iter().copied().collect()
}

#[test]
fn square_within_orb() {
    let lons = longitudes(&[(Body::Sun, 10.0), (Body::Mars, 100.5)]);
    let aspects = find_aspects(&lons);
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Square);
    assert_relative_eq!(aspects[0].separation_degrees, 90.5, epsilon = 1e-12);
}

#[test]
fn exact_opposition() {
    let lons = longitudes(&[(Body::Venus, 15.0), (Body::Pluto, 195.0)]);
    let aspects = find_aspects(&lons);
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Opposition);
    assert_relative_eq!(aspects[0].separation_degrees, 180.0, epsilon = 1e-12);
}

#[test]
fn out_of_orb_pairs_are_dropped() {
    // 45° separation matches nothing.
    let lons = longitudes(&[(Body::Sun, 0.0), (Body::Moon, 45.0)]);
    assert!(find_aspects(&lons).is_empty());
}

#[test]
fn conjunction_across_the_seam() {
    let lons = longitudes(&[(Body::Mercury, 358.0), (Body::Venus, 3.0)]);
    let aspects = find_aspects(&lons);
    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].kind, AspectKind::Conjunction);
    assert_relative_eq!(aspects[0].separation_degrees, 5.0, epsilon = 1e-12);
}

#[test]
fn jupiter_saturn_conjunction_sorts_first() {
    let lons = longitudes(&[
        (Body::Jupiter, 300.0),
        (Body::Saturn, 302.0),
        (Body::Sun, 120.0),
        (Body::Moon, 240.1),
    ]);
    let aspects = find_aspects(&lons);
    assert!(aspects.len() >= 2);
    assert_eq!(aspects[0].kind, AspectKind::Conjunction);
    assert_eq!(
        (aspects[0].body_a, aspects[0].body_b),
        (Body::Jupiter, Body::Saturn)
    );
    assert_eq!(aspects[0].priority, 10);
    for window in aspects.windows(2) {
        assert!(window[0].priority >= window[1].priority);
    }
}

#[test]
fn full_chart_scan_is_quadratic_over_pairs() {
    // Ten bodies 36° apart: every pair is at a multiple of 36°, so only
    // the 72° (none), 108° (none), 144° (none) and 180° (opposition)
    // multiples could classify; 36×5 = 180 hits the opposition band.
    let lons: BTreeMap<Body, f64> = ecliptic_ephemeris::ALL_BODIES
        .iter()
        .enumerate()
        .map(|(i, b)| (*b, i as f64 * 36.0))
        .collect();
    let aspects = find_aspects(&lons);
    assert!(!aspects.is_empty());
    for aspect in &aspects {
        assert_eq!(aspect.kind, AspectKind::Opposition);
        assert_relative_eq!(aspect.separation_degrees, 180.0, epsilon = 1e-9);
    }
}
