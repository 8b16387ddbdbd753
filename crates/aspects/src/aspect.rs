//! Aspect kinds, orb tables, and the classified-pair record.

use serde::Serialize;

use ecliptic_ephemeris::Body;

/// The five major aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    /// Exact aspect angle in degrees.
    pub fn angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    /// Allowed deviation from the exact angle, degrees.
    pub fn orb(self) -> f64 {
        match self {
            AspectKind::Sextile => 6.0,
            _ => 8.0,
        }
    }

    /// Base priority before participant bonuses.
    pub fn base_priority(self) -> u8 {
        match self {
            AspectKind::Conjunction => 8,
            AspectKind::Opposition => 7,
            AspectKind::Square => 6,
            AspectKind::Trine => 5,
            AspectKind::Sextile => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
        }
    }

    /// Classifies a minimal separation (degrees, `[0, 180]`).
    ///
    /// The orb bands of the five aspects do not overlap, so at most one
    /// kind matches. Conjunction is an under-8° band rather than ±8°
    /// because separation cannot go below zero.
    pub fn classify(separation: f64) -> Option<AspectKind> {
        if separation < AspectKind::Conjunction.orb() {
            return Some(AspectKind::Conjunction);
        }
        for kind in [
            AspectKind::Sextile,
            AspectKind::Square,
            AspectKind::Trine,
            AspectKind::Opposition,
        ] {
            if (separation - kind.angle()).abs() <= kind.orb() {
                return Some(kind);
            }
        }
        None
    }
}

impl std::fmt::Display for AspectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified pair of bodies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aspect {
    pub body_a: Body,
    pub body_b: Body,
    pub kind: AspectKind,
    /// Minimal angular separation, degrees `[0, 180]`.
    pub separation_degrees: f64,
    /// Ordering priority, 1..=10. The social-planet pairs score highest:
    /// a Jupiter-Saturn conjunction reaches 10.
    pub priority: u8,
}

impl Aspect {
    /// Priority for a classified pair: the kind's base, plus one per
    /// Jupiter/Saturn participant, capped at 10.
    pub(crate) fn priority_for(kind: AspectKind, a: Body, b: Body) -> u8 {
        let bonus = [a, b]
            .iter()
            .filter(|body| matches!(body, Body::Jupiter | Body::Saturn))
            .count() as u8;
        (kind.base_priority() + bonus).min(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_exact_angles() {
        assert_eq!(AspectKind::classify(0.0), Some(AspectKind::Conjunction));
        assert_eq!(AspectKind::classify(60.0), Some(AspectKind::Sextile));
        assert_eq!(AspectKind::classify(90.0), Some(AspectKind::Square));
        assert_eq!(AspectKind::classify(120.0), Some(AspectKind::Trine));
        assert_eq!(AspectKind::classify(180.0), Some(AspectKind::Opposition));
    }

    #[test]
    fn classify_orb_edges() {
        assert_eq!(AspectKind::classify(7.99), Some(AspectKind::Conjunction));
        assert_eq!(AspectKind::classify(8.0), None);
        assert_eq!(AspectKind::classify(66.0), Some(AspectKind::Sextile));
        assert_eq!(AspectKind::classify(66.1), None);
        assert_eq!(AspectKind::classify(98.0), Some(AspectKind::Square));
        assert_eq!(AspectKind::classify(112.0), Some(AspectKind::Trine));
        assert_eq!(AspectKind::classify(172.0), Some(AspectKind::Opposition));
        assert_eq!(AspectKind::classify(150.0), None);
    }

    #[test]
    fn jupiter_saturn_conjunction_scores_highest() {
        let p = Aspect::priority_for(AspectKind::Conjunction, Body::Jupiter, Body::Saturn);
        assert_eq!(p, 10);
        let q = Aspect::priority_for(AspectKind::Conjunction, Body::Sun, Body::Moon);
        assert!(p > q);
    }

    #[test]
    fn priority_caps_at_ten() {
        let p = Aspect::priority_for(AspectKind::Opposition, Body::Jupiter, Body::Saturn);
        assert!(p <= 10);
    }
}
