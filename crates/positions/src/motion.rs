//! Finite-difference motion direction from two longitude samples.

/// Apparent motion direction along the ecliptic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Longitude increasing (prograde).
    Direct,
    /// Longitude decreasing (apparent backward motion).
    Retrograde,
}

/// Infers motion direction from an earlier and a later longitude sample.
///
/// The naive rule "current < previous ⇒ retrograde" breaks at the 0°/360°
/// seam: a direct body stepping from 359.8° to 0.3° would look retrograde.
/// Any raw difference above 180° can only be a wrap (no body moves that far
/// in a day), so the comparison is inverted in that case.
pub fn motion_between(previous: f64, current: f64) -> Motion {
    let wrapped = (current - previous).abs() > 180.0;
    let backward = if wrapped {
        current > previous
    } else {
        current < previous
    };
    if backward { Motion::Retrograde } else { Motion::Direct }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_direct_and_retrograde() {
        assert_eq!(motion_between(100.0, 101.0), Motion::Direct);
        assert_eq!(motion_between(101.0, 100.0), Motion::Retrograde);
    }

    #[test]
    fn direct_across_the_seam() {
        // 359.8 -> 0.3 is forward motion despite current < previous.
        assert_eq!(motion_between(359.8, 0.3), Motion::Direct);
    }

    #[test]
    fn retrograde_across_the_seam() {
        // 0.3 -> 359.8 is backward motion despite current > previous.
        assert_eq!(motion_between(0.3, 359.8), Motion::Retrograde);
    }

    #[test]
    fn stationary_sample_counts_as_direct() {
        assert_eq!(motion_between(42.0, 42.0), Motion::Direct);
    }
}
