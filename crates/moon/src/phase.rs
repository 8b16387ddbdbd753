//! Phase classification bands and naming.

use serde::Serialize;

/// The eight display phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    ThirdQuarter,
    WaningCrescent,
}

impl Phase {
    /// Display name, without the month-specific full-moon naming.
    pub fn name(self) -> &'static str {
        match self {
            Phase::New => "New Moon",
            Phase::WaxingCrescent => "Waxing Crescent",
            Phase::FirstQuarter => "First Quarter",
            Phase::WaxingGibbous => "Waxing Gibbous",
            Phase::Full => "Full Moon",
            Phase::WaningGibbous => "Waning Gibbous",
            Phase::ThirdQuarter => "Third Quarter",
            Phase::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Phase::New => "🌑",
            Phase::WaxingCrescent => "🌒",
            Phase::FirstQuarter => "🌓",
            Phase::WaxingGibbous => "🌔",
            Phase::Full => "🌕",
            Phase::WaningGibbous => "🌖",
            Phase::ThirdQuarter => "🌗",
            Phase::WaningCrescent => "🌘",
        }
    }

    /// Thematic keywords used by content generators downstream.
    pub fn energy(self) -> &'static str {
        match self {
            Phase::New => "new beginnings, intention setting",
            Phase::WaxingCrescent => "growth, building momentum",
            Phase::FirstQuarter => "decisions, taking action",
            Phase::WaxingGibbous => "refinement, persistence",
            Phase::Full => "culmination, heightened emotion",
            Phase::WaningGibbous => "gratitude, sharing",
            Phase::ThirdQuarter => "release, letting go",
            Phase::WaningCrescent => "rest, reflection",
        }
    }

    /// Posting priority, 1..=10. Supermoons are amplified separately.
    pub fn priority(self) -> u8 {
        match self {
            Phase::New | Phase::Full => 8,
            Phase::FirstQuarter | Phase::ThirdQuarter => 6,
            _ => 3,
        }
    }
}

/// Classifies a phase from the rounded illumination percent and phase angle.
///
/// Illumination decides the extremes (≤3% new, ≥97% full) so the bands match
/// what the disc actually looks like; the quarters are taken from the phase
/// angle (90°±5° / 270°±5°); everything else falls into the crescent and
/// gibbous quadrants.
pub fn classify(illumination: u8, phase_angle: f64) -> Phase {
    if illumination <= 3 {
        return Phase::New;
    }
    if illumination >= 97 {
        return Phase::Full;
    }
    let pa = phase_angle.rem_euclid(360.0);
    if (85.0..=95.0).contains(&pa) {
        return Phase::FirstQuarter;
    }
    if (265.0..=275.0).contains(&pa) {
        return Phase::ThirdQuarter;
    }
    if pa < 90.0 {
        Phase::WaxingCrescent
    } else if pa < 180.0 {
        Phase::WaxingGibbous
    } else if pa < 270.0 {
        Phase::WaningGibbous
    } else {
        Phase::WaningCrescent
    }
}

/// True only within ±2° of the four cardinal phase angles.
///
/// Narrower than the display bands above: this marks the "exact" phase day,
/// not the days the disc merely looks new or full.
pub fn is_significant(phase_angle: f64) -> bool {
    let pa = phase_angle.rem_euclid(360.0);
    pa >= 358.0
        || pa <= 2.0
        || (178.0..=182.0).contains(&pa)
        || (88.0..=92.0).contains(&pa)
        || (268.0..=272.0).contains(&pa)
}

/// Traditional North American name for the full moon of a calendar month.
pub fn full_moon_name(month: u32) -> &'static str {
    match month {
        1 => "Wolf Moon",
        2 => "Snow Moon",
        3 => "Worm Moon",
        4 => "Pink Moon",
        5 => "Flower Moon",
        6 => "Strawberry Moon",
        7 => "Buck Moon",
        8 => "Sturgeon Moon",
        9 => "Harvest Moon",
        10 => "Hunter's Moon",
        11 => "Beaver Moon",
        12 => "Cold Moon",
        _ => "Full Moon",
    }
}
