use std::fmt;

use crate::analysis::ColorHistogram;
use crate::config::DecisionConfig;

/// Final classification label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    Earth,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    /// The cascade produced no candidate.
    Unknown,
    /// Decode failure or degenerate input.
    Error,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Label::Earth => "Earth",
            Label::Venus => "Venus",
            Label::Mars => "Mars",
            Label::Jupiter => "Jupiter",
            Label::Saturn => "Saturn",
            Label::Unknown => "Unknown",
            Label::Error => "Error",
        };
        f.write_str(name)
    }
}

/// Combine color fractions, aspect ratio, and banding into ranked candidates.
///
/// The cascade is an explicit ordered chain of guards. Order carries meaning
/// twice over: earlier rules short-circuit later ones (rings beat belts beat
/// redness), and score ties rank by insertion order. It must never be
/// rewritten as iteration over an unordered map.
///
/// Rules, in order:
/// 1. Earth fraction beats both the warm sum and Venus: Earth.
/// 2. Venus fraction beats both the warm sum and Earth: Venus.
/// 3. Warm-dominant sub-cascade, every branch scored from the warm sum:
///    wide bounding box → Saturn; strong banding → Jupiter; red over beige →
///    Mars; moderate banding → Jupiter; otherwise the warm sum splits
///    0.8/0.2 between Mars and Saturn, an empirical prior for the ambiguous
///    beige sphere with neither rings nor belts.
pub fn decide(
    histogram: &ColorHistogram,
    aspect_ratio: f64,
    banding: f64,
    config: &DecisionConfig,
) -> Vec<(Label, f64)> {
    let warm_sum = histogram.warm_sum();
    let mut candidates: Vec<(Label, f64)> = Vec::new();

    if histogram.earth > warm_sum && histogram.earth > histogram.venus {
        candidates.push((Label::Earth, histogram.earth));
    } else if histogram.venus > warm_sum && histogram.venus > histogram.earth {
        candidates.push((Label::Venus, histogram.venus));
    } else if aspect_ratio > config.saturn_aspect {
        candidates.push((Label::Saturn, warm_sum));
    } else if banding > config.jupiter_banding_strong {
        candidates.push((Label::Jupiter, warm_sum));
    } else if histogram.red > histogram.beige {
        candidates.push((Label::Mars, warm_sum));
    } else if banding > config.jupiter_banding_moderate {
        candidates.push((Label::Jupiter, warm_sum));
    } else {
        candidates.push((Label::Mars, warm_sum * config.fallback_mars_share));
        candidates.push((Label::Saturn, warm_sum * config.fallback_saturn_share));
    }

    // Stable sort: equal scores keep cascade insertion order.
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates
}
