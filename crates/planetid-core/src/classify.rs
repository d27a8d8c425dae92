use image::RgbImage;

use crate::analysis::{banding_score, color_histogram, ColorHistogram};
use crate::config::ClassifierConfig;
use crate::crop::crop_to_blob;
use crate::decision::{decide, Label};
use crate::detection::largest_blob;
use crate::mask::foreground_mask;

/// Result of one classification pass. Built once per call and never mutated;
/// the core keeps no state between calls.
#[derive(Clone, Debug)]
pub struct Classification {
    /// Primary label: the top-ranked candidate, or Unknown/Error.
    pub label: Label,
    /// Score of the primary label, in [0, 1].
    pub score: f64,
    /// All candidates ranked by score descending.
    pub candidates: Vec<(Label, f64)>,
    /// Color-group fractions of the analyzed crop.
    pub histogram: ColorHistogram,
    /// Width/height ratio of the planet crop.
    pub aspect_ratio: f64,
    /// Row-to-column intensity variance ratio of the crop.
    pub banding: f64,
}

impl Classification {
    /// Error result for an image that could not be decoded at all.
    pub fn decode_failure() -> Self {
        Self {
            label: Label::Error,
            score: 0.0,
            candidates: Vec::new(),
            histogram: ColorHistogram::default(),
            aspect_ratio: 0.0,
            banding: 0.0,
        }
    }

    /// Error result for an image whose crop has no bright pixels at all.
    fn degenerate(aspect_ratio: f64) -> Self {
        Self {
            label: Label::Error,
            score: 0.0,
            candidates: Vec::new(),
            histogram: ColorHistogram::default(),
            aspect_ratio,
            banding: 0.0,
        }
    }
}

/// Classify a planet photograph with the default configuration.
///
/// See [`classify_with`].
pub fn classify(image: &RgbImage) -> Classification {
    classify_with(image, &ClassifierConfig::default())
}

/// Classify a planet photograph.
///
/// Runs the full pipeline: working mask → largest blob → crop → banding and
/// color analysis → decision cascade. Every stage is a pure function of its
/// input, so concurrent calls share nothing.
///
/// This never fails: degenerate inputs come back with the [`Label::Error`]
/// label and score 0 rather than an `Err`.
pub fn classify_with(image: &RgbImage, config: &ClassifierConfig) -> Classification {
    let mask = foreground_mask(image, &config.mask);
    let blob = largest_blob(&mask, &config.mask);
    let crop = crop_to_blob(image, blob.as_ref(), &config.mask);

    let banding = banding_score(&crop.image, &config.color);

    let histogram = match color_histogram(&crop.image, &config.color) {
        Ok(h) => h,
        Err(_) => {
            tracing::warn!("no pixel passed the brightness filter");
            return Classification::degenerate(crop.aspect_ratio);
        }
    };

    let candidates = decide(&histogram, crop.aspect_ratio, banding, &config.decision);
    let (label, score) = candidates
        .first()
        .copied()
        .unwrap_or((Label::Unknown, 0.0));

    tracing::debug!(%label, score, "classified");

    Classification {
        label,
        score,
        candidates,
        histogram,
        aspect_ratio: crop.aspect_ratio,
        banding,
    }
}
