use serde::{Deserialize, Serialize};

use crate::consts::{
    ANALYSIS_WORKING_SIZE, BLOB_WORKING_SIZE, BRIGHTNESS_FLOOR, CONFIDENCE_THRESHOLD, CROP_MARGIN,
    EARTH_HUE, EARTH_MIN_SATURATION, FALLBACK_MARS_SHARE, FALLBACK_SATURN_SHARE,
    FOREGROUND_LUMA_THRESHOLD, JUPITER_BANDING_MODERATE, JUPITER_BANDING_STRONG, RED_HUE_MAX,
    RED_HUE_WRAP_MIN, SATURN_ASPECT_THRESHOLD, SEED_SCAN_STRIDE, VENUS_MAX_SATURATION,
    VENUS_MIN_VALUE, WARM_HUE_HIGH, WARM_HUE_LOW, WARM_MIN_SATURATION,
};

/// Parameters for the foreground mask and blob search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Side of the square working image the source is resized to.
    #[serde(default = "default_working_size")]
    pub working_size: u32,
    /// Luminance threshold (8-bit) above which a pixel is foreground.
    #[serde(default = "default_luma_threshold")]
    pub luma_threshold: u8,
    /// Stride of the seed scan over the mask.
    #[serde(default = "default_seed_stride")]
    pub seed_stride: usize,
    /// Margin (source pixels) added around the detected bounding box.
    #[serde(default = "default_crop_margin")]
    pub crop_margin: u32,
}

fn default_working_size() -> u32 {
    BLOB_WORKING_SIZE
}
fn default_luma_threshold() -> u8 {
    FOREGROUND_LUMA_THRESHOLD
}
fn default_seed_stride() -> usize {
    SEED_SCAN_STRIDE
}
fn default_crop_margin() -> u32 {
    CROP_MARGIN
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            working_size: BLOB_WORKING_SIZE,
            luma_threshold: FOREGROUND_LUMA_THRESHOLD,
            seed_stride: SEED_SCAN_STRIDE,
            crop_margin: CROP_MARGIN,
        }
    }
}

/// Hue/saturation/value bucket bounds for the per-pixel color cascade.
/// All hues are in [0, 1]; the tuned values have no derivation beyond
/// performing well on sample photographs, so they live here rather than
/// inline in the classifier.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Side of the square working image for banding and color analysis.
    #[serde(default = "default_analysis_size")]
    pub analysis_size: u32,
    /// Minimum summed R+G+B for a pixel to enter the histogram denominator.
    #[serde(default = "default_brightness_floor")]
    pub brightness_floor: u16,
    /// Inclusive hue range of the Earth group.
    #[serde(default = "default_earth_hue")]
    pub earth_hue: (f64, f64),
    /// Minimum saturation of the Earth group.
    #[serde(default = "default_earth_min_saturation")]
    pub earth_min_saturation: f64,
    /// Maximum saturation of the Venus group.
    #[serde(default = "default_venus_max_saturation")]
    pub venus_max_saturation: f64,
    /// Minimum value of the Venus group.
    #[serde(default = "default_venus_min_value")]
    pub venus_min_value: f64,
    /// Warm hue band, low side.
    #[serde(default = "default_warm_hue_low")]
    pub warm_hue_low: (f64, f64),
    /// Warm hue band wrapping below 1.0.
    #[serde(default = "default_warm_hue_high")]
    pub warm_hue_high: (f64, f64),
    /// Minimum saturation of the warm groups.
    #[serde(default = "default_warm_min_saturation")]
    pub warm_min_saturation: f64,
    /// Warm hues at or below this bound are Red rather than Beige.
    #[serde(default = "default_red_hue_max")]
    pub red_hue_max: f64,
    /// Warm hues at or above this bound (wrapping past 1.0) are Red.
    #[serde(default = "default_red_hue_wrap_min")]
    pub red_hue_wrap_min: f64,
}

fn default_analysis_size() -> u32 {
    ANALYSIS_WORKING_SIZE
}
fn default_brightness_floor() -> u16 {
    BRIGHTNESS_FLOOR
}
fn default_earth_hue() -> (f64, f64) {
    EARTH_HUE
}
fn default_earth_min_saturation() -> f64 {
    EARTH_MIN_SATURATION
}
fn default_venus_max_saturation() -> f64 {
    VENUS_MAX_SATURATION
}
fn default_venus_min_value() -> f64 {
    VENUS_MIN_VALUE
}
fn default_warm_hue_low() -> (f64, f64) {
    WARM_HUE_LOW
}
fn default_warm_hue_high() -> (f64, f64) {
    WARM_HUE_HIGH
}
fn default_warm_min_saturation() -> f64 {
    WARM_MIN_SATURATION
}
fn default_red_hue_max() -> f64 {
    RED_HUE_MAX
}
fn default_red_hue_wrap_min() -> f64 {
    RED_HUE_WRAP_MIN
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            analysis_size: ANALYSIS_WORKING_SIZE,
            brightness_floor: BRIGHTNESS_FLOOR,
            earth_hue: EARTH_HUE,
            earth_min_saturation: EARTH_MIN_SATURATION,
            venus_max_saturation: VENUS_MAX_SATURATION,
            venus_min_value: VENUS_MIN_VALUE,
            warm_hue_low: WARM_HUE_LOW,
            warm_hue_high: WARM_HUE_HIGH,
            warm_min_saturation: WARM_MIN_SATURATION,
            red_hue_max: RED_HUE_MAX,
            red_hue_wrap_min: RED_HUE_WRAP_MIN,
        }
    }
}

/// Thresholds of the decision cascade.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DecisionConfig {
    /// Aspect ratio above which a warm body is Saturn.
    #[serde(default = "default_saturn_aspect")]
    pub saturn_aspect: f64,
    /// Banding score above which a warm body is Jupiter outright.
    #[serde(default = "default_jupiter_banding_strong")]
    pub jupiter_banding_strong: f64,
    /// Banding score above which a beige-dominant body is still Jupiter.
    #[serde(default = "default_jupiter_banding_moderate")]
    pub jupiter_banding_moderate: f64,
    /// Mars share of the warm fraction in the ambiguous-beige fallback.
    #[serde(default = "default_fallback_mars_share")]
    pub fallback_mars_share: f64,
    /// Saturn share of the warm fraction in the ambiguous-beige fallback.
    #[serde(default = "default_fallback_saturn_share")]
    pub fallback_saturn_share: f64,
    /// Score below which callers should solicit a manual label.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
}

fn default_saturn_aspect() -> f64 {
    SATURN_ASPECT_THRESHOLD
}
fn default_jupiter_banding_strong() -> f64 {
    JUPITER_BANDING_STRONG
}
fn default_jupiter_banding_moderate() -> f64 {
    JUPITER_BANDING_MODERATE
}
fn default_fallback_mars_share() -> f64 {
    FALLBACK_MARS_SHARE
}
fn default_fallback_saturn_share() -> f64 {
    FALLBACK_SATURN_SHARE
}
fn default_confidence_threshold() -> f64 {
    CONFIDENCE_THRESHOLD
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            saturn_aspect: SATURN_ASPECT_THRESHOLD,
            jupiter_banding_strong: JUPITER_BANDING_STRONG,
            jupiter_banding_moderate: JUPITER_BANDING_MODERATE,
            fallback_mars_share: FALLBACK_MARS_SHARE,
            fallback_saturn_share: FALLBACK_SATURN_SHARE,
            confidence_threshold: CONFIDENCE_THRESHOLD,
        }
    }
}

/// Full configuration for one classification pass. Changing any value here
/// changes classification outputs and is a versioned behavior change.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub mask: MaskConfig,
    #[serde(default)]
    pub color: ColorConfig,
    #[serde(default)]
    pub decision: DecisionConfig,
}
