use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::config::ColorConfig;
use crate::error::{PlanetIdError, Result};

/// Per-pixel color bucket. Buckets are mutually exclusive; a pixel may fall
/// in none of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorGroup {
    /// Blue/green hues at moderate saturation.
    Earth,
    /// Pale, bright, low-saturation disk.
    Venus,
    /// Strongly red end of the warm band.
    Red,
    /// The rest of the warm band (tan/ochre).
    Beige,
}

/// Fractions of brightness-filtered pixels per color group.
///
/// Deliberately a plain struct rather than a map: downstream decisions index
/// groups explicitly, and nothing may depend on map iteration order.
/// Fractions are each in [0, 1]; their sum is at most 1, with the remainder
/// being unclassified pixels that count toward the denominator only.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorHistogram {
    pub earth: f64,
    pub venus: f64,
    pub red: f64,
    pub beige: f64,
}

impl ColorHistogram {
    /// Combined Red+Beige fraction, the signature of the Mars/Jupiter/Saturn
    /// family.
    pub fn warm_sum(&self) -> f64 {
        self.red + self.beige
    }
}

/// Bucket every sufficiently bright pixel of the crop by hue/saturation/value.
///
/// The crop is resized to the analysis resolution first. Pixels with summed
/// R+G+B at or below the brightness floor (near-black sky) are excluded from
/// both the counts and the denominator. Returns [`PlanetIdError::DegenerateInput`]
/// when no pixel passes the floor, since no fraction is defined then.
pub fn color_histogram(crop: &RgbImage, config: &ColorConfig) -> Result<ColorHistogram> {
    let size = config.analysis_size;
    let small = imageops::resize(crop, size, size, FilterType::Triangle);

    let mut earth = 0u32;
    let mut venus = 0u32;
    let mut red = 0u32;
    let mut beige = 0u32;
    let mut total = 0u32;

    for pixel in small.pixels() {
        let [r, g, b] = pixel.0;
        if r as u16 + g as u16 + b as u16 <= config.brightness_floor {
            continue;
        }
        total += 1;

        let (h, s, v) = rgb_to_hsv(r, g, b);
        match classify_pixel(h, s, v, config) {
            Some(ColorGroup::Earth) => earth += 1,
            Some(ColorGroup::Venus) => venus += 1,
            Some(ColorGroup::Red) => red += 1,
            Some(ColorGroup::Beige) => beige += 1,
            None => {}
        }
    }

    if total == 0 {
        return Err(PlanetIdError::DegenerateInput);
    }

    let total = total as f64;
    let histogram = ColorHistogram {
        earth: earth as f64 / total,
        venus: venus as f64 / total,
        red: red as f64 / total,
        beige: beige as f64 / total,
    };
    tracing::debug!(?histogram, total, "color histogram");
    Ok(histogram)
}

/// Assign one pixel to a color group, or none.
///
/// Evaluation order matters: Earth and Venus are checked before the warm
/// band, so an ambiguous pixel resolves to the earlier bucket.
pub fn classify_pixel(h: f64, s: f64, v: f64, config: &ColorConfig) -> Option<ColorGroup> {
    let (earth_lo, earth_hi) = config.earth_hue;
    if (earth_lo..=earth_hi).contains(&h) && s > config.earth_min_saturation {
        return Some(ColorGroup::Earth);
    }
    if s < config.venus_max_saturation && v > config.venus_min_value {
        return Some(ColorGroup::Venus);
    }

    let (warm_lo_a, warm_lo_b) = config.warm_hue_low;
    let (warm_hi_a, warm_hi_b) = config.warm_hue_high;
    let in_warm_band =
        (warm_lo_a..=warm_lo_b).contains(&h) || (warm_hi_a..=warm_hi_b).contains(&h);
    if in_warm_band && s > config.warm_min_saturation {
        if h <= config.red_hue_max || h >= config.red_hue_wrap_min {
            return Some(ColorGroup::Red);
        }
        return Some(ColorGroup::Beige);
    }

    None
}

/// Convert an 8-bit RGB triple to HSV with all three components in [0, 1].
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = max;

    if max == min {
        return (0.0, 0.0, v);
    }
    let delta = max - min;
    let s = delta / max;

    let h = if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    let h = (h / 6.0).rem_euclid(1.0);

    (h, s, v)
}
