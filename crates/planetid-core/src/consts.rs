/// Side length (pixels) of the square working image used for blob search.
pub const BLOB_WORKING_SIZE: u32 = 200;

/// Side length (pixels) of the square working image used for banding and
/// color analysis.
pub const ANALYSIS_WORKING_SIZE: u32 = 100;

/// Luminance threshold separating planet/star foreground from sky background
/// in the 8-bit working image.
pub const FOREGROUND_LUMA_THRESHOLD: u8 = 45;

/// Stride (pixels) of the seed scan over the working mask. Flood fill from a
/// found seed visits every connected pixel, so component membership stays
/// exact; only components with no pixel on the stride grid are missed. This
/// is an accepted resolution limit of the detector.
pub const SEED_SCAN_STRIDE: usize = 2;

/// Margin (pixels, source resolution) added on all sides of the detected
/// bounding box before cropping.
pub const CROP_MARGIN: u32 = 5;

/// Minimum summed R+G+B for a pixel to count toward the color histogram.
/// Filters near-black sky pixels out of the denominator.
pub const BRIGHTNESS_FLOOR: u16 = 40;

/// Hue range classified as the Earth group (blue/green), inclusive.
pub const EARTH_HUE: (f64, f64) = (0.28, 0.75);

/// Minimum saturation for the Earth group.
pub const EARTH_MIN_SATURATION: f64 = 0.15;

/// Maximum saturation for the Venus group (pale, washed-out disk).
pub const VENUS_MAX_SATURATION: f64 = 0.20;

/// Minimum value (brightness) for the Venus group.
pub const VENUS_MIN_VALUE: f64 = 0.65;

/// Warm hue band, low side, inclusive.
pub const WARM_HUE_LOW: (f64, f64) = (0.0, 0.18);

/// Warm hue band wrapping past 1.0, inclusive.
pub const WARM_HUE_HIGH: (f64, f64) = (0.94, 1.0);

/// Minimum saturation for the warm (Red/Beige) groups.
pub const WARM_MIN_SATURATION: f64 = 0.10;

/// Within the warm band, hues at or below this (or at/above
/// [`RED_HUE_WRAP_MIN`]) count as Red; the rest as Beige.
pub const RED_HUE_MAX: f64 = 0.045;

/// Lower bound of the wrapped red hue range near 1.0.
pub const RED_HUE_WRAP_MIN: f64 = 0.98;

/// Aspect ratio above which a warm-dominant body is called Saturn (rings).
pub const SATURN_ASPECT_THRESHOLD: f64 = 1.30;

/// Banding score above which a warm-dominant body is called Jupiter outright.
pub const JUPITER_BANDING_STRONG: f64 = 1.60;

/// Banding score above which a beige-dominant body is still called Jupiter.
pub const JUPITER_BANDING_MODERATE: f64 = 1.25;

/// Share of the warm fraction given to Mars in the ambiguous-beige fallback.
/// The 0.8/0.2 split is an empirical prior (ringless Saturn is rare); the
/// remainder goes to Saturn.
pub const FALLBACK_MARS_SHARE: f64 = 0.8;

/// Share of the warm fraction given to Saturn in the ambiguous-beige fallback.
pub const FALLBACK_SATURN_SHARE: f64 = 0.2;

/// Score below which the presentation layer should treat the verdict as
/// uncertain and solicit a manual label.
pub const CONFIDENCE_THRESHOLD: f64 = 0.40;
