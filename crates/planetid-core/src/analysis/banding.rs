use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::config::ColorConfig;

/// Score horizontal banding on a crop.
///
/// The crop is resized to the square analysis resolution and converted to
/// grayscale. The score is the standard deviation of the per-row mean
/// intensities divided by the standard deviation of the per-column means:
/// belted planets show strong row-to-row variation against weak
/// column-to-column variation, while uniform or radially symmetric disks
/// land near 1. A perfectly flat image has zero column variance; the score
/// is defined as 0 there rather than dividing by zero.
pub fn banding_score(crop: &RgbImage, config: &ColorConfig) -> f64 {
    let size = config.analysis_size;
    let small = imageops::resize(crop, size, size, FilterType::Triangle);
    let gray = imageops::grayscale(&small);

    let n = size as usize;
    let mut row_means = vec![0.0f64; n];
    let mut col_means = vec![0.0f64; n];

    for (x, y, pixel) in gray.enumerate_pixels() {
        let v = pixel.0[0] as f64;
        row_means[y as usize] += v;
        col_means[x as usize] += v;
    }
    for mean in row_means.iter_mut().chain(col_means.iter_mut()) {
        *mean /= n as f64;
    }

    let vertical = stddev(&row_means);
    let horizontal = stddev(&col_means);

    let score = if horizontal == 0.0 {
        0.0
    } else {
        vertical / horizontal
    };
    tracing::debug!(vertical, horizontal, score, "banding");
    score
}

/// Population standard deviation.
fn stddev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if n == 0.0 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    var.sqrt()
}
