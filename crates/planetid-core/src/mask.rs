use image::imageops::{self, FilterType};
use image::RgbImage;
use ndarray::Array2;

use crate::config::MaskConfig;

/// Build the binary foreground mask for blob search.
///
/// The source is resized to a fixed square working resolution so the blob
/// search cost is independent of the source size, converted to grayscale,
/// and thresholded: luminance above `luma_threshold` is foreground. The
/// threshold rejects dim sky background while keeping the planet body and
/// any bright stars.
///
/// Shape is `(height, width)`, row-major.
pub fn foreground_mask(image: &RgbImage, config: &MaskConfig) -> Array2<bool> {
    let size = config.working_size;
    let small = imageops::resize(image, size, size, FilterType::Triangle);
    let gray = imageops::grayscale(&small);

    let mut mask = Array2::from_elem((size as usize, size as usize), false);
    for (x, y, pixel) in gray.enumerate_pixels() {
        mask[[y as usize, x as usize]] = pixel.0[0] > config.luma_threshold;
    }

    tracing::debug!(
        foreground = mask.iter().filter(|&&v| v).count(),
        total = mask.len(),
        "thresholded working mask"
    );

    mask
}
