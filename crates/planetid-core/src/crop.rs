use image::imageops;
use image::RgbImage;

use crate::config::MaskConfig;
use crate::detection::Blob;

/// A crop around the detected planet, plus its width/height ratio.
#[derive(Clone, Debug)]
pub struct CropResult {
    pub image: RgbImage,
    /// Crop width divided by crop height. 1.0 when no blob was found or the
    /// crop height degenerates to 0.
    pub aspect_ratio: f64,
}

/// Crop the source image to the detected blob's bounding box.
///
/// The bounding box lives in working-mask coordinates; it is scaled back to
/// source resolution with independent per-axis factors, padded by a fixed
/// margin, and clamped to the source bounds. Without a blob the source is
/// returned unchanged with aspect ratio 1.0.
pub fn crop_to_blob(image: &RgbImage, blob: Option<&Blob>, config: &MaskConfig) -> CropResult {
    let blob = match blob {
        Some(b) => b,
        None => {
            return CropResult {
                image: image.clone(),
                aspect_ratio: 1.0,
            }
        }
    };

    let (src_w, src_h) = image.dimensions();
    let scale_x = src_w as f64 / config.working_size as f64;
    let scale_y = src_h as f64 / config.working_size as f64;

    let (bx1, by1, bx2, by2) = blob.bbox;
    let left = (bx1 as f64 * scale_x) as u32;
    let top = (by1 as f64 * scale_y) as u32;
    let right = (bx2 as f64 * scale_x) as u32;
    let bottom = (by2 as f64 * scale_y) as u32;

    let margin = config.crop_margin;
    let left = left.saturating_sub(margin);
    let top = top.saturating_sub(margin);
    let right = (right + margin).min(src_w);
    let bottom = (bottom + margin).min(src_h);

    let width = right.saturating_sub(left);
    let height = bottom.saturating_sub(top);

    let cropped = imageops::crop_imm(image, left, top, width, height).to_image();
    let aspect_ratio = if height > 0 {
        width as f64 / height as f64
    } else {
        1.0
    };

    tracing::debug!(left, top, width, height, aspect_ratio, "cropped to blob");

    CropResult {
        image: cropped,
        aspect_ratio,
    }
}
