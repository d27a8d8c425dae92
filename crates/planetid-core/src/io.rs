use std::path::Path;

use image::RgbImage;

use crate::error::Result;

/// Decode an image file into 8-bit RGB.
///
/// Decoding stays outside [`crate::classify`]: the pipeline itself never
/// touches the filesystem, so callers decode first and decide what a decode
/// failure means for them.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path)?;
    Ok(img.to_rgb8())
}
