mod common;

use image::Rgb;

use planetid_core::config::MaskConfig;
use planetid_core::mask::foreground_mask;

use common::{disk_image, solid_image};

#[test]
fn test_mask_has_working_resolution() {
    let img = disk_image(640, 480, 320.0, 240.0, 100.0, Rgb([200, 200, 200]));
    let mask = foreground_mask(&img, &MaskConfig::default());
    assert_eq!(mask.dim(), (200, 200));
}

#[test]
fn test_bright_disk_is_foreground() {
    let img = disk_image(400, 400, 200.0, 200.0, 100.0, Rgb([220, 210, 190]));
    let mask = foreground_mask(&img, &MaskConfig::default());

    let foreground = mask.iter().filter(|&&v| v).count();
    // Disk covers pi * r^2 / (w * h) = ~19.6% of the frame.
    let fraction = foreground as f64 / mask.len() as f64;
    assert!(fraction > 0.15, "foreground fraction {fraction} too small");
    assert!(fraction < 0.25, "foreground fraction {fraction} too large");

    // Mask center lands inside the disk, corners in the sky.
    assert!(mask[[100, 100]]);
    assert!(!mask[[0, 0]]);
    assert!(!mask[[199, 199]]);
}

#[test]
fn test_dim_sky_is_all_background() {
    // Luma well under the 45 threshold.
    let img = solid_image(300, 300, Rgb([20, 20, 20]));
    let mask = foreground_mask(&img, &MaskConfig::default());
    assert!(mask.iter().all(|&v| !v));
}

#[test]
fn test_threshold_boundary_is_exclusive() {
    // Exactly at the threshold stays background; one above is foreground.
    let at = solid_image(200, 200, Rgb([45, 45, 45]));
    let above = solid_image(200, 200, Rgb([46, 46, 46]));
    let config = MaskConfig::default();

    assert!(foreground_mask(&at, &config).iter().all(|&v| !v));
    assert!(foreground_mask(&above, &config).iter().all(|&v| v));
}
