mod common;

use image::Rgb;

use planetid_core::analysis::banding_score;
use planetid_core::config::ColorConfig;

use common::{disk_image, solid_image, striped_image};

#[test]
fn test_uniform_image_scores_exactly_zero() {
    // Both variances are zero; the guard must return 0, not NaN or inf.
    let img = solid_image(100, 100, Rgb([180, 150, 120]));
    let score = banding_score(&img, &ColorConfig::default());
    assert_eq!(score, 0.0);
}

#[test]
fn test_horizontal_stripes_score_high() {
    // Strong row-to-row contrast against a faint column ramp.
    let img = striped_image(100, 100, 0.1, 0.5, 10, 0.4, 0.9);
    let score = banding_score(&img, &ColorConfig::default());
    assert!(score > 1.60, "banding score {score} below belt threshold");
}

#[test]
fn test_symmetric_disk_scores_near_one() {
    // A radially symmetric disk has matching row and column profiles.
    let img = disk_image(100, 100, 50.0, 50.0, 35.0, Rgb([200, 120, 90]));
    let score = banding_score(&img, &ColorConfig::default());
    assert!(
        (0.8..=1.2).contains(&score),
        "disk banding score {score} far from 1"
    );
}

#[test]
fn test_vertical_stripes_score_low() {
    // Transpose of the banded case: column variance dominates.
    let mut img = image::RgbImage::new(100, 100);
    for y in 0..100 {
        for x in 0..100 {
            let v = if (x / 10) % 2 == 0 { 230 } else { 100 };
            // Faint row ramp keeps the numerator nonzero.
            let v = v + (y / 50) as u8;
            img.put_pixel(x, y, Rgb([v, v, v]));
        }
    }
    let score = banding_score(&img, &ColorConfig::default());
    assert!(score < 0.5, "vertical stripes scored {score}");
}
