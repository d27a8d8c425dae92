#![allow(dead_code)]

use image::{Rgb, RgbImage};

/// Convert HSV (all in [0, 1]) to an 8-bit RGB pixel.
pub fn hsv_pixel(h: f64, s: f64, v: f64) -> Rgb<u8> {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb([
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    ])
}

/// Solid-color image.
pub fn solid_image(width: u32, height: u32, color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, color)
}

/// A filled disk of the given color on a black background.
pub fn disk_image(
    width: u32,
    height: u32,
    cx: f64,
    cy: f64,
    radius: f64,
    color: Rgb<u8>,
) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    paint_disk(&mut img, cx, cy, radius, color);
    img
}

/// Paint a filled disk into an existing image.
pub fn paint_disk(img: &mut RgbImage, cx: f64, cy: f64, radius: f64, color: Rgb<u8>) {
    for y in 0..img.height() {
        for x in 0..img.width() {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if (dx * dx + dy * dy).sqrt() <= radius {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// A filled axis-aligned rectangle of the given color on a black background.
/// `x1`/`y1` are exclusive.
pub fn rect_image(
    width: u32,
    height: u32,
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
    color: Rgb<u8>,
) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for y in y0..y1.min(height) {
        for x in x0..x1.min(width) {
            img.put_pixel(x, y, color);
        }
    }
    img
}

/// A full-frame image with a fixed hue/saturation whose value alternates in
/// horizontal stripes, plus a faint column-wise value ramp.
///
/// The ramp keeps the column-mean deviation nonzero (a perfectly striped
/// image would otherwise divide zero by zero in the banding score) while
/// staying far smaller than the stripe amplitude, so the row/column variance
/// ratio is large.
pub fn striped_image(
    width: u32,
    height: u32,
    hue: f64,
    saturation: f64,
    stripe_height: u32,
    value_lo: f64,
    value_hi: f64,
) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for y in 0..height {
        let stripe_value = if (y / stripe_height) % 2 == 0 {
            value_hi
        } else {
            value_lo
        };
        for x in 0..width {
            let ramp = 0.02 * x as f64 / width as f64;
            let v = (stripe_value + ramp).min(1.0);
            img.put_pixel(x, y, hsv_pixel(hue, saturation, v));
        }
    }
    img
}
