pub mod banding;
pub mod color;

pub use banding::banding_score;
pub use color::{color_histogram, ColorGroup, ColorHistogram};
