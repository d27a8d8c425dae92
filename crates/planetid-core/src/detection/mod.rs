pub mod blob;

pub use blob::{largest_blob, Blob};
