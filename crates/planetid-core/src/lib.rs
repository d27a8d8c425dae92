pub mod analysis;
pub mod classify;
pub mod config;
pub mod consts;
pub mod crop;
pub mod decision;
pub mod detection;
pub mod error;
pub mod io;
pub mod mask;

pub use classify::{classify, classify_with, Classification};
pub use config::ClassifierConfig;
pub use decision::Label;
