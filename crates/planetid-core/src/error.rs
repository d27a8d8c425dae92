use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanetIdError {
    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Degenerate input: no pixel passed the brightness filter")]
    DegenerateInput,
}

pub type Result<T> = std::result::Result<T, PlanetIdError>;
