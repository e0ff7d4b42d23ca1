//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and imaging errors into a single enum the CLI can
//! render on a per-file basis.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
