use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("No source image specified")]
    MissingSource,
    #[error("OUT_DIR is not set (only build scripts can use build_file_cargo)")]
    MissingOutDir,
}

pub type Result<T> = std::result::Result<T, Error>;
