use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("Image loading error: {0}")]
    ImageLoad(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input image not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, LocatorError>;
