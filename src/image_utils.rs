use std::{fs, io, path::Path};

use image::{ImageError, RgbaImage};
use log::info;

use crate::error::{LocatorError, Result};

/// Decodes the image at `path` into an RGBA pixel grid.
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LocatorError::InputNotFound(path.to_path_buf()));
    }

    match image::open(path) {
        Ok(image) => Ok(image.to_rgba8()),
        Err(ImageError::IoError(err)) if err.kind() == io::ErrorKind::NotFound => {
            Err(LocatorError::InputNotFound(path.to_path_buf()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Encodes `grid` to `path`, replacing any existing file. The format follows the extension.
/// Missing parent directories are created.
pub fn save_grid<P: AsRef<Path>>(grid: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    grid.save(path)?;
    Ok(())
}

/// Writes the grid produced by `generator` to `path` unless a file is already there.
///
/// Returns `true` when the file was created.
pub fn ensure_input_exists<P, F>(path: P, generator: F) -> Result<bool>
where
    P: AsRef<Path>,
    F: FnOnce() -> RgbaImage,
{
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }

    info!("{} not found, generating synthetic input", path.display());
    save_grid(&generator(), path)?;
    Ok(true)
}
