//! Image file decoding and encoding.
//!
//! The engines never touch file bytes; this module turns files into
//! [`Rgba16Image`]s and [`GrayImage`]s back into files.

use std::path::Path;

use image::{GrayImage, ImageError};
use log::debug;

use crate::error::GrayscaleError;
use crate::grayscale::Rgba16Image;

/// Decode the image at `path` into 16-bit normalized RGBA samples.
///
/// 8-bit sources are widened by 257, so 255 maps to 65535.
pub fn decode(path: &Path) -> Result<Rgba16Image, GrayscaleError> {
    let image = image::open(path).map_err(|source| GrayscaleError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image.to_rgba16())
}

/// Write `image` to `path`, creating the parent directory if needed.
///
/// The format follows the file extension.
pub fn encode(image: &GrayImage, path: &Path) -> Result<(), GrayscaleError> {
    let output_error = |source| GrayscaleError::Output {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| output_error(ImageError::IoError(e)))?;
        }
    }

    image.save(path).map_err(output_error)?;
    debug!("Encoded {:?}", path);
    Ok(())
}
