//! Output path derivation.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use image::ImageError;
use regex::Regex;

use crate::error::GrayscaleError;

/// File name stem and extension of an accepted input.
static INPUT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\\/]+)\.(jpeg|jpg)$").expect("valid input name pattern"));

/// Default directory for converted images.
pub const DEFAULT_OUTPUT_DIR: &str = "./images";

/// Derive where the output of engine `tag` for `input` goes.
///
/// `photos/cat.jpg` with tag `rbr` becomes `<output_dir>/cat_gray_rbr.jpg`.
/// Relative output directories are resolved against the current directory.
/// Inputs that are not `.jpg`/`.jpeg` files are rejected.
pub fn derive_output_path(
    input: &Path,
    output_dir: &Path,
    tag: &str,
) -> Result<PathBuf, GrayscaleError> {
    let input_str = input.to_string_lossy();
    let captures = INPUT_NAME
        .captures(&input_str)
        .ok_or_else(|| GrayscaleError::InvalidPath(input_str.to_string()))?;

    let file_name = format!("{}_gray_{}.{}", &captures[1], tag, &captures[2]);
    let output = output_dir.join(file_name);

    std::path::absolute(&output).map_err(|e| GrayscaleError::Output {
        path: output,
        source: ImageError::IoError(e),
    })
}
