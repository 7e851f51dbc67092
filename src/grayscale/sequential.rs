//! Single-threaded baseline engine.

use image::GrayImage;

use super::luma::render_row;
use super::types::{allocate_output, input_row, EngineError, Rgba16Image};

/// Convert `input` to grayscale on the calling thread, in raster order.
///
/// Zero width or height is a no-op that returns an empty image of the same
/// dimensions.
pub fn transform(input: &Rgba16Image) -> Result<GrayImage, EngineError> {
    let mut output = allocate_output(input)?;
    let width = input.width() as usize;
    if width == 0 || input.height() == 0 {
        return Ok(output);
    }

    for (y, row) in output.chunks_exact_mut(width).enumerate() {
        render_row(input_row(input, y), row);
    }

    Ok(output)
}
