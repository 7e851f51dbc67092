//! RGBA16 to 8-bit grayscale conversion using ITU-R BT.601 luminance weights.

/// Convert one pixel's 16-bit normalized channels to an 8-bit gray level.
///
/// The luminance formula is: Y = (0.299*R + 0.587*G + 0.114*B) / 256
///
/// The divisor rescales 16-bit samples (0-65535) down to 0-255. The result
/// is truncated, not rounded, and never needs clamping because the weights
/// sum to 1.0. Every engine goes through this function, which is what makes
/// their outputs comparable pixel-for-pixel.
///
/// # Arguments
/// * `r`, `g`, `b` - Channel samples in the 0-65535 range
///
/// # Returns
/// The gray level (0-255)
#[inline]
pub fn luminance(r: u16, g: u16, b: u16) -> u8 {
    ((0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 256.0) as u8
}

/// Convert one row of interleaved RGBA16 samples into gray levels.
///
/// Alpha is ignored; the output carries an implicit opaque alpha.
pub(crate) fn render_row(samples: &[u16], out: &mut [u8]) {
    debug_assert_eq!(samples.len(), out.len() * 4);
    for (rgba, gray) in samples.chunks_exact(4).zip(out.iter_mut()) {
        *gray = luminance(rgba[0], rgba[1], rgba[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_white() {
        assert_eq!(luminance(65535, 65535, 65535), 255);
    }

    #[test]
    fn test_luminance_black() {
        assert_eq!(luminance(0, 0, 0), 0);
    }

    #[test]
    fn test_luminance_pure_red() {
        // 0.299 * 65535 / 256 = 76.54
        assert_eq!(luminance(65535, 0, 0), 76);
    }

    #[test]
    fn test_luminance_pure_green_and_blue() {
        // 0.587 * 65535 / 256 = 150.27, 0.114 * 65535 / 256 = 29.18
        assert_eq!(luminance(0, 65535, 0), 150);
        assert_eq!(luminance(0, 0, 65535), 29);
    }

    #[test]
    fn test_luminance_truncates() {
        // 8-bit 128 widened to 16 bits is 128 * 257 = 32896.
        // 32896 / 256 = 128.5 on every channel, truncated to 128.
        assert_eq!(luminance(32896, 32896, 32896), 128);
    }

    #[test]
    fn test_render_row_ignores_alpha() {
        let samples = [65535, 65535, 65535, 0, 0, 0, 0, 65535, 65535, 0, 0, 12345];
        let mut out = [0u8; 3];
        render_row(&samples, &mut out);
        assert_eq!(out, [255, 0, 76]);
    }
}
