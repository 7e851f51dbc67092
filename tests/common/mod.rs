//! Shared fixtures for integration tests.

#![allow(dead_code)]

use image::{Rgb, RgbImage, Rgba};
use image_grayscale::grayscale::Rgba16Image;
use std::path::{Path, PathBuf};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic image whose rows differ in content and cost nothing to build.
pub fn gradient(width: u32, height: u32) -> Rgba16Image {
    Rgba16Image::from_fn(width, height, |x, y| {
        let r = ((x * 65535) / width.max(1)) as u16;
        let g = ((y * 65535) / height.max(1)) as u16;
        let b = ((x ^ y) * 2053 % 65536) as u16;
        Rgba([r, g, b, 65535])
    })
}

/// Image filled from a seed with a small xorshift generator.
pub fn noise(width: u32, height: u32, seed: u64) -> Rgba16Image {
    let mut state = seed | 1;
    Rgba16Image::from_fn(width, height, |_, _| {
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 48) as u16
        };
        Rgba([next(), next(), next(), next()])
    })
}

/// Write an 8-bit RGB JPEG to `dir/name` and return its path.
pub fn write_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 7 % 256) as u8, (y * 11 % 256) as u8, ((x + y) % 256) as u8])
    })
    .save(&path)
    .unwrap();
    path
}
