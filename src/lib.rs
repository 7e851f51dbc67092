//! image-grayscale library crate.
//!
//! Converts decoded images to grayscale with one of three engines: a
//! sequential baseline, a row-pull worker pool, and a static partition
//! worker pool. File I/O, output naming, and configuration live around the
//! engines in their own modules.

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod grayscale;
pub mod paths;
pub mod pipeline;

pub use error::GrayscaleError;
