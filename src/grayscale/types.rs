//! Image, work unit, and error types shared by the engines.

use image::{GrayImage, ImageBuffer, Rgba};

/// Decoded input image: four 16-bit normalized samples per pixel.
pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Errors that can occur when running an engine.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid worker count {0}: pooled engines need at least one worker")]
    InvalidWorkers(i64),

    #[error("Cannot allocate a {width}x{height} output image")]
    TooLarge { width: u32, height: u32 },
}

/// A row handed to a row-pull worker, together with the output slot it owns.
///
/// Each item borrows a disjoint row of the output buffer, so two workers can
/// never write the same cell.
#[derive(Debug)]
pub struct WorkItem<'a> {
    pub y: usize,
    pub row: &'a mut [u8],
}

/// A closed interval `[from, to]` of row indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkRange {
    pub from: usize,
    pub to: usize,
}

impl WorkRange {
    /// Number of rows in the range.
    pub fn len(&self) -> usize {
        self.to - self.from + 1
    }

    /// Always false; an empty range is not representable.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the row indices in ascending order.
    pub fn rows(&self) -> std::ops::RangeInclusive<usize> {
        self.from..=self.to
    }
}

/// How the static partition pool splits `height` rows across its workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPlan {
    /// Rows per worker (`height / workers`).
    pub chunk_size: usize,
    /// One contiguous range per worker, empty when `chunk_size == 0`.
    pub chunks: Vec<WorkRange>,
    /// Leftover rows handled by the calling thread.
    pub remainder: Option<WorkRange>,
}

impl RowPlan {
    /// Split `height` rows into `workers` equal chunks plus a remainder.
    ///
    /// `workers` must be at least 1.
    pub fn new(height: usize, workers: usize) -> Self {
        let chunk_size = height / workers;
        let rest = height % workers;

        let chunks = if chunk_size > 0 {
            (0..workers)
                .map(|i| {
                    let from = i * chunk_size;
                    WorkRange {
                        from,
                        to: from + chunk_size - 1,
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        let remainder = (rest > 0).then(|| {
            let from = workers * chunk_size;
            WorkRange {
                from,
                to: from + rest - 1,
            }
        });

        RowPlan {
            chunk_size,
            chunks,
            remainder,
        }
    }
}

/// Allocate an output image with the same dimensions as `input`.
pub(crate) fn allocate_output(input: &Rgba16Image) -> Result<GrayImage, EngineError> {
    let (width, height) = input.dimensions();
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(EngineError::TooLarge { width, height })?;
    Ok(GrayImage::new(width, height))
}

/// Borrow the interleaved RGBA samples of row `y`.
#[inline]
pub(crate) fn input_row(input: &Rgba16Image, y: usize) -> &[u16] {
    let stride = input.width() as usize * 4;
    &input.as_raw()[y * stride..(y + 1) * stride]
}
