//! Static partition worker pool.
//!
//! Rows are split up front into `workers` equal contiguous chunks, one per
//! thread. Rows left over after the split are rendered by the calling
//! thread while the chunk workers run.

use std::thread;

use image::GrayImage;
use log::debug;

use super::barrier::CompletionBarrier;
use super::luma::render_row;
use super::types::{allocate_output, input_row, EngineError, Rgba16Image, RowPlan, WorkRange};

/// Convert `input` to grayscale with `workers` threads, one contiguous
/// block of rows each.
///
/// When `workers` exceeds the row count no thread is spawned and the whole
/// image is rendered on the calling thread.
pub fn transform(input: &Rgba16Image, workers: usize) -> Result<GrayImage, EngineError> {
    if workers == 0 {
        return Err(EngineError::InvalidWorkers(0));
    }

    let mut output = allocate_output(input)?;
    let width = input.width() as usize;
    let height = input.height() as usize;
    if width == 0 || height == 0 {
        return Ok(output);
    }

    let plan = RowPlan::new(height, workers);
    debug!(
        "partition: {} rows, {} chunks of {}, remainder {:?}",
        height,
        plan.chunks.len(),
        plan.chunk_size,
        plan.remainder
    );

    let (chunked, rest) = output.split_at_mut(plan.chunks.len() * plan.chunk_size * width);
    let blocks: Vec<(WorkRange, &mut [u8])> = if plan.chunk_size > 0 {
        plan.chunks
            .iter()
            .copied()
            .zip(chunked.chunks_exact_mut(plan.chunk_size * width))
            .collect()
    } else {
        Vec::new()
    };
    // One obligation per spawned worker.
    let barrier = CompletionBarrier::new(blocks.len());

    thread::scope(|s| {
        for (range, block) in blocks {
            let barrier = &barrier;
            s.spawn(move || {
                render_range(input, range, block, width);
                barrier.done();
            });
        }

        // The calling thread takes the leftover rows instead of idling.
        if let Some(range) = plan.remainder {
            render_range(input, range, rest, width);
        }

        if plan.chunk_size > 0 {
            barrier.wait();
        }
    });

    Ok(output)
}

/// Render every row of `range` into `block`, which holds exactly those rows.
fn render_range(input: &Rgba16Image, range: WorkRange, block: &mut [u8], width: usize) {
    for (y, row) in range.rows().zip(block.chunks_exact_mut(width)) {
        render_row(input_row(input, y), row);
    }
}
