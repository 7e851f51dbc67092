//! Row-pull worker pool.
//!
//! Every row index is loaded into a closed [`WorkQueue`] up front. A fixed
//! set of long-lived workers then loops claim → render → signal until the
//! queue reports it is drained. Rows go out in ascending order but may
//! finish in any order, which keeps all workers busy when some rows cost
//! more than others.

use std::thread;

use image::GrayImage;
use log::{debug, trace};

use super::barrier::CompletionBarrier;
use super::luma::render_row;
use super::queue::WorkQueue;
use super::types::{allocate_output, input_row, EngineError, Rgba16Image, WorkItem};

/// Convert `input` to grayscale with up to `workers` threads pulling rows.
///
/// The pool size is clamped to the number of rows. The call returns only
/// after every row has been rendered.
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

    let pool = workers.min(height);
    if pool < workers {
        debug!("row-pull: clamping {} workers to {} rows", workers, height);
    }

    {
        let items = output
            .chunks_exact_mut(width)
            .enumerate()
            .map(|(y, row)| WorkItem { y, row })
            .collect();
        let queue = WorkQueue::preloaded(items);
        // One obligation per row.
        let barrier = CompletionBarrier::new(height);

        thread::scope(|s| {
            for id in 0..pool {
                let queue = &queue;
                let barrier = &barrier;
                s.spawn(move || {
                    let mut rendered = 0usize;
                    while let Some(WorkItem { y, row }) = queue.claim() {
                        render_row(input_row(input, y), row);
                        barrier.done();
                        rendered += 1;
                    }
                    trace!("row-pull worker {} exiting after {} rows", id, rendered);
                });
            }

            barrier.wait();
        });
    }

    debug!("row-pull: {} rows rendered by {} workers", height, pool);
    Ok(output)
}
