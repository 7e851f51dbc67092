//! Grayscale engines for decoded RGBA16 images.
//!
//! Three interchangeable engines take the same input and produce the same
//! [`GrayImage`](image::GrayImage):
//!
//! 1. **Sequential** - baseline, every pixel in raster order on the caller
//! 2. **Row-pull** - a fixed pool of workers pulling rows from a shared queue
//! 3. **Partition** - one contiguous block of rows per worker, leftover rows
//!    on the calling thread
//!
//! All of them share [`luminance`], so their outputs are identical
//! pixel-for-pixel. Each returns only after every row has been written.

mod barrier;
mod engine;
mod luma;
pub mod partition;
mod queue;
pub mod row_pull;
pub mod sequential;
mod types;

pub use barrier::CompletionBarrier;
pub use engine::{Engine, Strategy};
pub use luma::luminance;
pub use queue::WorkQueue;
pub use types::{EngineError, Rgba16Image, RowPlan, WorkItem, WorkRange};
