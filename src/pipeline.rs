//! Job runner: decode, convert, encode.
//!
//! A job validates its settings and derives the output path before any file
//! is read, so configuration errors never cost a decode.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use image::GrayImage;
use log::{debug, info};

use crate::codec;
use crate::error::GrayscaleError;
use crate::grayscale::{Engine, Rgba16Image, Strategy};
use crate::paths;

/// Settings for converting one file.
#[derive(Debug, Clone)]
pub struct JobRequest {
    pub input: PathBuf,
    /// 0 selects the sequential engine
    pub workers: i64,
    pub strategy: Strategy,
    pub output_dir: PathBuf,
}

/// What a finished job did.
#[derive(Debug, Clone)]
pub struct JobReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub engine: Engine,
    pub width: u32,
    pub height: u32,
    /// Time spent in the engine, excluding decode and encode
    pub elapsed: Duration,
}

/// Run one conversion end to end.
pub fn run_job(request: &JobRequest) -> Result<JobReport, GrayscaleError> {
    let engine = Engine::from_invocation(request.workers, request.strategy)?;
    let output = paths::derive_output_path(&request.input, &request.output_dir, engine.tag())?;
    info!(
        "SRC: {} -> DES: {} ({})",
        request.input.display(),
        output.display(),
        engine
    );

    let input = codec::decode(&request.input)?;
    let (width, height) = input.dimensions();

    let started = Instant::now();
    let gray = engine.run(&input)?;
    let elapsed = started.elapsed();
    debug!("{} converted {}x{} in {:?}", engine, width, height, elapsed);

    codec::encode(&gray, &output)?;

    Ok(JobReport {
        input: request.input.clone(),
        output,
        engine,
        width,
        height,
        elapsed,
    })
}

/// Mean timing of one engine over a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub engine: Engine,
    pub mean: Duration,
    /// Sequential mean divided by this engine's mean
    pub speedup: f64,
}

/// Time the sequential engine and both pools for every worker count.
///
/// Every pooled output is checked against the sequential one; the first
/// differing pixel fails the run.
pub fn bench(
    input: &Rgba16Image,
    workers: &[usize],
    iterations: usize,
) -> Result<Vec<BenchResult>, GrayscaleError> {
    if iterations == 0 {
        return Err(GrayscaleError::InvalidConfig(
            "iterations must be at least 1".to_string(),
        ));
    }
    if workers.contains(&0) {
        return Err(GrayscaleError::InvalidConfig(
            "benchmark worker counts must be at least 1".to_string(),
        ));
    }

    let (baseline, baseline_mean) = time_engine(Engine::Sequential, input, iterations)?;
    let mut results = vec![BenchResult {
        engine: Engine::Sequential,
        mean: baseline_mean,
        speedup: 1.0,
    }];

    for &n in workers {
        for engine in [
            Engine::RowPull { workers: n },
            Engine::Partition { workers: n },
        ] {
            let (output, mean) = time_engine(engine, input, iterations)?;
            verify_matches(engine, &output, &baseline)?;
            results.push(BenchResult {
                engine,
                mean,
                speedup: speedup(baseline_mean, mean),
            });
        }
    }

    Ok(results)
}

fn time_engine(
    engine: Engine,
    input: &Rgba16Image,
    iterations: usize,
) -> Result<(GrayImage, Duration), GrayscaleError> {
    let mut total = Duration::ZERO;
    let mut last = None;
    for _ in 0..iterations {
        let started = Instant::now();
        let output = engine.run(input)?;
        total += started.elapsed();
        last = Some(output);
    }
    debug!("{}: {:?} total over {} runs", engine, total, iterations);

    match last {
        Some(output) => Ok((output, total / iterations as u32)),
        None => Err(GrayscaleError::InvalidConfig(
            "iterations must be at least 1".to_string(),
        )),
    }
}

fn verify_matches(
    engine: Engine,
    output: &GrayImage,
    baseline: &GrayImage,
) -> Result<(), GrayscaleError> {
    let mismatch = output
        .enumerate_pixels()
        .zip(baseline.pixels())
        .find(|((_, _, a), b)| a != b);

    match mismatch {
        Some(((x, y, _), _)) => Err(GrayscaleError::Mismatch {
            engine: engine.to_string(),
            x,
            y,
        }),
        None if output.dimensions() != baseline.dimensions() => Err(GrayscaleError::Mismatch {
            engine: engine.to_string(),
            x: output.width(),
            y: output.height(),
        }),
        None => Ok(()),
    }
}

fn speedup(baseline: Duration, mean: Duration) -> f64 {
    if mean.is_zero() {
        1.0
    } else {
        baseline.as_secs_f64() / mean.as_secs_f64()
    }
}
