//! Subcommand handlers for convert, bench, and config actions.

use std::path::{Path, PathBuf};

use super::args::ConfigAction;
use crate::codec;
use crate::config::{default_path, Config, DEFAULT_CONFIG};
use crate::error::GrayscaleError;
use crate::grayscale::Strategy;
use crate::pipeline::{self, JobRequest};

/// Build a job from CLI flags, falling back to the config file.
pub fn job_request(
    config: &Config,
    path: PathBuf,
    workers: Option<i64>,
    strategy: Option<Strategy>,
    output_dir: Option<PathBuf>,
) -> JobRequest {
    JobRequest {
        input: path,
        workers: workers.unwrap_or(config.engine.workers),
        strategy: strategy.unwrap_or(config.engine.strategy),
        output_dir: output_dir.unwrap_or_else(|| config.output.dir.clone()),
    }
}

/// Convert one image and print where the result went.
pub fn convert(request: &JobRequest) -> Result<(), GrayscaleError> {
    let report = pipeline::run_job(request)?;
    println!(
        "{} -> {} [{}x{}, {}, {:.2?}]",
        report.input.display(),
        report.output.display(),
        report.width,
        report.height,
        report.engine,
        report.elapsed
    );
    Ok(())
}

/// Time every engine on one image and print a table.
pub fn bench(path: &Path, workers: &[usize], iterations: usize) -> Result<(), GrayscaleError> {
    let input = codec::decode(path)?;
    let results = pipeline::bench(&input, workers, iterations)?;

    println!(
        "{} ({}x{}, {} runs per engine)",
        path.display(),
        input.width(),
        input.height(),
        iterations
    );
    println!("  {:<26} {:>12} {:>8}", "engine", "mean", "speedup");
    for result in results {
        println!(
            "  {:<26} {:>12.2?} {:>7.2}x",
            result.engine.to_string(),
            result.mean,
            result.speedup
        );
    }
    println!();
    println!("All engines produced identical output.");
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    config: &Config,
    config_path: Option<&Path>,
) -> Result<(), GrayscaleError> {
    let config_path = config_path.map(PathBuf::from).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            println!("  Workers: {}", config.engine.workers);
            println!("  Strategy: {}", config.engine.strategy);
            println!("  Output dir: {}", config.output.dir.display());
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(GrayscaleError::InvalidConfig(format!(
                    "config file already exists: {}. Use 'image-grayscale config show' to view current settings.",
                    config_path.display()
                )));
            }

            write_default_config(&config_path).map_err(|e| {
                GrayscaleError::InvalidConfig(format!(
                    "cannot write {}: {}",
                    config_path.display(),
                    e
                ))
            })?;

            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

fn write_default_config(path: &Path) -> std::io::Result<()> {
    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_CONFIG)
}
