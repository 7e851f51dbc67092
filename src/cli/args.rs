//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::grayscale::Strategy;

/// Parse a strategy name or numeric selector (0 = row-pull, other = partition)
fn parse_strategy(s: &str) -> Result<Strategy, String> {
    s.parse()
}

/// Convert JPEG images to grayscale with a sequential or parallel engine
#[derive(Parser, Debug)]
#[command(name = "image-grayscale")]
#[command(version, about = "Grayscale conversion with sequential and parallel row engines", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Sequential baseline
    image-grayscale convert --path ./images/1.jpg

    # 5 workers pulling rows from a shared queue
    image-grayscale convert --path ./images/1.jpg --workers 5

    # 5 workers with one block of rows each
    image-grayscale convert --path ./images/1.jpg --workers 5 --strategy partition

    # Compare all engines
    image-grayscale bench --path ./images/3.jpg --workers 2,5")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert one image to grayscale
    Convert {
        /// Path to the input .jpg/.jpeg file
        #[arg(long, short)]
        path: PathBuf,

        /// Worker threads (0 = sequential). Default: 0 (or from config file)
        #[arg(long, short, visible_alias = "maxgr", allow_negative_numbers = true)]
        workers: Option<i64>,

        /// Work distribution: row-pull (0) or partition (any other number)
        #[arg(long, short, visible_alias = "al", value_parser = parse_strategy)]
        strategy: Option<Strategy>,

        /// Directory for the converted image. Default: ./images (or from config file)
        #[arg(long, short)]
        output_dir: Option<PathBuf>,
    },
    /// Time every engine on one image and check they agree
    Bench {
        /// Path to the input image
        #[arg(long, short)]
        path: PathBuf,

        /// Worker counts to try, comma separated
        #[arg(long, short, value_delimiter = ',', default_values_t = [2, 5])]
        workers: Vec<usize>,

        /// Runs per engine
        #[arg(long, short = 'n', default_value_t = 5)]
        iterations: usize,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
