//! Engine selection and dispatch.

use std::fmt;
use std::str::FromStr;

use image::GrayImage;
use serde::Deserialize;

use super::types::{EngineError, Rgba16Image};
use super::{partition, row_pull, sequential};

/// Work-distribution strategy for the pooled engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Workers pull one row at a time from a shared queue
    #[default]
    RowPull,
    /// Rows split up front into one contiguous block per worker
    Partition,
}

impl Strategy {
    /// Map a numeric selector: 0 picks row-pull, anything else partition.
    pub fn from_selector(selector: u32) -> Self {
        if selector == 0 {
            Strategy::RowPull
        } else {
            Strategy::Partition
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::RowPull => "row-pull",
            Strategy::Partition => "partition",
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "row-pull" | "rowpull" | "rbr" => Ok(Strategy::RowPull),
            "partition" | "parts" | "pt" => Ok(Strategy::Partition),
            other => other.parse::<u32>().map(Strategy::from_selector).map_err(|_| {
                format!(
                    "Unknown strategy '{}'. Use row-pull, partition, or a numeric selector",
                    s
                )
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the three interchangeable grayscale engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Sequential,
    RowPull { workers: usize },
    Partition { workers: usize },
}

impl Engine {
    /// Resolve a worker count and strategy into an engine.
    ///
    /// A worker count of 0 selects the sequential engine; a positive count
    /// selects the pooled engine for `strategy`. Negative counts are
    /// rejected before any work is done.
    pub fn from_invocation(workers: i64, strategy: Strategy) -> Result<Self, EngineError> {
        match workers {
            0 => Ok(Engine::Sequential),
            n if n < 0 => Err(EngineError::InvalidWorkers(n)),
            n => {
                let workers =
                    usize::try_from(n).map_err(|_| EngineError::InvalidWorkers(n))?;
                Ok(match strategy {
                    Strategy::RowPull => Engine::RowPull { workers },
                    Strategy::Partition => Engine::Partition { workers },
                })
            }
        }
    }

    /// Short tag used when naming output files.
    pub fn tag(&self) -> &'static str {
        match self {
            Engine::Sequential => "plain",
            Engine::RowPull { .. } => "rbr",
            Engine::Partition { .. } => "pt",
        }
    }

    /// Worker count, 0 for the sequential engine.
    pub fn workers(&self) -> usize {
        match self {
            Engine::Sequential => 0,
            Engine::RowPull { workers } | Engine::Partition { workers } => *workers,
        }
    }

    /// Run this engine over `input`. Blocks until every row is rendered.
    pub fn run(&self, input: &Rgba16Image) -> Result<GrayImage, EngineError> {
        match *self {
            Engine::Sequential => sequential::transform(input),
            Engine::RowPull { workers } => row_pull::transform(input, workers),
            Engine::Partition { workers } => partition::transform(input, workers),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Sequential => write!(f, "sequential"),
            Engine::RowPull { workers } => write!(f, "row-pull ({} workers)", workers),
            Engine::Partition { workers } => write!(f, "partition ({} workers)", workers),
        }
    }
}
