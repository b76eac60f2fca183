//! Error types for loading support data and evaluating test functions

use cec2005_env::EnvError;
use std::path::PathBuf;

/// Errors raised by the benchmark factory, the data loader and evaluation
#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    /// A support data file could not be opened
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from an already opened source failed
    #[error("failed to read numeric data: {0}")]
    Read(#[source] std::io::Error),

    /// A line is missing, too short or holds a token that is not a number
    #[error("unexpected format: {0}")]
    Format(String),

    /// The function index has no registered implementation
    #[error("function {index} is not implemented (CEC2005 defines functions 1 to 25)")]
    UnsupportedFunction { index: usize },

    /// The candidate point does not match the bound dimension
    #[error("dimension mismatch: expected {expected} coordinates, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Dimension must be a positive integer
    #[error("invalid dimension {0}: must be at least 1")]
    InvalidDimension(usize),

    /// The bias table could not be loaded while building the factory
    #[error("failed to load bias table {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<BenchmarkError>,
    },

    #[error(transparent)]
    Env(#[from] EnvError),
}

pub type Result<T> = std::result::Result<T, BenchmarkError>;
