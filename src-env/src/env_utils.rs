//! Environment variable utilities for the CEC2005 benchmark
//!
//! The support data (biases, shift vectors, rotation matrices) lives in a
//! single directory. `CEC2005_DATA_DIR` points at it; without the variable the
//! relative default `data/supportData` is used.

use crate::constants::{DATA_DIR_ENV, DEFAULT_DATA_DIR};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Error type for environment variable issues
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "CEC2005 support data directory does not exist: {0} (set CEC2005_DATA_DIR to the directory holding fbias_data.txt)"
    )]
    DataDirNotFound(PathBuf),
}

/// Resolve the support data directory from an optional override value
///
/// An empty value counts as unset.
pub fn resolve_data_dir(value: Option<OsString>) -> PathBuf {
    match value {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_DATA_DIR),
    }
}

/// Get the support data directory and validate it exists
///
/// # Errors
///
/// Returns an error if the resolved directory does not exist.
///
/// # Example
///
/// ```no_run
/// use cec2005_env::env_utils::get_data_dir;
///
/// let data_dir = get_data_dir()?;
/// println!("CEC2005 data: {}", data_dir.display());
/// # Ok::<(), cec2005_env::env_utils::EnvError>(())
/// ```
pub fn get_data_dir() -> Result<PathBuf, EnvError> {
    let path = resolve_data_dir(env::var_os(DATA_DIR_ENV));

    if !path.is_dir() {
        return Err(EnvError::DataDirNotFound(path));
    }

    Ok(path)
}
