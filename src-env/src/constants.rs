//! File and directory names of the CEC2005 support data.

/// Environment variable that overrides the support data directory
pub const DATA_DIR_ENV: &str = "CEC2005_DATA_DIR";

/// Support data directory used when `CEC2005_DATA_DIR` is not set,
/// relative to the current working directory
pub const DEFAULT_DATA_DIR: &str = "data/supportData";

/// Bias table, one value per function slot
pub const BIAS_FILE: &str = "fbias_data.txt";
