//! Environment utilities and constants for the CEC2005 support data.

pub mod constants;
pub mod env_utils;

pub use constants::*;
pub use env_utils::*;
