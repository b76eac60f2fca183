//! Base landscapes and elementary transforms
//!
//! - `unimodal`: sphere, Schwefel 1.2, high conditioned elliptic, Rosenbrock
//! - `multimodal`: Griewank, Ackley, Rastrigin
//! - `transforms`: shift, rotation and matrix/vector products

pub mod multimodal;
pub mod transforms;
pub mod unimodal;

// Re-export all functions for easy access
pub use multimodal::*;
pub use transforms::*;
pub use unimodal::*;
