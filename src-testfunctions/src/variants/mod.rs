//! The implemented CEC2005 functions, one module per function
//!
//! Each module exposes a `create` constructor with the registry signature.
//! Support data is read from the directory carried by the context, using the
//! file names of the official CEC2005 distribution.

use crate::error::Result;
use crate::loader::{load_matrix_from_path, load_row_from_path};
use crate::registry::FunctionContext;
use ndarray::{Array1, Array2};

pub mod f01_shifted_sphere;
pub mod f02_shifted_schwefel;
pub mod f03_shifted_rotated_high_cond_elliptic;
pub mod f04_shifted_schwefel_noise;
pub mod f05_schwefel_global_opt_bound;
pub mod f06_shifted_rosenbrock;
pub mod f07_shifted_rotated_griewank;
pub mod f08_shifted_rotated_ackley_global_opt_bound;
pub mod f09_shifted_rastrigin;

pub use f01_shifted_sphere::ShiftedSphere;
pub use f02_shifted_schwefel::ShiftedSchwefel;
pub use f03_shifted_rotated_high_cond_elliptic::ShiftedRotatedHighCondElliptic;
pub use f04_shifted_schwefel_noise::ShiftedSchwefelNoise;
pub use f05_schwefel_global_opt_bound::SchwefelGlobalOptBound;
pub use f06_shifted_rosenbrock::ShiftedRosenbrock;
pub use f07_shifted_rotated_griewank::ShiftedRotatedGriewank;
pub use f08_shifted_rotated_ackley_global_opt_bound::ShiftedRotatedAckleyGlobalOptBound;
pub use f09_shifted_rastrigin::ShiftedRastrigin;

pub const F01_NAME: &str = "Shifted Sphere Function";
pub const F02_NAME: &str = "Shifted Schwefel's Problem 1.2";
pub const F03_NAME: &str = "Shifted Rotated High Conditioned Elliptic Function";
pub const F04_NAME: &str = "Shifted Schwefel's Problem 1.2 with Noise in Fitness";
pub const F05_NAME: &str = "Schwefel's Problem 2.6 with Global Optimum on Bounds";
pub const F06_NAME: &str = "Shifted Rosenbrock's Function";
pub const F07_NAME: &str = "Shifted Rotated Griewank's Function without Bounds";
pub const F08_NAME: &str = "Shifted Rotated Ackley's Function with Global Optimum on Bounds";
pub const F09_NAME: &str = "Shifted Rastrigin's Function";

/// Load the first `dimension` values of a one line shift file
pub(crate) fn load_shift(ctx: &FunctionContext<'_>, file: &str) -> Result<Array1<f64>> {
    load_row_from_path(ctx.data_dir.join(file), ctx.dimension)
}

/// Load the `dimension x dimension` matrix stored in `<prefix><dimension>.txt`
pub(crate) fn load_rotation(ctx: &FunctionContext<'_>, prefix: &str) -> Result<Array2<f64>> {
    let file = format!("{}{}.txt", prefix, ctx.dimension);
    load_matrix_from_path(ctx.data_dir.join(file), ctx.dimension, ctx.dimension)
}
