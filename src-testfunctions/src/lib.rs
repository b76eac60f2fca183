//! CEC2005 benchmark functions library
//!
//! This library turns the classic optimization landscapes (sphere, Schwefel,
//! Rosenbrock, Griewank, Ackley, Rastrigin, ...) into the shifted, rotated and
//! biased problems of the CEC2005 special session on real-parameter
//! optimization. It is organised in layers:
//!
//! - **Loader**: whitespace separated numeric rows from the support data files
//! - **Functions**: pure base landscapes and the shift / rotation transforms
//! - **Variants**: one module per implemented CEC2005 function (F01 to F09)
//! - **Registry**: maps a function number to its constructor
//! - **Benchmark**: loads the bias table and manufactures bound test functions
//!
//! # Example
//!
//! ```no_run
//! use ndarray::Array1;
//! use cec2005_testfunctions::*;
//!
//! let benchmark = Benchmark::new()?;
//! let f = benchmark.create(1, 10)?;
//! let value = f.evaluate(&Array1::zeros(10))?;
//! assert!(value >= f.bias());
//! # Ok::<(), BenchmarkError>(())
//! ```

use ndarray::Array2;
use serde::Serialize;
use std::f64::consts::PI;

pub mod benchmark;
pub mod error;
pub mod functions;
pub mod loader;
pub mod registry;
pub mod test_function;
pub mod variants;

pub use benchmark::{Benchmark, BenchmarkConfig, BenchmarkConfigBuilder};
pub use error::{BenchmarkError, Result};
pub use functions::*;
pub use loader::{load_matrix, load_matrix_from_path, load_row, load_row_from_path};
pub use registry::{Constructor, FunctionContext, FunctionRegistry, SharedRng};
pub use test_function::{FunctionHeader, TestFunction};

/// Number of functions in the CEC2005 suite
pub const NUM_TEST_FUNC: usize = 25;

/// Largest dimension covered by the official support data
pub const MAX_SUPPORT_DIM: usize = 100;

/// Metadata for a CEC2005 function slot
#[derive(Debug, Clone, Serialize)]
pub struct FunctionMetadata {
    /// Function number, 1-based
    pub index: usize,
    pub name: String,
    /// Search range applied to every coordinate, `None` when unbounded
    pub bounds: Option<(f64, f64)>,
    /// Range used to initialise populations
    pub init_range: (f64, f64),
    pub description: String,
    pub multimodal: bool,
}

/// Create bounds matrix for optimization (2 x n matrix)
/// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
pub fn create_bounds(n: usize, lower: f64, upper: f64) -> Array2<f64> {
    Array2::from_shape_fn((2, n), |(i, _)| if i == 0 { lower } else { upper })
}

fn entry(
    index: usize,
    name: &str,
    bounds: Option<(f64, f64)>,
    init_range: (f64, f64),
    description: &str,
    multimodal: bool,
) -> FunctionMetadata {
    FunctionMetadata {
        index,
        name: name.to_string(),
        bounds,
        init_range,
        description: description.to_string(),
        multimodal,
    }
}

/// Get metadata for all 25 CEC2005 functions, in index order
pub fn get_function_metadata() -> Vec<FunctionMetadata> {
    let hundred = Some((-100.0, 100.0));
    let five = Some((-5.0, 5.0));
    let composition = "hybrid composition of ten basic functions";

    vec![
        entry(1, variants::F01_NAME, hundred, (-100.0, 100.0), "shifted, separable, scalable", false),
        entry(2, variants::F02_NAME, hundred, (-100.0, 100.0), "shifted, non-separable, scalable", false),
        entry(3, variants::F03_NAME, hundred, (-100.0, 100.0), "shifted, rotated, condition number 1e6", false),
        entry(4, variants::F04_NAME, hundred, (-100.0, 100.0), "shifted, non-separable, multiplicative noise", false),
        entry(5, variants::F05_NAME, hundred, (-100.0, 100.0), "global optimum on the bounds", false),
        entry(6, variants::F06_NAME, hundred, (-100.0, 100.0), "shifted, narrow valley from local optimum to global optimum", true),
        entry(7, variants::F07_NAME, None, (0.0, 600.0), "shifted, rotated, global optimum outside the initialization range", true),
        entry(8, variants::F08_NAME, Some((-32.0, 32.0)), (-32.0, 32.0), "shifted, rotated, global optimum on the bounds", true),
        entry(9, variants::F09_NAME, five, (-5.0, 5.0), "shifted, separable, huge number of local optima", true),
        entry(10, "Shifted Rotated Rastrigin's Function", five, (-5.0, 5.0), "shifted, rotated, huge number of local optima", true),
        entry(11, "Shifted Rotated Weierstrass Function", Some((-0.5, 0.5)), (-0.5, 0.5), "shifted, rotated, continuous but differentiable only on a set of points", true),
        entry(12, "Schwefel's Problem 2.13", Some((-PI, PI)), (-PI, PI), "shifted, non-separable", true),
        entry(13, "Shifted Expanded Griewank's plus Rosenbrock's Function (F8F2)", Some((-3.0, 1.0)), (-3.0, 1.0), "shifted, non-separable, expanded", true),
        entry(14, "Shifted Rotated Expanded Scaffer's F6", hundred, (-100.0, 100.0), "shifted, rotated, expanded", true),
        entry(15, "Hybrid Composition Function", five, (-5.0, 5.0), composition, true),
        entry(16, "Rotated Hybrid Composition Function", five, (-5.0, 5.0), composition, true),
        entry(17, "Rotated Hybrid Composition Function with Noise in Fitness", five, (-5.0, 5.0), composition, true),
        entry(18, "Rotated Hybrid Composition Function", five, (-5.0, 5.0), composition, true),
        entry(19, "Rotated Hybrid Composition Function with a Narrow Basin for the Global Optimum", five, (-5.0, 5.0), composition, true),
        entry(20, "Rotated Hybrid Composition Function with the Global Optimum on the Bounds", five, (-5.0, 5.0), composition, true),
        entry(21, "Rotated Hybrid Composition Function", five, (-5.0, 5.0), composition, true),
        entry(22, "Rotated Hybrid Composition Function with High Condition Number Matrix", five, (-5.0, 5.0), composition, true),
        entry(23, "Non-Continuous Rotated Hybrid Composition Function", five, (-5.0, 5.0), composition, true),
        entry(24, "Rotated Hybrid Composition Function", five, (-5.0, 5.0), composition, true),
        entry(25, "Rotated Hybrid Composition Function without Bounds", None, (2.0, 5.0), composition, true),
    ]
}

/// Get the 2 x `dimension` bounds matrix of function `index`
///
/// Returns `None` for unknown indices and for the unbounded functions 7 and 25.
pub fn get_function_bounds(index: usize, dimension: usize) -> Option<Array2<f64>> {
    get_function_metadata()
        .into_iter()
        .find(|m| m.index == index)
        .and_then(|m| m.bounds)
        .map(|(lower, upper)| create_bounds(dimension, lower, upper))
}
