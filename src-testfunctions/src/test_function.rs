//! The evaluation unit handed out by the benchmark factory

use crate::error::{BenchmarkError, Result};
use ndarray::Array1;

/// Identity of a bound test function
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionHeader {
    /// CEC2005 function number, 1-based
    pub func_num: usize,
    pub name: &'static str,
    pub dimension: usize,
    /// Value of the function at its global optimum
    pub bias: f64,
}

/// A CEC2005 objective bound to one dimension and its support data
///
/// Implementations are immutable after construction, so a single instance can
/// be evaluated from several threads at once.
pub trait TestFunction: Send + Sync {
    fn header(&self) -> &FunctionHeader;

    /// Evaluate without checking the length of `x`
    ///
    /// Callers must pass exactly `dimension()` coordinates.
    fn compute(&self, x: &Array1<f64>) -> f64;

    /// Location of the global optimum, where the function equals `bias()`
    fn global_optimum(&self) -> Array1<f64>;

    /// Evaluate a candidate point
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when `x` does not have `dimension()` coordinates.
    fn evaluate(&self, x: &Array1<f64>) -> Result<f64> {
        let expected = self.dimension();
        if x.len() != expected {
            return Err(BenchmarkError::DimensionMismatch {
                expected,
                got: x.len(),
            });
        }
        Ok(self.compute(x))
    }

    fn func_num(&self) -> usize {
        self.header().func_num
    }

    fn name(&self) -> &'static str {
        self.header().name
    }

    fn dimension(&self) -> usize {
        self.header().dimension
    }

    fn bias(&self) -> f64 {
        self.header().bias
    }
}

impl std::fmt::Debug for dyn TestFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestFunction")
            .field("func_num", &self.func_num())
            .field("name", &self.name())
            .field("dimension", &self.dimension())
            .field("bias", &self.bias())
            .finish()
    }
}
