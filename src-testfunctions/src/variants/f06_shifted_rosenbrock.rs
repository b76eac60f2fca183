//! F06: Shifted Rosenbrock's Function

use super::{F06_NAME, load_shift};
use crate::error::Result;
use crate::functions::{rosenbrock, shift};
use crate::registry::FunctionContext;
use crate::test_function::{FunctionHeader, TestFunction};
use ndarray::Array1;

pub const DATA_FILE: &str = "rosenbrock_func_data.txt";

pub struct ShiftedRosenbrock {
    header: FunctionHeader,
    o: Array1<f64>,
}

pub fn create(ctx: &FunctionContext<'_>) -> Result<Box<dyn TestFunction>> {
    Ok(Box::new(ShiftedRosenbrock {
        header: ctx.header(F06_NAME),
        o: load_shift(ctx, DATA_FILE)?,
    }))
}

impl TestFunction for ShiftedRosenbrock {
    fn header(&self) -> &FunctionHeader {
        &self.header
    }

    fn compute(&self, x: &Array1<f64>) -> f64 {
        // Rosenbrock's minimum is at (1, ..., 1); move it onto o
        let z = shift(x, &self.o) + 1.0;
        rosenbrock(&z) + self.header.bias
    }

    fn global_optimum(&self) -> Array1<f64> {
        self.o.clone()
    }
}
