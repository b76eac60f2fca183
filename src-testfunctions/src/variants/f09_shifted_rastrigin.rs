//! F09: Shifted Rastrigin's Function

use super::{F09_NAME, load_shift};
use crate::error::Result;
use crate::functions::{rastrigin, shift};
use crate::registry::FunctionContext;
use crate::test_function::{FunctionHeader, TestFunction};
use ndarray::Array1;

pub const DATA_FILE: &str = "rastrigin_func_data.txt";

pub struct ShiftedRastrigin {
    header: FunctionHeader,
    o: Array1<f64>,
}

pub fn create(ctx: &FunctionContext<'_>) -> Result<Box<dyn TestFunction>> {
    Ok(Box::new(ShiftedRastrigin {
        header: ctx.header(F09_NAME),
        o: load_shift(ctx, DATA_FILE)?,
    }))
}

impl TestFunction for ShiftedRastrigin {
    fn header(&self) -> &FunctionHeader {
        &self.header
    }

    fn compute(&self, x: &Array1<f64>) -> f64 {
        rastrigin(&shift(x, &self.o)) + self.header.bias
    }

    fn global_optimum(&self) -> Array1<f64> {
        self.o.clone()
    }
}
