//! F02: Shifted Schwefel's Problem 1.2

use super::{F02_NAME, load_shift};
use crate::error::Result;
use crate::functions::{schwefel_102, shift};
use crate::registry::FunctionContext;
use crate::test_function::{FunctionHeader, TestFunction};
use ndarray::Array1;

pub const DATA_FILE: &str = "schwefel_102_func_data.txt";

pub struct ShiftedSchwefel {
    header: FunctionHeader,
    o: Array1<f64>,
}

pub fn create(ctx: &FunctionContext<'_>) -> Result<Box<dyn TestFunction>> {
    Ok(Box::new(ShiftedSchwefel {
        header: ctx.header(F02_NAME),
        o: load_shift(ctx, DATA_FILE)?,
    }))
}

impl TestFunction for ShiftedSchwefel {
    fn header(&self) -> &FunctionHeader {
        &self.header
    }

    fn compute(&self, x: &Array1<f64>) -> f64 {
        schwefel_102(&shift(x, &self.o)) + self.header.bias
    }

    fn global_optimum(&self) -> Array1<f64> {
        self.o.clone()
    }
}
