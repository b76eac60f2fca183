//! F01: Shifted Sphere Function

use super::{F01_NAME, load_shift};
use crate::error::Result;
use crate::functions::{shift, sphere};
use crate::registry::FunctionContext;
use crate::test_function::{FunctionHeader, TestFunction};
use ndarray::Array1;

pub const DATA_FILE: &str = "sphere_func_data.txt";

pub struct ShiftedSphere {
    header: FunctionHeader,
    o: Array1<f64>,
}

pub fn create(ctx: &FunctionContext<'_>) -> Result<Box<dyn TestFunction>> {
    Ok(Box::new(ShiftedSphere {
        header: ctx.header(F01_NAME),
        o: load_shift(ctx, DATA_FILE)?,
    }))
}

impl TestFunction for ShiftedSphere {
    fn header(&self) -> &FunctionHeader {
        &self.header
    }

    fn compute(&self, x: &Array1<f64>) -> f64 {
        sphere(&shift(x, &self.o)) + self.header.bias
    }

    fn global_optimum(&self) -> Array1<f64> {
        self.o.clone()
    }
}
