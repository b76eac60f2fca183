//! F07: Shifted Rotated Griewank's Function without Bounds
//!
//! Populations are initialised in [0, 600]; the optimum lies outside that
//! range and no search bounds apply.

use super::{F07_NAME, load_rotation, load_shift};
use crate::error::Result;
use crate::functions::{griewank, rotate, shift};
use crate::registry::FunctionContext;
use crate::test_function::{FunctionHeader, TestFunction};
use ndarray::{Array1, Array2};

pub const DATA_FILE: &str = "griewank_func_data.txt";
pub const MATRIX_PREFIX: &str = "griewank_M_D";

pub struct ShiftedRotatedGriewank {
    header: FunctionHeader,
    o: Array1<f64>,
    m: Array2<f64>,
}

pub fn create(ctx: &FunctionContext<'_>) -> Result<Box<dyn TestFunction>> {
    Ok(Box::new(ShiftedRotatedGriewank {
        header: ctx.header(F07_NAME),
        o: load_shift(ctx, DATA_FILE)?,
        m: load_rotation(ctx, MATRIX_PREFIX)?,
    }))
}

impl TestFunction for ShiftedRotatedGriewank {
    fn header(&self) -> &FunctionHeader {
        &self.header
    }

    fn compute(&self, x: &Array1<f64>) -> f64 {
        griewank(&rotate(&shift(x, &self.o), &self.m)) + self.header.bias
    }

    fn global_optimum(&self) -> Array1<f64> {
        self.o.clone()
    }
}
