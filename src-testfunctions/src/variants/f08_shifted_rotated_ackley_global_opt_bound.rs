//! F08: Shifted Rotated Ackley's Function with Global Optimum on Bounds
//!
//! Every even indexed coordinate of the optimum is pinned to the lower bound
//! -32, which puts the optimum on the border of the [-32, 32] search box.

use super::{F08_NAME, load_rotation, load_shift};
use crate::error::Result;
use crate::functions::{ackley, rotate, shift};
use crate::registry::FunctionContext;
use crate::test_function::{FunctionHeader, TestFunction};
use ndarray::{Array1, Array2};

pub const DATA_FILE: &str = "ackley_func_data.txt";
pub const MATRIX_PREFIX: &str = "ackley_M_D";

pub const LOWER_BOUND: f64 = -32.0;

pub struct ShiftedRotatedAckleyGlobalOptBound {
    header: FunctionHeader,
    o: Array1<f64>,
    m: Array2<f64>,
}

pub fn create(ctx: &FunctionContext<'_>) -> Result<Box<dyn TestFunction>> {
    let mut o = load_shift(ctx, DATA_FILE)?;
    o.iter_mut().step_by(2).for_each(|oi| *oi = LOWER_BOUND);

    Ok(Box::new(ShiftedRotatedAckleyGlobalOptBound {
        header: ctx.header(F08_NAME),
        o,
        m: load_rotation(ctx, MATRIX_PREFIX)?,
    }))
}

impl TestFunction for ShiftedRotatedAckleyGlobalOptBound {
    fn header(&self) -> &FunctionHeader {
        &self.header
    }

    fn compute(&self, x: &Array1<f64>) -> f64 {
        ackley(&rotate(&shift(x, &self.o), &self.m)) + self.header.bias
    }

    fn global_optimum(&self) -> Array1<f64> {
        self.o.clone()
    }
}
