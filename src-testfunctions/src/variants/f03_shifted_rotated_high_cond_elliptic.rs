//! F03: Shifted Rotated High Conditioned Elliptic Function
//!
//! The rotation matrix is dimension specific (`elliptic_M_D<D>.txt`); the
//! official data ships matrices for D = 2, 10, 30 and 50.

use super::{F03_NAME, load_rotation, load_shift};
use crate::error::Result;
use crate::functions::{high_cond_elliptic, rotate, shift};
use crate::registry::FunctionContext;
use crate::test_function::{FunctionHeader, TestFunction};
use ndarray::{Array1, Array2};

pub const DATA_FILE: &str = "high_cond_elliptic_rot_data.txt";
pub const MATRIX_PREFIX: &str = "elliptic_M_D";

pub struct ShiftedRotatedHighCondElliptic {
    header: FunctionHeader,
    o: Array1<f64>,
    m: Array2<f64>,
}

pub fn create(ctx: &FunctionContext<'_>) -> Result<Box<dyn TestFunction>> {
    Ok(Box::new(ShiftedRotatedHighCondElliptic {
        header: ctx.header(F03_NAME),
        o: load_shift(ctx, DATA_FILE)?,
        m: load_rotation(ctx, MATRIX_PREFIX)?,
    }))
}

impl TestFunction for ShiftedRotatedHighCondElliptic {
    fn header(&self) -> &FunctionHeader {
        &self.header
    }

    fn compute(&self, x: &Array1<f64>) -> f64 {
        let z = rotate(&shift(x, &self.o), &self.m);
        high_cond_elliptic(&z) + self.header.bias
    }

    fn global_optimum(&self) -> Array1<f64> {
        self.o.clone()
    }
}
