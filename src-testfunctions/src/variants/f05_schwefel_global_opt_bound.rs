//! F05: Schwefel's Problem 2.6 with Global Optimum on Bounds
//!
//! `f(x) = max_i |A_i x - B_i| + bias` with `B = A o`. The first quarter of
//! the optimum's coordinates is pinned to -100 and the last quarter to +100,
//! so the optimum lies on the border of the [-100, 100] search box.

use super::F05_NAME;
use crate::error::Result;
use crate::functions::matrix_times_column;
use crate::loader::load_matrix_from_path;
use crate::registry::FunctionContext;
use crate::test_function::{FunctionHeader, TestFunction};
use ndarray::{Array1, Array2, s};

/// Line 1 holds the optimum, lines 2 to D+1 the matrix A
pub const DATA_FILE: &str = "schwefel_206_para.txt";

pub const LOWER_BOUND: f64 = -100.0;
pub const UPPER_BOUND: f64 = 100.0;

pub struct SchwefelGlobalOptBound {
    header: FunctionHeader,
    o: Array1<f64>,
    a: Array2<f64>,
    b: Array1<f64>,
}

pub fn create(ctx: &FunctionContext<'_>) -> Result<Box<dyn TestFunction>> {
    let d = ctx.dimension;
    let data = load_matrix_from_path(ctx.data_dir.join(DATA_FILE), d + 1, d)?;

    let lower_edge = (d as f64 / 4.0).ceil() as usize;
    let upper_edge = (3.0 * d as f64 / 4.0).floor() as usize;
    let o = Array1::from_shape_fn(d, |i| {
        if i < lower_edge {
            LOWER_BOUND
        } else if i + 1 >= upper_edge {
            UPPER_BOUND
        } else {
            data[[0, i]]
        }
    });
    let a = data.slice(s![1.., ..]).to_owned();
    let b = matrix_times_column(&a, &o);

    Ok(Box::new(SchwefelGlobalOptBound {
        header: ctx.header(F05_NAME),
        o,
        a,
        b,
    }))
}

impl TestFunction for SchwefelGlobalOptBound {
    fn header(&self) -> &FunctionHeader {
        &self.header
    }

    fn compute(&self, x: &Array1<f64>) -> f64 {
        let z = matrix_times_column(&self.a, x);
        let max = z
            .iter()
            .zip(self.b.iter())
            .map(|(zi, bi)| (zi - bi).abs())
            // f64::max would drop a NaN residual
            .fold(f64::NEG_INFINITY, |m, v| if v.is_nan() || v > m { v } else { m });
        max + self.header.bias
    }

    fn global_optimum(&self) -> Array1<f64> {
        self.o.clone()
    }
}
