//! F04: Shifted Schwefel's Problem 1.2 with Noise in Fitness
//!
//! Every evaluation draws a fresh standard normal sample, so two calls on the
//! same point return different values. The value never drops below the
//! noiseless one: `f = schwefel_102(z) * (1 + 0.4 |N(0,1)|) + bias`.

use super::{F04_NAME, load_shift};
use crate::error::Result;
use crate::functions::{schwefel_102, shift};
use crate::registry::FunctionContext;
use crate::test_function::{FunctionHeader, TestFunction};
use ndarray::Array1;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

pub const DATA_FILE: &str = "schwefel_102_func_data.txt";

/// Scale of the multiplicative noise
pub const NOISE_MAGNITUDE: f64 = 0.4;

pub struct ShiftedSchwefelNoise {
    header: FunctionHeader,
    o: Array1<f64>,
    rng: Mutex<StdRng>,
}

pub fn create(ctx: &FunctionContext<'_>) -> Result<Box<dyn TestFunction>> {
    let o = load_shift(ctx, DATA_FILE)?;
    // one generator per instance, derived from the factory's master generator
    let rng = StdRng::from_rng(&mut *ctx.rng.lock());
    Ok(Box::new(ShiftedSchwefelNoise {
        header: ctx.header(F04_NAME),
        o,
        rng: Mutex::new(rng),
    }))
}

impl TestFunction for ShiftedSchwefelNoise {
    fn header(&self) -> &FunctionHeader {
        &self.header
    }

    fn compute(&self, x: &Array1<f64>) -> f64 {
        let base = schwefel_102(&shift(x, &self.o));
        let gauss: f64 = self.rng.lock().sample(StandardNormal);
        base * (1.0 + NOISE_MAGNITUDE * gauss.abs()) + self.header.bias
    }

    fn global_optimum(&self) -> Array1<f64> {
        self.o.clone()
    }
}
