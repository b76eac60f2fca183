//! Function registry mapping CEC2005 indices to constructors
//!
//! Adding one of the remaining functions of the suite is a call to
//! [`FunctionRegistry::register`]; the factory does not change.

use crate::error::Result;
use crate::test_function::{FunctionHeader, TestFunction};
use crate::variants;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Random generator shared by a factory and the functions it creates
pub type SharedRng = Arc<Mutex<StdRng>>;

/// Everything a constructor needs to bind a function to one dimension
pub struct FunctionContext<'a> {
    pub func_num: usize,
    pub dimension: usize,
    pub bias: f64,
    /// Directory holding the support data files
    pub data_dir: &'a Path,
    /// Master generator; noisy functions derive their own generator from it
    pub rng: &'a SharedRng,
}

impl FunctionContext<'_> {
    pub fn header(&self, name: &'static str) -> FunctionHeader {
        FunctionHeader {
            func_num: self.func_num,
            name,
            dimension: self.dimension,
            bias: self.bias,
        }
    }
}

/// Test function constructor type definition
pub type Constructor = fn(&FunctionContext<'_>) -> Result<Box<dyn TestFunction>>;

#[derive(Clone, Copy, Debug)]
pub struct RegistryEntry {
    pub name: &'static str,
    pub constructor: Constructor,
}

/// Registry mapping function numbers to constructors
#[derive(Clone, Default, Debug)]
pub struct FunctionRegistry {
    entries: BTreeMap<usize, RegistryEntry>,
}

impl FunctionRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the implemented CEC2005 functions (1 to 9)
    pub fn cec2005() -> Self {
        let mut registry = Self::new();

        registry.register(1, variants::F01_NAME, variants::f01_shifted_sphere::create);
        registry.register(2, variants::F02_NAME, variants::f02_shifted_schwefel::create);
        registry.register(
            3,
            variants::F03_NAME,
            variants::f03_shifted_rotated_high_cond_elliptic::create,
        );
        registry.register(4, variants::F04_NAME, variants::f04_shifted_schwefel_noise::create);
        registry.register(
            5,
            variants::F05_NAME,
            variants::f05_schwefel_global_opt_bound::create,
        );
        registry.register(6, variants::F06_NAME, variants::f06_shifted_rosenbrock::create);
        registry.register(
            7,
            variants::F07_NAME,
            variants::f07_shifted_rotated_griewank::create,
        );
        registry.register(
            8,
            variants::F08_NAME,
            variants::f08_shifted_rotated_ackley_global_opt_bound::create,
        );
        registry.register(9, variants::F09_NAME, variants::f09_shifted_rastrigin::create);

        registry
    }

    /// Register (or replace) the constructor for `index`
    pub fn register(&mut self, index: usize, name: &'static str, constructor: Constructor) {
        self.entries.insert(index, RegistryEntry { name, constructor });
    }

    pub fn get(&self, index: usize) -> Option<&RegistryEntry> {
        self.entries.get(&index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    /// Registered indices in ascending order
    pub fn indices(&self) -> Vec<usize> {
        self.entries.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
