//! Benchmark factory: owns the bias table and manufactures test functions

use crate::error::{BenchmarkError, Result};
use crate::loader::load_row_from_path;
use crate::registry::{FunctionContext, FunctionRegistry, SharedRng};
use crate::test_function::TestFunction;
use crate::{MAX_SUPPORT_DIM, NUM_TEST_FUNC};
use cec2005_env::{BIAS_FILE, get_data_dir};
use ndarray::Array1;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where to find the support data and how to seed the noise source
#[derive(Debug, Clone, Default)]
pub struct BenchmarkConfig {
    /// Directory with the shift and rotation files; `CEC2005_DATA_DIR` or
    /// the built-in default when absent
    pub data_dir: Option<PathBuf>,
    /// Bias table; `<data_dir>/fbias_data.txt` when absent
    pub bias_file: Option<PathBuf>,
    /// Seed of the master generator; drawn from the OS when absent
    pub seed: Option<u64>,
}

pub struct BenchmarkConfigBuilder {
    cfg: BenchmarkConfig,
}

impl BenchmarkConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: BenchmarkConfig::default(),
        }
    }
    pub fn data_dir(mut self, v: impl Into<PathBuf>) -> Self {
        self.cfg.data_dir = Some(v.into());
        self
    }
    pub fn bias_file(mut self, v: impl Into<PathBuf>) -> Self {
        self.cfg.bias_file = Some(v.into());
        self
    }
    pub fn seed(mut self, v: u64) -> Self {
        self.cfg.seed = Some(v);
        self
    }
    pub fn build(self) -> BenchmarkConfig {
        self.cfg
    }
}

impl Default for BenchmarkConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Factory for CEC2005 test functions
///
/// Construction loads the bias table once. Each call to [`Benchmark::create`]
/// loads the support data of the requested function, so every returned
/// function owns its own shift vector and rotation matrix.
#[derive(Debug)]
pub struct Benchmark {
    biases: Array1<f64>,
    data_dir: PathBuf,
    rng: SharedRng,
    registry: FunctionRegistry,
}

impl Benchmark {
    /// Build a factory from the support data directory of the environment
    pub fn new() -> Result<Self> {
        Self::from_config(BenchmarkConfig::default())
    }

    /// Build a factory from an explicit bias table; the other support files
    /// are looked up next to it
    pub fn with_bias_file(bias_file: impl AsRef<Path>) -> Result<Self> {
        let bias_file = bias_file.as_ref();
        let data_dir = bias_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::from_config(
            BenchmarkConfigBuilder::new()
                .data_dir(data_dir)
                .bias_file(bias_file)
                .build(),
        )
    }

    pub fn from_config(config: BenchmarkConfig) -> Result<Self> {
        let data_dir = match config.data_dir {
            Some(dir) => dir,
            None => get_data_dir()?,
        };
        let bias_file = config
            .bias_file
            .unwrap_or_else(|| data_dir.join(BIAS_FILE));

        let biases = load_row_from_path(&bias_file, NUM_TEST_FUNC).map_err(|e| {
            BenchmarkError::Config {
                path: bias_file.clone(),
                source: Box::new(e),
            }
        })?;
        log::info!(
            "loaded {} biases from {}",
            biases.len(),
            bias_file.display()
        );

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            biases,
            data_dir,
            rng: Arc::new(Mutex::new(rng)),
            registry: FunctionRegistry::cec2005(),
        })
    }

    /// Manufacture the test function `func_num` bound to `dimension`
    ///
    /// # Errors
    ///
    /// - `InvalidDimension` for a zero dimension
    /// - `UnsupportedFunction` when no constructor is registered for `func_num`
    /// - `Io` / `Format` when the function's support data cannot be loaded
    pub fn create(&self, func_num: usize, dimension: usize) -> Result<Box<dyn TestFunction>> {
        if dimension == 0 {
            return Err(BenchmarkError::InvalidDimension(dimension));
        }
        let bias = self
            .bias(func_num)
            .ok_or(BenchmarkError::UnsupportedFunction { index: func_num })?;
        let entry = self
            .registry
            .get(func_num)
            .ok_or(BenchmarkError::UnsupportedFunction { index: func_num })?;

        if dimension > MAX_SUPPORT_DIM {
            log::warn!(
                "F{:02} requested with dimension {}, support data covers at most {}",
                func_num,
                dimension,
                MAX_SUPPORT_DIM
            );
        }

        let ctx = FunctionContext {
            func_num,
            dimension,
            bias,
            data_dir: &self.data_dir,
            rng: &self.rng,
        };
        let function = (entry.constructor)(&ctx)?;
        log::debug!(
            "created F{:02} '{}' with dimension {} and bias {}",
            func_num,
            entry.name,
            dimension,
            bias
        );
        Ok(function)
    }

    /// Bias of function `func_num`, `None` outside 1..=25
    pub fn bias(&self, func_num: usize) -> Option<f64> {
        func_num
            .checked_sub(1)
            .and_then(|i| self.biases.get(i))
            .copied()
    }

    pub fn biases(&self) -> &Array1<f64> {
        &self.biases
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Function numbers that `create` can build
    pub fn supported_functions(&self) -> Vec<usize> {
        self.registry.indices()
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut FunctionRegistry {
        &mut self.registry
    }
}
