mod common;

use cec2005_testfunctions::{
    Benchmark, BenchmarkError, FunctionContext, FunctionHeader, MAX_SUPPORT_DIM, NUM_TEST_FUNC,
    Result, TestFunction, load_row_from_path, rastrigin, shift,
};
use ndarray::Array1;
use std::io::Write;

#[test]
fn test_create_all_supported_functions() {
    let dir = common::support_data();
    let bench = common::benchmark(&dir, 7);

    for index in 1..=9 {
        for dimension in [2, 10, 30] {
            let f = bench
                .create(index, dimension)
                .unwrap_or_else(|e| panic!("F{:02} D={} failed: {}", index, dimension, e));
            assert_eq!(f.func_num(), index);
            assert_eq!(f.dimension(), dimension);
            assert_eq!(f.bias(), common::BIASES[index - 1]);

            let value = f.evaluate(&Array1::zeros(dimension)).unwrap();
            assert!(value.is_finite(), "F{:02} D={} gave {}", index, dimension, value);
        }
    }
}

#[test]
fn test_unsupported_function() {
    let dir = common::support_data();
    let bench = common::benchmark(&dir, 7);
    let err = bench.create(10, 10).unwrap_err();
    assert!(matches!(err, BenchmarkError::UnsupportedFunction { index: 10 }));
    assert!(err.to_string().contains("10"));
}

#[test]
fn test_dimension_mismatch() {
    let dir = common::support_data();
    let bench = common::benchmark(&dir, 7);
    for index in 1..=9 {
        let f = bench.create(index, 10).unwrap();
        let err = f.evaluate(&Array1::zeros(9)).unwrap_err();
        assert!(matches!(
            err,
            BenchmarkError::DimensionMismatch {
                expected: 10,
                got: 9
            }
        ));
        assert!(f.evaluate(&Array1::zeros(11)).is_err());
    }
}

#[test]
fn test_short_bias_line_is_format_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "-450 -450 -450").unwrap();
    assert!(matches!(
        load_row_from_path(file.path(), NUM_TEST_FUNC),
        Err(BenchmarkError::Format(_))
    ));
    assert!(matches!(
        Benchmark::with_bias_file(file.path()),
        Err(BenchmarkError::Config { .. })
    ));
}

#[test]
fn test_missing_bias_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("fbias_data.txt");
    assert!(matches!(
        load_row_from_path(&missing, NUM_TEST_FUNC),
        Err(BenchmarkError::Io { .. })
    ));
    match Benchmark::with_bias_file(&missing) {
        Err(BenchmarkError::Config { source, .. }) => {
            assert!(matches!(*source, BenchmarkError::Io { .. }))
        }
        other => panic!("expected a config error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_dimension_beyond_support_data() {
    let dir = common::support_data();
    let bench = common::benchmark(&dir, 7);

    assert!(bench.create(1, MAX_SUPPORT_DIM).is_ok());
    // shift files hold 100 columns
    assert!(matches!(
        bench.create(1, MAX_SUPPORT_DIM + 1),
        Err(BenchmarkError::Format(_))
    ));
    // rotation matrices only exist for 2, 10, 30 and 50
    assert!(bench.create(7, 50).is_ok());
    assert!(matches!(bench.create(7, 20), Err(BenchmarkError::Io { .. })));
    // non-rotated functions work for any dimension up to 100
    assert!(bench.create(9, 20).is_ok());
    assert!(bench.create(5, 1).is_ok());
}

#[test]
fn test_functions_share_no_data() {
    let dir = common::support_data();
    let bench = common::benchmark(&dir, 7);
    let a = bench.create(1, 10).unwrap();
    let b = bench.create(1, 10).unwrap();
    let x = Array1::from_elem(10, 1.25);
    assert_eq!(a.evaluate(&x).unwrap(), b.evaluate(&x).unwrap());
    drop(a);
    assert!(b.evaluate(&x).is_ok());
}

struct ShiftedRastriginPlusOne {
    header: FunctionHeader,
    o: Array1<f64>,
}

impl TestFunction for ShiftedRastriginPlusOne {
    fn header(&self) -> &FunctionHeader {
        &self.header
    }

    fn compute(&self, x: &Array1<f64>) -> f64 {
        rastrigin(&shift(x, &self.o)) + 1.0 + self.header.bias
    }

    fn global_optimum(&self) -> Array1<f64> {
        self.o.clone()
    }
}

fn create_custom(ctx: &FunctionContext<'_>) -> Result<Box<dyn TestFunction>> {
    let o = load_row_from_path(ctx.data_dir.join("rastrigin_func_data.txt"), ctx.dimension)?;
    Ok(Box::new(ShiftedRastriginPlusOne {
        header: ctx.header("custom"),
        o,
    }))
}

#[test]
fn test_registering_another_function() {
    let dir = common::support_data();
    let mut bench = common::benchmark(&dir, 7);
    bench.registry_mut().register(10, "custom", create_custom);

    assert_eq!(bench.supported_functions(), (1..=10).collect::<Vec<_>>());
    let f = bench.create(10, 2).unwrap();
    assert_eq!(f.bias(), common::BIASES[9]);
    let value = f.evaluate(&f.global_optimum()).unwrap();
    assert!((value - (common::BIASES[9] + 1.0)).abs() < 1e-9);
}
