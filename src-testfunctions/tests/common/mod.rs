//! Synthetic CEC2005 support data written into a temporary directory
//!
//! The official data files are not redistributed with the crate. These
//! helpers produce files with the same layout: one shift line of 100 values
//! per function, `D x D` rotation matrices for D in {2, 10, 30, 50} and a
//! 101 line parameter file for Schwefel 2.6.

#![allow(dead_code)]

use cec2005_testfunctions::{Benchmark, BenchmarkConfigBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::TempDir;

pub const BIASES: [f64; 25] = [
    -450.0, -450.0, -450.0, -450.0, -310.0, 390.0, -180.0, -140.0, -330.0, -330.0, 90.0, -460.0,
    -130.0, -300.0, 120.0, 120.0, 120.0, 10.0, 10.0, 10.0, 360.0, 360.0, 360.0, 260.0, 260.0,
];

pub const MATRIX_DIMS: [usize; 4] = [2, 10, 30, 50];
pub const COLUMNS: usize = 100;

const SHIFT_FILES: [&str; 7] = [
    "sphere_func_data.txt",
    "schwefel_102_func_data.txt",
    "high_cond_elliptic_rot_data.txt",
    "rosenbrock_func_data.txt",
    "griewank_func_data.txt",
    "ackley_func_data.txt",
    "rastrigin_func_data.txt",
];

const MATRIX_PREFIXES: [&str; 3] = ["elliptic_M_D", "griewank_M_D", "ackley_M_D"];

/// Deterministic shift coordinate, kept inside [-4, 4] so every function's
/// optimum lies in its search box
pub fn shift_value(file_index: usize, i: usize) -> f64 {
    (((i * 7 + file_index * 3) % 17) as f64 - 8.0) * 0.5
}

/// Cyclic permutation with alternating signs: orthogonal and not symmetric
pub fn rotation_value(d: usize, row: usize, col: usize) -> f64 {
    if col == (row + 1) % d {
        if row % 2 == 0 { 1.0 } else { -1.0 }
    } else {
        0.0
    }
}

fn write_rows(path: &Path, rows: impl Iterator<Item = Vec<f64>>) {
    let mut out = BufWriter::new(File::create(path).unwrap());
    for row in rows {
        let line: Vec<String> = row.iter().map(|v| format!("{:.7e}", v)).collect();
        writeln!(out, "{}", line.join(" ")).unwrap();
    }
}

/// Write a complete synthetic support data directory
pub fn support_data() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write_rows(&root.join("fbias_data.txt"), std::iter::once(BIASES.to_vec()));

    for (k, file) in SHIFT_FILES.iter().enumerate() {
        let row: Vec<f64> = (0..COLUMNS).map(|i| shift_value(k, i)).collect();
        write_rows(&root.join(file), std::iter::once(row));
    }

    for prefix in MATRIX_PREFIXES {
        for d in MATRIX_DIMS {
            let rows = (0..d).map(|r| (0..d).map(|c| rotation_value(d, r, c)).collect::<Vec<f64>>());
            write_rows(&root.join(format!("{}{}.txt", prefix, d)), rows);
        }
    }

    // Schwefel 2.6: optimum line followed by a dense matrix
    let para = (0..=COLUMNS).map(|r| {
        (0..COLUMNS)
            .map(|c| {
                if r == 0 {
                    shift_value(9, c) * 10.0
                } else {
                    (((r * 5 + c * 3) % 19) as f64 - 9.0) * 0.25
                }
            })
            .collect::<Vec<f64>>()
    });
    write_rows(&root.join("schwefel_206_para.txt"), para);

    dir
}

/// Benchmark reading from `dir` with a fixed noise seed
pub fn benchmark(dir: &TempDir, seed: u64) -> Benchmark {
    let config = BenchmarkConfigBuilder::new()
        .data_dir(dir.path())
        .seed(seed)
        .build();
    Benchmark::from_config(config).unwrap()
}
