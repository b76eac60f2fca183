//! Loading whitespace separated numeric rows from the support data files
//!
//! Every data file is a sequence of text lines, each holding floating point
//! tokens separated by whitespace. Rows may carry more tokens than requested
//! (the official files hold 100 columns); only the first `count` are parsed.

use crate::error::{BenchmarkError, Result};
use ndarray::{Array1, Array2};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read exactly one line and parse its first `count` tokens
pub fn load_row<R: BufRead>(reader: &mut R, count: usize) -> Result<Array1<f64>> {
    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(BenchmarkError::Read)?;
    if read == 0 {
        return Err(BenchmarkError::Format(
            "zero lines found, expected a row of numbers".to_string(),
        ));
    }

    let mut values = Vec::with_capacity(count);
    let mut tokens = line.split_whitespace();
    for i in 0..count {
        let token = tokens.next().ok_or_else(|| {
            BenchmarkError::Format(format!(
                "incorrect number of tokens: expected {}, found {}",
                count, i
            ))
        })?;
        let value = token.parse::<f64>().map_err(|e| {
            BenchmarkError::Format(format!("token {} ('{}') is not a number: {}", i, token, e))
        })?;
        values.push(value);
    }

    Ok(Array1::from_vec(values))
}

/// Read `rows` consecutive lines into a `rows x count` matrix
pub fn load_matrix<R: BufRead>(reader: &mut R, rows: usize, count: usize) -> Result<Array2<f64>> {
    let mut matrix = Array2::zeros((rows, count));
    for i in 0..rows {
        let row = load_row(reader, count)
            .map_err(|e| with_context(e, &format!("row {}", i + 1)))?;
        matrix.row_mut(i).assign(&row);
    }
    Ok(matrix)
}

/// Open `path` read only and load its first row
pub fn load_row_from_path(path: impl AsRef<Path>, count: usize) -> Result<Array1<f64>> {
    let path = path.as_ref();
    let mut reader = open(path)?;
    log::debug!("loading {} values from {}", count, path.display());
    load_row(&mut reader, count).map_err(|e| with_context(e, &path.display().to_string()))
}

/// Open `path` read only and load a `rows x count` matrix from its first lines
pub fn load_matrix_from_path(
    path: impl AsRef<Path>,
    rows: usize,
    count: usize,
) -> Result<Array2<f64>> {
    let path = path.as_ref();
    let mut reader = open(path)?;
    log::debug!("loading {}x{} matrix from {}", rows, count, path.display());
    load_matrix(&mut reader, rows, count).map_err(|e| with_context(e, &path.display().to_string()))
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| BenchmarkError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn with_context(err: BenchmarkError, context: &str) -> BenchmarkError {
    match err {
        BenchmarkError::Format(msg) => BenchmarkError::Format(format!("{}: {}", context, msg)),
        other => other,
    }
}
