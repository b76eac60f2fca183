//! Elementary transforms applied before a base function is evaluated
//!
//! `row_times_matrix` (x·A) and `matrix_times_column` (A·x) are transposes of
//! each other. Rotated CEC2005 functions use x·A; Schwefel 2.6 uses A·x.

use ndarray::{Array1, Array2};

/// Translate `x` so that `offset` becomes the origin: `y[i] = x[i] - offset[i]`
pub fn shift(x: &Array1<f64>, offset: &Array1<f64>) -> Array1<f64> {
    x - offset
}

/// Row vector times matrix: `y[i] = sum_j x[j] * a[j][i]`
pub fn row_times_matrix(x: &Array1<f64>, a: &Array2<f64>) -> Array1<f64> {
    x.dot(a)
}

/// Matrix times column vector: `y[i] = sum_j a[i][j] * x[j]`
pub fn matrix_times_column(a: &Array2<f64>, x: &Array1<f64>) -> Array1<f64> {
    a.dot(x)
}

/// Rotation as used by the shifted rotated family, same as [`row_times_matrix`]
pub fn rotate(x: &Array1<f64>, matrix: &Array2<f64>) -> Array1<f64> {
    row_times_matrix(x, matrix)
}
