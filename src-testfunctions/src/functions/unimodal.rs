//! Unimodal base functions
//!
//! Sphere, Schwefel's problem 1.2, the high conditioned elliptic function and
//! Rosenbrock's valley. Rosenbrock is multimodal for D > 3 but is grouped here
//! with the other smooth bowls, as in the CEC2005 report.

use ndarray::Array1;

/// Sphere function - sum of squares
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

/// Schwefel's problem 1.2 - sum of squared prefix sums
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn schwefel_102(x: &Array1<f64>) -> f64 {
    x.iter()
        .scan(0.0, |prefix, &xi| {
            *prefix += xi;
            Some(*prefix * *prefix)
        })
        .sum()
}

/// High conditioned elliptic function - condition number 10^6 across the axes
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn high_cond_elliptic(x: &Array1<f64>) -> f64 {
    let n = x.len();
    if n < 2 {
        return sphere(x);
    }
    let last = (n - 1) as f64;
    x.iter()
        .enumerate()
        .map(|(i, &xi)| 1.0e6_f64.powf(i as f64 / last) * xi * xi)
        .sum()
}

/// Rosenbrock function - narrow curved valley
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-100, 100]
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    x.iter()
        .zip(x.iter().skip(1))
        .map(|(&xi, &xnext)| {
            let t1 = xi * xi - xnext;
            let t2 = xi - 1.0;
            100.0 * t1 * t1 + t2 * t2
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_simple_unimodal_functions() {
        let x = Array1::zeros(5);
        assert_eq!(sphere(&x), 0.0);
        assert_eq!(schwefel_102(&x), 0.0);
        assert_eq!(high_cond_elliptic(&x), 0.0);
        assert_eq!(rosenbrock(&Array1::ones(5)), 0.0);
    }

    #[test]
    fn test_schwefel_102_is_not_sphere() {
        let x = array![1.0, 2.0, 3.0];
        // prefix sums 1, 3, 6
        assert_eq!(schwefel_102(&x), 1.0 + 9.0 + 36.0);
        assert_eq!(sphere(&x), 14.0);
    }

    #[test]
    fn test_rosenbrock_pairs() {
        let x = array![0.0, 0.0];
        assert_eq!(rosenbrock(&x), 1.0);
        // single coordinate has no adjacent pair
        assert_eq!(rosenbrock(&array![3.0]), 0.0);
        let x = array![2.0, 1.0, 0.0];
        // (4-1)^2*100 + 1 + (1-0)^2*100 + 0
        assert_eq!(rosenbrock(&x), 900.0 + 1.0 + 100.0);
    }

    #[test]
    fn test_high_cond_elliptic_weights() {
        let n = 3;
        let x = Array1::ones(n);
        // weights 1, 1e3, 1e6
        let expected = 1.0 + 1.0e3 + 1.0e6;
        assert!((high_cond_elliptic(&x) - expected).abs() / expected < 1e-12);
        assert_eq!(high_cond_elliptic(&array![2.0]), 4.0);
    }

    #[test]
    fn test_high_cond_elliptic_end_weights_exact() {
        for n in [2, 10, 30, 50] {
            let mut x = Array1::zeros(n);
            x[0] = 1.0;
            assert_eq!(high_cond_elliptic(&x), 1.0);
            x[0] = 0.0;
            x[n - 1] = 1.0;
            assert_eq!(high_cond_elliptic(&x), 1.0e6, "n = {}", n);
        }
    }
}
