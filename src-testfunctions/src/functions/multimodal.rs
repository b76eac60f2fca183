//! Multimodal base functions
//!
//! These landscapes have many local minima. In the CEC2005 suite they are
//! shifted (and for Griewank and Ackley rotated) before evaluation.

use ndarray::Array1;
use std::f64::consts::{E, PI};

/// Griewank function - multimodal, the product term couples all coordinates
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-600, 600]
pub fn griewank(x: &Array1<f64>) -> f64 {
    let sum_squares: f64 = x.iter().map(|&xi| xi * xi / 4000.0).sum();
    let product_cos: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    sum_squares - product_cos + 1.0
}

/// Ackley function - nearly flat outer region with a deep hole at the center
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32, 32]
pub fn ackley(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|&xi| xi * xi).sum();
    let sum_cos: f64 = x.iter().map(|&xi| (2.0 * PI * xi).cos()).sum();

    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + E
}

/// Rastrigin function - highly multimodal, regular grid of local minima
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    x.iter()
        .map(|&xi| xi * xi - 10.0 * (2.0 * PI * xi).cos() + 10.0)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_minima_at_origin() {
        for n in [1, 2, 10, 30] {
            let x = Array1::zeros(n);
            assert_eq!(griewank(&x), 0.0);
            assert_eq!(rastrigin(&x), 0.0);
            assert!(ackley(&x).abs() < 1e-9, "ackley({}) = {}", n, ackley(&x));
        }
    }

    #[test]
    fn test_rastrigin_integer_points() {
        // cos(2*pi*k) = 1, so only the quadratic part remains
        let x = array![1.0, -2.0, 3.0];
        assert!((rastrigin(&x) - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_griewank_uses_one_based_divisor() {
        let x = array![0.0, PI * 2.0_f64.sqrt()];
        // cos(pi) = -1 for the second coordinate
        let expected = x[1] * x[1] / 4000.0 + 1.0 + 1.0;
        assert!((griewank(&x) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_ackley_positive_away_from_origin() {
        let x = array![0.5, -0.5, 1.5];
        assert!(ackley(&x) > 1.0);
    }
}
