//! Composite Simpson's rule over sampled data.
//!
//! Real mode profiles handed to the overlap integrals are not always
//! analytic, so definite integrals are approximated from discrete samples.
//! The kernel here is composite Simpson quadrature generalised to unevenly
//! spaced abscissae: each pair of adjacent subintervals is integrated with
//! the quadratic through its three samples.
//!
//! When the number of subintervals is odd, the final interval is integrated
//! with the quadratic fitted through the last three samples, which keeps the
//! Simpson order of accuracy on the tail. Other compositions (averaging the
//! first/last-interval corrections, or a trapezoid tail) give results that
//! differ at the sample-count-dependent discretisation-error level.
//!
//! The kernel is generic over the sample type so one implementation serves
//! both real (`f64`) and complex ([`Complex64`](num_complex::Complex64))
//! integrands.

use ndarray::ArrayView1;
use num_traits::Zero;
use std::ops::{Add, Mul};

use crate::error::OpticsError;

/// Integrate sampled data with composite Simpson's rule.
///
/// # Arguments
/// * `samples` — Integrand values at each abscissa.
/// * `coordinate` — Strictly increasing abscissae, same length as `samples`.
///
/// # Errors
/// [`OpticsError::Domain`] if the lengths differ, fewer than 2 samples are
/// supplied, or the abscissae are not strictly increasing and finite.
///
/// With exactly 2 samples the single interval degrades to the trapezoid rule.
pub fn simpson<T>(
    samples: ArrayView1<'_, T>,
    coordinate: ArrayView1<'_, f64>,
) -> Result<T, OpticsError>
where
    T: Copy + Zero + Add<Output = T> + Mul<f64, Output = T>,
{
    let n = samples.len();
    if n != coordinate.len() {
        return Err(OpticsError::Domain(format!(
            "integrand has {} samples but {} abscissae",
            n,
            coordinate.len()
        )));
    }
    if n < 2 {
        return Err(OpticsError::Domain(format!(
            "integration needs at least 2 samples (got {n})"
        )));
    }
    if !coordinate[0].is_finite() {
        return Err(OpticsError::Domain(
            "abscissae contain a non-finite value at index 0".into(),
        ));
    }
    for i in 1..n {
        if !coordinate[i].is_finite() || coordinate[i] <= coordinate[i - 1] {
            return Err(OpticsError::Domain(format!(
                "abscissae must be strictly increasing and finite at index {i}"
            )));
        }
    }

    if n == 2 {
        let h = coordinate[1] - coordinate[0];
        return Ok((samples[0] + samples[1]) * (0.5 * h));
    }

    let mut acc = T::zero();

    // Quadratic through each triplet, integrated over both of its intervals.
    let mut i = 0;
    while i + 2 < n {
        let h0 = coordinate[i + 1] - coordinate[i];
        let h1 = coordinate[i + 2] - coordinate[i + 1];
        let hsum = h0 + h1;
        let w0 = hsum * (2.0 * h0 - h1) / (6.0 * h0);
        let w1 = hsum * hsum * hsum / (6.0 * h0 * h1);
        let w2 = hsum * (2.0 * h1 - h0) / (6.0 * h1);
        acc = acc + samples[i] * w0 + samples[i + 1] * w1 + samples[i + 2] * w2;
        i += 2;
    }

    // Odd number of subintervals: one interval left. Integrate the quadratic
    // through the last three samples over the final interval only.
    if i + 1 < n {
        let h0 = coordinate[n - 2] - coordinate[n - 3];
        let h1 = coordinate[n - 1] - coordinate[n - 2];
        let alpha = (2.0 * h1 * h1 + 3.0 * h0 * h1) / (6.0 * (h0 + h1));
        let beta = (h1 * h1 + 3.0 * h0 * h1) / (6.0 * h0);
        let gamma = -(h1 * h1 * h1) / (6.0 * h0 * (h0 + h1));
        acc = acc + samples[n - 1] * alpha + samples[n - 2] * beta + samples[n - 3] * gamma;
    }

    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{array, Array1};
    use num_complex::Complex64;

    #[test]
    fn test_simpson_exact_on_cubic_even_intervals() {
        // Simpson integrates cubics exactly on paired intervals.
        let x = Array1::linspace(0.0, 1.0, 5);
        let y = x.mapv(|v| v * v * v);
        let result = simpson(y.view(), x.view()).unwrap();
        assert_relative_eq!(result, 0.25, epsilon = 1e-14);
    }

    #[test]
    fn test_simpson_exact_on_quadratic_odd_intervals() {
        // The three-point tail correction is also quadratic-exact.
        let x = Array1::linspace(0.0, 1.0, 6); // 5 subintervals
        let y = x.mapv(|v| v * v);
        let result = simpson(y.view(), x.view()).unwrap();
        assert_relative_eq!(result, 1.0 / 3.0, epsilon = 1e-14);
    }

    #[test]
    fn test_simpson_exact_on_quadratic_uneven_grid() {
        // Uneven abscissae: a quadratic is still integrated exactly.
        let x = array![0.0, 0.1, 0.35, 0.5, 0.82, 1.0];
        let y = x.mapv(|v| 3.0 * v * v - v + 2.0);
        let result = simpson(y.view(), x.view()).unwrap();
        // Antiderivative: v^3 - v^2/2 + 2v
        assert_relative_eq!(result, 1.0 - 0.5 + 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_sine_converges() {
        let x = Array1::linspace(0.0, std::f64::consts::PI, 1001);
        let y = x.mapv(f64::sin);
        let result = simpson(y.view(), x.view()).unwrap();
        assert_relative_eq!(result, 2.0, epsilon = 1e-10);

        // Even sample count (odd subintervals) exercises the tail correction.
        let x = Array1::linspace(0.0, std::f64::consts::PI, 1000);
        let y = x.mapv(f64::sin);
        let result = simpson(y.view(), x.view()).unwrap();
        assert_relative_eq!(result, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_simpson_complex_integrand() {
        // ∫₀^π exp(ix) dx = 2i
        let x = Array1::linspace(0.0, std::f64::consts::PI, 501);
        let y = x.mapv(|v| Complex64::new(0.0, v).exp());
        let result = simpson(y.view(), x.view()).unwrap();
        assert_relative_eq!(result.re, 0.0, epsilon = 1e-10);
        assert_relative_eq!(result.im, 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_simpson_two_samples_is_trapezoid() {
        let x = array![0.0, 2.0];
        let y = array![1.0, 3.0];
        assert_relative_eq!(simpson(y.view(), x.view()).unwrap(), 4.0);
    }

    #[test]
    fn test_simpson_rejects_short_input() {
        let x = array![0.0];
        let y = array![1.0];
        assert!(matches!(
            simpson(y.view(), x.view()),
            Err(OpticsError::Domain(_))
        ));
    }

    #[test]
    fn test_simpson_rejects_unsorted_abscissae() {
        let x = array![0.0, 2.0, 1.0];
        let y = array![1.0, 1.0, 1.0];
        assert!(matches!(
            simpson(y.view(), x.view()),
            Err(OpticsError::Domain(_))
        ));
    }
}
