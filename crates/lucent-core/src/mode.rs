//! Fundamental-mode field profiles.
//!
//! The guided fundamental mode of a single-mode fiber is well approximated
//! by a Gaussian whose 1/e² intensity diameter is the mode-field diameter.
//! This module generates sampled profiles over caller-supplied grids; the
//! results feed directly into [`crate::overlap`].

use ndarray::{Array1, Array2};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{check_positive, OpticsError};
use crate::types::{SampledField, SampledField2D};

/// Sampled fundamental-mode intensity profile:
///
/// $I(r) = I_\text{max}\,\exp(-2 r^2 / \mathrm{MFD}^2)$
///
/// Evaluated pointwise over `radial_coordinate`; a pure elementwise
/// transform with no side effects. The returned field carries real-valued
/// amplitude (zero imaginary parts).
///
/// # Errors
/// [`OpticsError::InvalidParameter`] for non-positive peak intensity or
/// mode-field diameter; [`OpticsError::Domain`] if the coordinate grid is
/// shorter than 2 samples or not strictly increasing.
pub fn single_mode_intensity(
    peak_intensity: f64,
    radial_coordinate: &Array1<f64>,
    mode_field_diameter: f64,
) -> Result<SampledField, OpticsError> {
    check_positive("peak_intensity", peak_intensity)?;
    check_positive("mode_field_diameter", mode_field_diameter)?;
    let mfd_sq = mode_field_diameter * mode_field_diameter;
    let intensity = radial_coordinate.mapv(|r| peak_intensity * (-2.0 * r * r / mfd_sq).exp());
    SampledField::from_real(intensity, radial_coordinate.clone())
}

/// A rotated elliptical Gaussian on a 2-D grid.
///
/// The canonical generator of 2-D test fields and measured-beam surrogates
/// for the 2-D overlap integral:
///
/// $g(x, y) = g_0 + A \exp\!\bigl(-(a\,\Delta x^2 + 2b\,\Delta x \Delta y + c\,\Delta y^2)\bigr)$
///
/// where the quadratic-form coefficients follow from the per-axis widths
/// `sigma` and the rotation `theta`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipticalGaussian {
    /// Peak amplitude A.
    pub amplitude: f64,
    /// Centre (x₀, y₀).
    pub centre: [f64; 2],
    /// Standard deviations (σₓ, σᵧ) along the principal axes.
    pub sigma: [f64; 2],
    /// Rotation of the principal axes (radians).
    pub theta: f64,
    /// Additive baseline g₀.
    pub baseline: f64,
}

impl EllipticalGaussian {
    /// An axis-aligned, zero-baseline Gaussian.
    pub fn symmetric(amplitude: f64, centre: [f64; 2], sigma: f64) -> Self {
        Self {
            amplitude,
            centre,
            sigma: [sigma, sigma],
            theta: 0.0,
            baseline: 0.0,
        }
    }

    /// Sample the Gaussian on the meshgrid of `x` and `y`.
    ///
    /// The resulting amplitude grid is indexed `[y, x]` to match
    /// [`SampledField2D`].
    pub fn sample(
        &self,
        x: &Array1<f64>,
        y: &Array1<f64>,
    ) -> Result<SampledField2D, OpticsError> {
        check_positive("amplitude", self.amplitude)?;
        check_positive("sigma_x", self.sigma[0])?;
        check_positive("sigma_y", self.sigma[1])?;

        let (sin_t, cos_t) = self.theta.sin_cos();
        let sin_2t = (2.0 * self.theta).sin();
        let sx2 = 2.0 * self.sigma[0] * self.sigma[0];
        let sy2 = 2.0 * self.sigma[1] * self.sigma[1];
        let a = cos_t * cos_t / sx2 + sin_t * sin_t / sy2;
        let b = -sin_2t / (2.0 * sx2) + sin_2t / (2.0 * sy2);
        let c = sin_t * sin_t / sx2 + cos_t * cos_t / sy2;

        let mut grid = Array2::<Complex64>::zeros((y.len(), x.len()));
        for (iy, &yv) in y.iter().enumerate() {
            let dy = yv - self.centre[1];
            for (ix, &xv) in x.iter().enumerate() {
                let dx = xv - self.centre[0];
                let g = self.baseline
                    + self.amplitude * (-(a * dx * dx + 2.0 * b * dx * dy + c * dy * dy)).exp();
                grid[[iy, ix]] = Complex64::from(g);
            }
        }
        SampledField2D::new(grid, x.clone(), y.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_intensity_peak_at_axis() {
        let r = Array1::linspace(-20e-6, 20e-6, 401);
        let field = single_mode_intensity(1.0, &r, 10.4e-6).unwrap();
        // Grid is symmetric with an odd count, so r = 0 is sampled.
        let peak = field.amplitude()[200];
        assert_relative_eq!(peak.re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(peak.im, 0.0);
    }

    #[test]
    fn test_intensity_falloff_follows_mfd() {
        // I(r) = I_max exp(-2r²/MFD²): 1/e² of the peak at r = MFD.
        let mfd = 10.4e-6;
        let r = Array1::from(vec![0.0, mfd / 2.0, mfd]);
        let field = single_mode_intensity(2.0, &r, mfd).unwrap();
        assert_relative_eq!(
            field.amplitude()[1].re,
            2.0 * (-0.5_f64).exp(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            field.amplitude()[2].re,
            2.0 * (-2.0_f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_intensity_rejects_nonpositive_mfd() {
        let r = Array1::linspace(-1.0, 1.0, 11);
        assert!(matches!(
            single_mode_intensity(1.0, &r, 0.0),
            Err(OpticsError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_elliptical_gaussian_peak_and_baseline() {
        let x = Array1::linspace(-5.0, 5.0, 101);
        let y = Array1::linspace(-5.0, 5.0, 101);
        let g = EllipticalGaussian {
            amplitude: 3.0,
            centre: [0.0, 0.0],
            sigma: [1.0, 2.0],
            theta: 0.0,
            baseline: 0.5,
        };
        let field = g.sample(&x, &y).unwrap();
        assert_relative_eq!(field.amplitude()[[50, 50]].re, 3.5, epsilon = 1e-12);
        // Far corner is essentially the baseline.
        assert_relative_eq!(field.amplitude()[[0, 0]].re, 0.5, epsilon = 1e-3);
    }

    #[test]
    fn test_rotation_by_right_angle_swaps_axes() {
        let x = Array1::linspace(-6.0, 6.0, 121);
        let y = Array1::linspace(-6.0, 6.0, 121);
        let upright = EllipticalGaussian {
            amplitude: 1.0,
            centre: [0.0, 0.0],
            sigma: [1.0, 2.0],
            theta: 0.0,
            baseline: 0.0,
        };
        let rotated = EllipticalGaussian {
            sigma: [2.0, 1.0],
            theta: std::f64::consts::FRAC_PI_2,
            ..upright
        };
        let a = upright.sample(&x, &y).unwrap();
        let b = rotated.sample(&x, &y).unwrap();
        for iy in 0..y.len() {
            for ix in 0..x.len() {
                assert_relative_eq!(
                    a.amplitude()[[iy, ix]].re,
                    b.amplitude()[[iy, ix]].re,
                    epsilon = 1e-10
                );
            }
        }
    }
}
