//! Scalar descriptors of a step-index fiber.
//!
//! # Reference
//! Marcuse, "Loss analysis of single-mode fibre splices",
//! *Bell Syst. Tech. J.* **56**, 703 (1977), for the mode-field-diameter fit.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{check_positive, OpticsError};

/// LP₁₁ cutoff: below this V-parameter a step-index fiber guides only the
/// fundamental mode. Computed, never enforced, by this crate.
pub const SINGLE_MODE_CUTOFF_V: f64 = 2.405;

/// Normalised frequency (V-parameter) of a step-index fiber.
///
/// $V = 2\pi a \, \mathrm{NA} / \lambda$
///
/// All lengths must share one unit.
///
/// # Errors
/// [`OpticsError::InvalidParameter`] if any input is non-positive or
/// non-finite.
pub fn v_parameter(
    wavelength: f64,
    core_radius: f64,
    numerical_aperture: f64,
) -> Result<f64, OpticsError> {
    check_positive("wavelength", wavelength)?;
    check_positive("core_radius", core_radius)?;
    check_positive("numerical_aperture", numerical_aperture)?;
    Ok(2.0 * PI * core_radius * numerical_aperture / wavelength)
}

/// Mode-field diameter at 1/e² intensity, from the Marcuse fit:
///
/// $\mathrm{MFD} = 2a\,(0.65 + 1.619\,V^{-3/2} + 2.879\,V^{-6})$
///
/// The fit is empirical and accurate for V roughly in [1.2, 2.4]; outside
/// that range accuracy degrades but no error is raised. As V → 0⁺ the
/// result diverges; as V → ∞ it approaches 1.3·a.
///
/// # Errors
/// [`OpticsError::InvalidParameter`] for a non-positive core radius,
/// [`OpticsError::Domain`] for V ≤ 0 (the fit divides by powers of V).
pub fn mode_field_diameter(core_radius: f64, v: f64) -> Result<f64, OpticsError> {
    check_positive("core_radius", core_radius)?;
    if !v.is_finite() || v <= 0.0 {
        return Err(OpticsError::Domain(format!(
            "mode-field diameter requires V > 0 (got {v})"
        )));
    }
    Ok(2.0 * core_radius * (0.65 + 1.619 * v.powf(-1.5) + 2.879 * v.powi(-6)))
}

/// Approximate number of guided modes of a step-index fiber, $M = V^2/4$.
///
/// Polarisation degeneracy is not included.
pub fn mode_count_step_index(v: f64) -> Result<f64, OpticsError> {
    check_positive("v", v)?;
    Ok(v * v / 4.0)
}

/// Approximate number of modes needed to capture seeing-limited light from a
/// circular telescope aperture:
///
/// $M = \left(\pi \chi D / 4\lambda\right)^2$
///
/// with the seeing angle χ converted from arcseconds to radians. Lengths in
/// metres. Polarisation degeneracy is not included.
pub fn mode_count_seeing_limited(
    seeing_arcsec: f64,
    wavelength: f64,
    aperture_diameter: f64,
) -> Result<f64, OpticsError> {
    check_positive("seeing_arcsec", seeing_arcsec)?;
    check_positive("wavelength", wavelength)?;
    check_positive("aperture_diameter", aperture_diameter)?;
    let chi = (seeing_arcsec / 3600.0).to_radians();
    let m = PI * chi * aperture_diameter / (4.0 * wavelength);
    Ok(m * m)
}

/// Geometry and illumination of a step-index fiber.
///
/// Construct through [`FiberGeometry::new`], which validates that all three
/// parameters are positive and finite; the derived-quantity methods can then
/// assume a physically meaningful fiber.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiberGeometry {
    /// Operating wavelength (same length unit as `core_radius`).
    pub wavelength: f64,
    /// Core radius.
    pub core_radius: f64,
    /// Numerical aperture.
    pub numerical_aperture: f64,
}

impl FiberGeometry {
    /// Create a validated fiber geometry.
    pub fn new(
        wavelength: f64,
        core_radius: f64,
        numerical_aperture: f64,
    ) -> Result<Self, OpticsError> {
        check_positive("wavelength", wavelength)?;
        check_positive("core_radius", core_radius)?;
        check_positive("numerical_aperture", numerical_aperture)?;
        Ok(Self {
            wavelength,
            core_radius,
            numerical_aperture,
        })
    }

    /// Normalised frequency of this fiber. Positive inputs guarantee V > 0.
    pub fn v_parameter(&self) -> f64 {
        2.0 * PI * self.core_radius * self.numerical_aperture / self.wavelength
    }

    /// Mode-field diameter at 1/e² intensity (Marcuse fit).
    pub fn mode_field_diameter(&self) -> f64 {
        let v = self.v_parameter();
        2.0 * self.core_radius * (0.65 + 1.619 * v.powf(-1.5) + 2.879 * v.powi(-6))
    }

    /// True when V is below the LP₁₁ cutoff (fundamental mode only).
    pub fn is_single_mode(&self) -> bool {
        self.v_parameter() < SINGLE_MODE_CUTOFF_V
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_v_parameter_unit_case() {
        // V = 2π·a·NA/λ with a = 1/2π, NA = 1, λ = 1 gives exactly 1.
        let v = v_parameter(1.0, 1.0 / (2.0 * PI), 1.0).unwrap();
        assert_relative_eq!(v, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_v_parameter_scaling() {
        let v = v_parameter(1.55e-6, 4.1e-6, 0.13).unwrap();
        assert_relative_eq!(
            v_parameter(1.55e-6, 2.0 * 4.1e-6, 0.13).unwrap(),
            2.0 * v,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            v_parameter(1.55e-6, 4.1e-6, 2.0 * 0.13).unwrap(),
            2.0 * v,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            v_parameter(2.0 * 1.55e-6, 4.1e-6, 0.13).unwrap(),
            v / 2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_v_parameter_rejects_nonpositive_wavelength() {
        assert!(matches!(
            v_parameter(0.0, 4.1e-6, 0.13),
            Err(OpticsError::InvalidParameter {
                name: "wavelength",
                ..
            })
        ));
    }

    #[test]
    fn test_mfd_known_value() {
        // MFD(a=5e-6, V=2) = 2·5e-6·(0.65 + 1.619/2^1.5 + 2.879/2^6)
        let expected = 2.0 * 5e-6 * (0.65 + 1.619 / 2.0_f64.powf(1.5) + 2.879 / 64.0);
        let mfd = mode_field_diameter(5e-6, 2.0).unwrap();
        assert_relative_eq!(mfd, expected, epsilon = 1e-9);
        assert_relative_eq!(mfd, 1.26741e-5, max_relative = 1e-4);
    }

    #[test]
    fn test_mfd_monotonically_decreasing_above_v_one() {
        let a = 4.1e-6;
        let mut prev = mode_field_diameter(a, 1.0).unwrap();
        for i in 1..200 {
            let v = 1.0 + 0.05 * i as f64;
            let mfd = mode_field_diameter(a, v).unwrap();
            assert!(mfd < prev, "MFD must decrease with V (V = {v})");
            prev = mfd;
        }
    }

    #[test]
    fn test_mfd_approaches_asymptote_at_large_v() {
        let a = 4.1e-6;
        assert_relative_eq!(
            mode_field_diameter(a, 1e6).unwrap(),
            1.3 * a,
            max_relative = 1e-8
        );
    }

    #[test]
    fn test_mfd_diverges_as_v_approaches_zero() {
        let a = 4.1e-6;
        let mut prev = mode_field_diameter(a, 1e-1).unwrap();
        for &v in &[1e-2, 1e-3, 1e-4] {
            let mfd = mode_field_diameter(a, v).unwrap();
            assert!(mfd > prev, "MFD must blow up as V → 0 (V = {v})");
            assert!(mfd.is_finite());
            prev = mfd;
        }
    }

    #[test]
    fn test_mfd_rejects_zero_v() {
        assert!(matches!(
            mode_field_diameter(5e-6, 0.0),
            Err(OpticsError::Domain(_))
        ));
    }

    #[test]
    fn test_geometry_single_mode_classification() {
        // SMF-28-like at 1550 nm: V ≈ 2.0, single-moded.
        let smf = FiberGeometry::new(1.55e-6, 4.1e-6, 0.12).unwrap();
        assert!(smf.v_parameter() < SINGLE_MODE_CUTOFF_V);
        assert!(smf.is_single_mode());

        // Same fiber at 633 nm is multimode.
        let red = FiberGeometry::new(633e-9, 4.1e-6, 0.12).unwrap();
        assert!(!red.is_single_mode());
    }

    #[test]
    fn test_geometry_matches_free_functions() {
        let g = FiberGeometry::new(1.55e-6, 4.1e-6, 0.12).unwrap();
        let v = v_parameter(g.wavelength, g.core_radius, g.numerical_aperture).unwrap();
        assert_relative_eq!(g.v_parameter(), v);
        assert_relative_eq!(
            g.mode_field_diameter(),
            mode_field_diameter(g.core_radius, v).unwrap()
        );
    }

    #[test]
    fn test_mode_counts() {
        assert_relative_eq!(mode_count_step_index(4.0).unwrap(), 4.0);
        // χ = 1 arcsec, D = 0.7 m, λ = 0.5 µm
        let m = mode_count_seeing_limited(1.0, 0.5e-6, 0.7).unwrap();
        let chi = (1.0 / 3600.0_f64).to_radians();
        let expected = (PI * chi * 0.7 / (4.0 * 0.5e-6)).powi(2);
        assert_relative_eq!(m, expected, max_relative = 1e-12);
    }
}
