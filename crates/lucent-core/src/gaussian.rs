//! Paraxial Gaussian-beam relations.
//!
//! Closed-form expressions for the free-space propagation of a fundamental
//! Gaussian beam: divergence, Rayleigh distance, spot size and wavefront
//! curvature. All beam radii are 1/e² intensity radii.

use crate::error::{check_positive, OpticsError};
use std::f64::consts::PI;

/// Far-field half-angle divergence (paraxial):
/// $\theta = \lambda / (\pi n w_0)$.
pub fn beam_divergence(
    wavelength: f64,
    refractive_index: f64,
    waist_radius: f64,
) -> Result<f64, OpticsError> {
    check_positive("wavelength", wavelength)?;
    check_positive("refractive_index", refractive_index)?;
    check_positive("waist_radius", waist_radius)?;
    Ok(wavelength / (PI * refractive_index * waist_radius))
}

/// Rayleigh distance: $z_R = \pi w_0^2 n / \lambda$.
pub fn rayleigh_distance(
    waist_radius: f64,
    refractive_index: f64,
    wavelength: f64,
) -> Result<f64, OpticsError> {
    check_positive("waist_radius", waist_radius)?;
    check_positive("refractive_index", refractive_index)?;
    check_positive("wavelength", wavelength)?;
    Ok(PI * waist_radius * waist_radius * refractive_index / wavelength)
}

/// Wavefront radius of curvature: $R(z) = z\,(1 + (z_R/z)^2)$.
///
/// # Errors
/// [`OpticsError::Domain`] at z = 0, where the wavefront is flat and the
/// curvature radius is infinite.
pub fn radius_of_curvature(z: f64, rayleigh: f64) -> Result<f64, OpticsError> {
    check_positive("rayleigh", rayleigh)?;
    if !z.is_finite() || z == 0.0 {
        return Err(OpticsError::Domain(format!(
            "radius of curvature is undefined at z = {z} (flat wavefront at the waist)"
        )));
    }
    Ok(z * (1.0 + (rayleigh / z).powi(2)))
}

/// 1/e² beam radius along the propagation axis, measured from the waist:
/// $w(z) = w_0 \sqrt{1 + (z/z_R)^2}$.
///
/// `z` may be negative (either side of the waist).
pub fn beam_size(waist_radius: f64, z: f64, rayleigh: f64) -> Result<f64, OpticsError> {
    check_positive("waist_radius", waist_radius)?;
    check_positive("rayleigh", rayleigh)?;
    if !z.is_finite() {
        return Err(OpticsError::InvalidParameter { name: "z", value: z });
    }
    Ok(waist_radius * (1.0 + (z / rayleigh).powi(2)).sqrt())
}

/// Convert a FWHM width to the corresponding 1/e² Gaussian width:
/// divide by $\sqrt{2 \ln 2}$.
pub fn fwhm_to_e2(fwhm: f64) -> Result<f64, OpticsError> {
    check_positive("fwhm", fwhm)?;
    Ok(fwhm / (2.0 * 2.0_f64.ln()).sqrt())
}
