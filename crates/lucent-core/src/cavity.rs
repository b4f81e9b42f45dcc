//! Fabry–Pérot etalon relations.
//!
//! Free spectral range, cavity length and finesse of a two-mirror cavity,
//! plus the free spectral range of a grating order.
//!
//! # Reference
//! Wikipedia, "Fabry–Pérot interferometer"; R. Paschotta, article on
//! "finesse" in the RP Photonics Encyclopedia.

use crate::error::{check_positive, OpticsError};
use std::f64::consts::PI;

/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Free spectral range in frequency: $\Delta\nu = c / (2 n_g L)$.
///
/// `length` in metres, result in Hz.
pub fn fsr_frequency(group_index: f64, length: f64) -> Result<f64, OpticsError> {
    check_positive("group_index", group_index)?;
    check_positive("length", length)?;
    Ok(SPEED_OF_LIGHT / (2.0 * group_index * length))
}

/// Cavity length producing a given free spectral range in wavelength:
/// $L = \lambda_0^2 / (2 n_g\,\Delta\lambda \cos\theta)$.
///
/// `angle` is the beam angle to the cavity axis (radians).
///
/// # Errors
/// [`OpticsError::Domain`] when |θ| ≥ π/2 (no round trip).
pub fn cavity_length(
    centre_wavelength: f64,
    group_index: f64,
    fsr_wavelength: f64,
    angle: f64,
) -> Result<f64, OpticsError> {
    check_positive("centre_wavelength", centre_wavelength)?;
    check_positive("group_index", group_index)?;
    check_positive("fsr_wavelength", fsr_wavelength)?;
    let cos_theta = checked_cos(angle)?;
    Ok(centre_wavelength * centre_wavelength / (2.0 * group_index * fsr_wavelength * cos_theta))
}

/// Free spectral range in wavelength:
/// $\Delta\lambda = \lambda_0^2 / (2 n_g L \cos\theta)$.
pub fn fsr_wavelength(
    centre_wavelength: f64,
    group_index: f64,
    length: f64,
    angle: f64,
) -> Result<f64, OpticsError> {
    check_positive("centre_wavelength", centre_wavelength)?;
    check_positive("group_index", group_index)?;
    check_positive("length", length)?;
    let cos_theta = checked_cos(angle)?;
    Ok(centre_wavelength * centre_wavelength / (2.0 * group_index * length * cos_theta))
}

/// Finesse of a two-mirror cavity:
/// $F = \pi (R_1 R_2)^{1/4} / (1 - \sqrt{R_1 R_2})$.
///
/// When `r2` is `None` both mirrors share the reflectivity `r1`.
///
/// # Errors
/// [`OpticsError::Domain`] for a reflectivity outside (0, 1); at R = 1 the
/// finesse diverges.
pub fn finesse(r1: f64, r2: Option<f64>) -> Result<f64, OpticsError> {
    let r2 = r2.unwrap_or(r1);
    for (name, r) in [("r1", r1), ("r2", r2)] {
        if !r.is_finite() || r <= 0.0 || r >= 1.0 {
            return Err(OpticsError::Domain(format!(
                "mirror reflectivity {name} must lie in (0, 1), got {r}"
            )));
        }
    }
    let product = r1 * r2;
    Ok(PI * product.powf(0.25) / (1.0 - product.sqrt()))
}

/// Free spectral range of a grating spectrograph in order m:
/// $\Delta\lambda = \lambda / m$.
pub fn grating_order_fsr(wavelength: f64, order: u32) -> Result<f64, OpticsError> {
    check_positive("wavelength", wavelength)?;
    if order == 0 {
        return Err(OpticsError::Domain(
            "grating order must be at least 1".into(),
        ));
    }
    Ok(wavelength / f64::from(order))
}

fn checked_cos(angle: f64) -> Result<f64, OpticsError> {
    if !angle.is_finite() || angle.abs() >= PI / 2.0 {
        return Err(OpticsError::Domain(format!(
            "beam angle must satisfy |θ| < π/2, got {angle}"
        )));
    }
    Ok(angle.cos())
}
