//! Dispersion model trait.
//!
//! All glass models implement [`DispersionModel`], which returns the real
//! refractive index at a given vacuum wavelength. Coefficient fits are only
//! valid over the wavelength range they were fitted on; evaluation at a
//! mathematically invalid point (a resonance pole, or n² < 0) is an error.

use thiserror::Error;

/// Errors from dispersion models.
#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("Wavelength {wavelength_um} um is outside the valid domain of {model}: {reason}")]
    OutOfDomain {
        model: String,
        wavelength_um: f64,
        reason: String,
    },

    #[error("Refractive index must be positive and finite (got {0})")]
    InvalidIndex(f64),
}

/// Provides a wavelength-dependent refractive index.
pub trait DispersionModel: Send + Sync {
    /// Human-readable name of this glass.
    fn name(&self) -> &str;

    /// Refractive index at a vacuum wavelength in micrometres.
    fn refractive_index(&self, wavelength_um: f64) -> Result<f64, MaterialError>;
}
