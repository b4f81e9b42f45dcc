//! Hoya power-series dispersion.
//!
//! Hoya catalogues express glass dispersion as an even power series:
//!
//! $n^2(\lambda) = A_0 + A_1\lambda^2 + A_2\lambda^{-2} + A_3\lambda^{-4}
//!               + A_4\lambda^{-6} + A_5\lambda^{-8}$
//!
//! with λ in micrometres.

use serde::{Deserialize, Serialize};

use crate::provider::{DispersionModel, MaterialError};

/// A glass described by Hoya power-series coefficients A₀..A₅.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hoya {
    name: String,
    a: [f64; 6],
}

impl Hoya {
    pub fn new(name: impl Into<String>, a: [f64; 6]) -> Self {
        Self {
            name: name.into(),
            a,
        }
    }
}

impl DispersionModel for Hoya {
    fn name(&self) -> &str {
        &self.name
    }

    fn refractive_index(&self, wavelength_um: f64) -> Result<f64, MaterialError> {
        if !wavelength_um.is_finite() || wavelength_um <= 0.0 {
            return Err(MaterialError::OutOfDomain {
                model: self.name.clone(),
                wavelength_um,
                reason: "wavelength must be positive and finite".into(),
            });
        }
        let l2 = wavelength_um * wavelength_um;
        let inv = 1.0 / l2;
        let n_sq = self.a[0]
            + self.a[1] * l2
            + self.a[2] * inv
            + self.a[3] * inv * inv
            + self.a[4] * inv * inv * inv
            + self.a[5] * inv * inv * inv * inv;
        if !n_sq.is_finite() || n_sq <= 0.0 {
            return Err(MaterialError::OutOfDomain {
                model: self.name.clone(),
                wavelength_um,
                reason: format!("fit gives n^2 = {n_sq}"),
            });
        }
        Ok(n_sq.sqrt())
    }
}
