//! Sellmeier dispersion.
//!
//! The three-term Sellmeier equation fits the refractive index of optical
//! glasses across the visible and near-infrared:
//!
//! $n^2(\lambda) = 1 + \sum_{i=1}^{3} \frac{B_i \lambda^2}{\lambda^2 - C_i}$
//!
//! with λ in micrometres and the Cᵢ in µm².

use serde::{Deserialize, Serialize};

use crate::provider::{DispersionModel, MaterialError};

/// A glass described by three-term Sellmeier coefficients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sellmeier {
    name: String,
    /// B coefficients (dimensionless).
    b: [f64; 3],
    /// C coefficients (µm²).
    c: [f64; 3],
}

impl Sellmeier {
    pub fn new(name: impl Into<String>, b: [f64; 3], c: [f64; 3]) -> Self {
        Self {
            name: name.into(),
            b,
            c,
        }
    }

    /// Schott N-BK7 borosilicate crown (Schott catalogue coefficients).
    pub fn bk7() -> Self {
        Self::new(
            "N-BK7",
            [1.039_612_12, 0.231_792_344, 1.010_469_45],
            [0.006_000_698_67, 0.020_017_914_4, 103.560_653],
        )
    }

    /// Fused silica (Malitson 1965).
    pub fn fused_silica() -> Self {
        Self::new(
            "SiO2",
            [0.696_166_3, 0.407_942_6, 0.897_479_4],
            [0.004_679_148, 0.013_512_063, 97.934_003],
        )
    }
}

impl DispersionModel for Sellmeier {
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
        let mut n_sq = 1.0;
        for (b, c) in self.b.iter().zip(self.c.iter()) {
            let denom = l2 - c;
            if denom.abs() < f64::EPSILON * l2.max(*c) {
                return Err(MaterialError::OutOfDomain {
                    model: self.name.clone(),
                    wavelength_um,
                    reason: format!("resonance pole at C = {c} um^2"),
                });
            }
            n_sq += b * l2 / denom;
        }
        if n_sq <= 0.0 {
            return Err(MaterialError::OutOfDomain {
                model: self.name.clone(),
                wavelength_um,
                reason: format!("fit gives n^2 = {n_sq}"),
            });
        }
        Ok(n_sq.sqrt())
    }
}
