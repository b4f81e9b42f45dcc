//! # Lucent Materials
//!
//! Glass dispersion models for the Lucent framework. All models implement
//! the [`DispersionModel`](provider::DispersionModel) trait, which returns
//! wavelength-dependent refractive indices.
//!
//! ## Available models
//!
//! | Model | Module | Form |
//! |-------|--------|------|
//! | Sellmeier | [`sellmeier`] | n² = 1 + Σ Bᵢλ²/(λ² − Cᵢ) |
//! | Hoya power series | [`hoya`] | n² = A₀ + A₁λ² + A₂λ⁻² + ... + A₅λ⁻⁸ |
//!
//! [`fresnel`] adds the normal-incidence reflectance of an interface
//! between two media of known index.

pub mod fresnel;
pub mod hoya;
pub mod provider;
pub mod sellmeier;

pub use provider::{DispersionModel, MaterialError};
