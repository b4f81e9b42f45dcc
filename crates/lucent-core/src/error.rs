//! Crate-wide error taxonomy.
//!
//! Every formula in this crate applies the same fail-fast policy: physical
//! inputs are validated at the point of computation and violations surface
//! immediately as a typed [`OpticsError`]. No formula silently returns NaN
//! or infinity. These are all deterministic input-validation failures; there
//! is no transient class and nothing is worth retrying.

use thiserror::Error;

/// Errors raised by the optics calculations.
#[derive(Debug, Error)]
pub enum OpticsError {
    /// A physical input (wavelength, radius, NA, ...) was non-positive or
    /// non-finite where strict positivity is required.
    #[error("Parameter `{name}` must be positive and finite (got {value})")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A formula was evaluated outside its mathematically valid domain.
    #[error("Domain error: {0}")]
    Domain(String),

    /// Two sampled fields passed to an overlap integral do not share
    /// coincident coordinate grids.
    #[error("Grid mismatch: {0}")]
    GridMismatch(String),

    /// A self-overlap integral evaluated to zero, so the normalised
    /// coupling efficiency is undefined.
    #[error("Division by zero: self-overlap integral of a zero-valued field")]
    DivisionByZero,
}

/// Validate that a physical parameter is strictly positive and finite.
pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<f64, OpticsError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(OpticsError::InvalidParameter { name, value })
    }
}
