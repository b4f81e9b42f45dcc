//! Modal overlap integrals: mode-matching / coupling efficiency between two
//! sampled field distributions.
//!
//! The 1-D efficiency follows the standard mode-matching convention:
//!
//! $$
//! \eta = \frac{\left|\int E_1^*(x)\,E_2(x)\,dx\right|^2}
//!             {\int |E_1(x)|^2\,dx \;\int |E_2(x)|^2\,dx}
//! $$
//!
//! and the 2-D form has the same structure with nested integrals over x and
//! y. Both fields must be sampled on the *identical* coordinate grid(s);
//! nothing here resamples or interpolates, and mismatched grids are rejected
//! with [`OpticsError::GridMismatch`].
//!
//! The denominator integrates the squared magnitude $|E|^2$ of each field.
//! For real-valued amplitudes this coincides with integrating the plain
//! square; for complex fields only the squared magnitude yields the physical
//! self-overlap normalisation, so η(E, E) = 1 for any non-zero field.
//!
//! # Reference
//! R. Paschotta, article on "mode matching" in the RP Photonics Encyclopedia.

use ndarray::{Array1, ArrayView1, ArrayView2};
use num_traits::Zero;
use rayon::prelude::*;
use std::ops::{Add, Mul};

use crate::error::OpticsError;
use crate::quadrature::simpson;
use crate::types::{SampledField, SampledField2D};

/// 1-D modal overlap (coupling efficiency) between two fields sampled on a
/// common grid.
///
/// The result is conventionally in [0, 1] for physically normalised fields
/// but is not clamped; imperfectly normalised inputs yield the computed
/// ratio as-is.
///
/// `_offset` is a transverse-shift placeholder retained for interface
/// compatibility; it is currently ignored. A rigid shift of one sampled grid
/// cannot express a sub-sample offset without interpolation, which this
/// routine deliberately does not perform.
///
/// # Errors
/// [`OpticsError::GridMismatch`] when the coordinate grids are not
/// identical; [`OpticsError::DivisionByZero`] when either field is
/// identically zero.
pub fn overlap_1d(
    field1: &SampledField,
    field2: &SampledField,
    _offset: f64,
) -> Result<f64, OpticsError> {
    if !field1.same_grid(field2) {
        return Err(OpticsError::GridMismatch(format!(
            "fields sampled on different grids ({} vs {} points)",
            field1.len(),
            field2.len()
        )));
    }
    let x = field1.coordinate().view();

    let cross: Array1<_> = field1
        .amplitude()
        .iter()
        .zip(field2.amplitude().iter())
        .map(|(e1, e2)| e1.conj() * e2)
        .collect();
    let numerator = simpson(cross.view(), x)?.norm_sqr();

    let norm1 = simpson(field1.amplitude().mapv(|e| e.norm_sqr()).view(), x)?;
    let norm2 = simpson(field2.amplitude().mapv(|e| e.norm_sqr()).view(), x)?;
    if norm1 == 0.0 || norm2 == 0.0 {
        return Err(OpticsError::DivisionByZero);
    }

    Ok(numerator / (norm1 * norm2))
}

/// 2-D modal overlap (coupling efficiency) between two fields sampled on a
/// common rectangular grid.
///
/// The double integral is composed as two sequential 1-D Simpson passes —
/// each row integrated over x, then the resulting column sequence over y —
/// so the discretisation-error characteristics match the 1-D routine and
/// each pass is independently testable. Rows are integrated in parallel.
///
/// `_offset` is the same no-op placeholder as in [`overlap_1d`].
///
/// # Errors
/// As [`overlap_1d`].
pub fn overlap_2d(
    field1: &SampledField2D,
    field2: &SampledField2D,
    _offset: f64,
) -> Result<f64, OpticsError> {
    if !field1.same_grid(field2) {
        return Err(OpticsError::GridMismatch(format!(
            "fields sampled on different grids ({}x{} vs {}x{} points)",
            field1.y().len(),
            field1.x().len(),
            field2.y().len(),
            field2.x().len()
        )));
    }
    let x = field1.x().view();
    let y = field1.y().view();

    let cross = {
        let mut grid = field1.amplitude().mapv(|e| e.conj());
        grid *= field2.amplitude();
        grid
    };
    let numerator = integrate_grid(cross.view(), x, y)?.norm_sqr();

    let norm1 = integrate_grid(field1.amplitude().mapv(|e| e.norm_sqr()).view(), x, y)?;
    let norm2 = integrate_grid(field2.amplitude().mapv(|e| e.norm_sqr()).view(), x, y)?;
    if norm1 == 0.0 || norm2 == 0.0 {
        return Err(OpticsError::DivisionByZero);
    }

    Ok(numerator / (norm1 * norm2))
}

/// Integrate a sampled surface over a rectangular grid, x first then y.
///
/// Each row (fixed y) is reduced to a scalar with 1-D Simpson over x; the
/// resulting sequence is then integrated over y. The outer loop is an
/// embarrassingly parallel map over rows.
fn integrate_grid<T>(
    grid: ArrayView2<'_, T>,
    x: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
) -> Result<T, OpticsError>
where
    T: Copy + Zero + Add<Output = T> + Mul<f64, Output = T> + Send + Sync,
{
    let row_integrals: Vec<T> = (0..grid.nrows())
        .into_par_iter()
        .map(|iy| simpson(grid.row(iy), x))
        .collect::<Result<_, _>>()?;
    simpson(Array1::from(row_integrals).view(), y)
}
