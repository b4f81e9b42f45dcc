//! Sampled field distributions on 1-D and 2-D spatial grids.
//!
//! These are transient value types: constructed by the caller (or by
//! [`crate::mode`]), consumed by [`crate::overlap`], and never shared or
//! mutated. Constructors enforce the grid invariants — matching lengths,
//! at least two samples per axis, strictly increasing finite coordinates —
//! so the numerical routines can assume a well-formed grid throughout.
//!
//! Overlap computations assume co-registered grids: the two fields must be
//! sampled on *identical* coordinate sequences. Nothing here resamples or
//! interpolates onto a common grid.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::error::OpticsError;

/// A complex scalar field sampled on a strictly increasing 1-D grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledField {
    amplitude: Array1<Complex64>,
    coordinate: Array1<f64>,
}

impl SampledField {
    /// Construct a sampled field, validating the grid invariants.
    ///
    /// # Errors
    /// [`OpticsError::Domain`] if `amplitude` and `coordinate` differ in
    /// length, fewer than 2 samples are supplied, or `coordinate` is not
    /// strictly increasing and finite.
    pub fn new(
        amplitude: Array1<Complex64>,
        coordinate: Array1<f64>,
    ) -> Result<Self, OpticsError> {
        if amplitude.len() != coordinate.len() {
            return Err(OpticsError::Domain(format!(
                "amplitude has {} samples but coordinate has {}",
                amplitude.len(),
                coordinate.len()
            )));
        }
        check_axis("coordinate", &coordinate)?;
        Ok(Self {
            amplitude,
            coordinate,
        })
    }

    /// Construct from real-valued samples (imaginary parts set to zero).
    pub fn from_real(
        amplitude: Array1<f64>,
        coordinate: Array1<f64>,
    ) -> Result<Self, OpticsError> {
        Self::new(amplitude.mapv(Complex64::from), coordinate)
    }

    /// Complex amplitude samples.
    pub fn amplitude(&self) -> &Array1<Complex64> {
        &self.amplitude
    }

    /// Coordinate grid the samples live on.
    pub fn coordinate(&self) -> &Array1<f64> {
        &self.coordinate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.amplitude.len()
    }

    /// Always false: construction requires at least two samples.
    pub fn is_empty(&self) -> bool {
        self.amplitude.is_empty()
    }

    /// True when both fields are sampled on the identical coordinate grid.
    pub(crate) fn same_grid(&self, other: &Self) -> bool {
        self.coordinate == other.coordinate
    }
}

/// A complex scalar field sampled on a rectangular 2-D grid.
///
/// The amplitude grid is indexed `[row, col]` = `[y, x]`, matching the
/// row-major convention of [`Array2`].
#[derive(Debug, Clone, PartialEq)]
pub struct SampledField2D {
    amplitude: Array2<Complex64>,
    x: Array1<f64>,
    y: Array1<f64>,
}

impl SampledField2D {
    /// Construct a 2-D sampled field, validating the grid invariants.
    ///
    /// # Errors
    /// [`OpticsError::Domain`] if the grid shape does not match the axis
    /// lengths exactly, or either axis has fewer than 2 samples or is not
    /// strictly increasing and finite.
    pub fn new(
        amplitude: Array2<Complex64>,
        x: Array1<f64>,
        y: Array1<f64>,
    ) -> Result<Self, OpticsError> {
        if amplitude.ncols() != x.len() || amplitude.nrows() != y.len() {
            return Err(OpticsError::Domain(format!(
                "amplitude grid is {}x{} but axes are y={} by x={}",
                amplitude.nrows(),
                amplitude.ncols(),
                y.len(),
                x.len()
            )));
        }
        check_axis("x", &x)?;
        check_axis("y", &y)?;
        Ok(Self { amplitude, x, y })
    }

    /// Construct from real-valued samples (imaginary parts set to zero).
    pub fn from_real(
        amplitude: Array2<f64>,
        x: Array1<f64>,
        y: Array1<f64>,
    ) -> Result<Self, OpticsError> {
        Self::new(amplitude.mapv(Complex64::from), x, y)
    }

    /// Complex amplitude grid, indexed `[y, x]`.
    pub fn amplitude(&self) -> &Array2<Complex64> {
        &self.amplitude
    }

    /// Column (x) coordinate grid.
    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    /// Row (y) coordinate grid.
    pub fn y(&self) -> &Array1<f64> {
        &self.y
    }

    /// True when both fields are sampled on the identical (x, y) grids.
    pub(crate) fn same_grid(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// A coordinate axis must hold at least two strictly increasing finite values.
fn check_axis(name: &str, axis: &Array1<f64>) -> Result<(), OpticsError> {
    if axis.len() < 2 {
        return Err(OpticsError::Domain(format!(
            "{name} axis needs at least 2 samples for integration (got {})",
            axis.len()
        )));
    }
    if !axis[0].is_finite() {
        return Err(OpticsError::Domain(format!(
            "{name} axis contains a non-finite value at index 0"
        )));
    }
    for i in 1..axis.len() {
        if !axis[i].is_finite() {
            return Err(OpticsError::Domain(format!(
                "{name} axis contains a non-finite value at index {i}"
            )));
        }
        if axis[i] <= axis[i - 1] {
            return Err(OpticsError::Domain(format!(
                "{name} axis must be strictly increasing at index {i}"
            )));
        }
    }
    Ok(())
}
