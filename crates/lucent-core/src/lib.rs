//! # Lucent Core
//!
//! Closed-form and numerically integrated physical-optics calculations for
//! fiber and free-space optical systems: step-index fiber descriptors,
//! fundamental-mode field profiles, and the modal overlap integrals that
//! predict coupling efficiency between two field distributions.
//!
//! ## Architecture
//!
//! Everything in this crate is a pure function (or a method on an immutable
//! value type) over in-memory arrays. There is no shared state, no I/O and no
//! caching; every call is independently parallelisable across inputs. The one
//! genuinely numerical path is [`overlap`], which integrates sampled
//! complex-valued fields with composite Simpson quadrature ([`quadrature`]).
//!
//! ## Modules
//!
//! - [`types`] — Sampled field distributions on 1-D and 2-D grids.
//! - [`fiber`] — V-parameter, mode-field diameter, guided-mode counts.
//! - [`mode`] — Fundamental-mode intensity profiles and 2-D Gaussian fields.
//! - [`overlap`] — Modal overlap / mode-matching efficiency (1-D and 2-D).
//! - [`quadrature`] — Composite Simpson's rule over sampled data.
//! - [`gaussian`] — Paraxial Gaussian-beam relations.
//! - [`cavity`] — Fabry–Pérot etalon relations.
//! - [`error`] — The crate-wide error taxonomy.

pub mod cavity;
pub mod error;
pub mod fiber;
pub mod gaussian;
pub mod mode;
pub mod overlap;
pub mod quadrature;
pub mod types;

pub use error::OpticsError;
pub use types::{SampledField, SampledField2D};
