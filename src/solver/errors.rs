//! Errors for the multilateration solver (input validation, search-box
//! resolution, and estimate selection).
//!
//! This module defines a single error type, [`SolveError`], used across the
//! Python-facing API and the internal Rust core.
//!
//! ## Conventions
//! - **Indices, rows, and axes are 0-based**.
//! - Input validation fails fast: a `SolveError` from the API boundary means
//!   zero trials ran.
//! - Per-trial numerical faults (zero predicted range, expired time budget)
//!   are NOT errors; they degrade that one trial to
//!   [`TrialOutcome::Missing`](crate::solver::types::TrialOutcome) and the
//!   run continues. Only an entirely empty result table surfaces as
//!   [`SolveError::NoValidEstimate`].
use crate::geometry::errors::GeometryError;

#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for solver operations.
pub type SolveResult<T> = Result<T, SolveError>;

/// Unified error type for multilateration solving.
///
/// Variants cover eager input validation and the no-estimate terminal case.
/// The error implements `Display`, `Error`, and converts to a Python
/// `ValueError` for PyO3 boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    // ---- Input/data validation ----
    /// Anchor matrix has no rows.
    EmptyAnchorSet,

    /// Anchor points have zero coordinates per row.
    EmptyDimension,

    /// Range vector length does not match the anchor count.
    RangeCountMismatch { expected: usize, found: usize },

    /// An anchor coordinate is NaN/±inf.
    NonFiniteAnchor { row: usize, axis: usize, value: f64 },

    /// A measured range is invalid (non-finite or negative).
    InvalidRange { index: usize, value: f64, reason: &'static str },

    /// A seed-bound coordinate is NaN/±inf.
    NonFiniteSeedPoint { row: usize, axis: usize, value: f64 },

    /// Two shapes that must agree do not (seed dimension, range length).
    DimensionMismatch { expected: usize, found: usize },

    // ---- Options ----
    /// Step size must be finite and non-negative.
    InvalidStepSize { value: f64, reason: &'static str },

    /// Per-trial time budget must be finite and strictly positive.
    InvalidTimeBudget { value: f64, reason: &'static str },

    // ---- Selection ----
    /// Every trial outcome is Missing; there is nothing to select.
    NoValidEstimate { trials: usize },

    // ---- Fallback ----
    /// Wrapper for geometry faults with no direct counterpart.
    Geometry { text: String },
}

impl std::error::Error for SolveError {}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            SolveError::EmptyAnchorSet => {
                write!(f, "Anchor set must contain at least one anchor")
            }
            SolveError::EmptyDimension => {
                write!(f, "Anchor points must have at least one coordinate")
            }
            SolveError::RangeCountMismatch { expected, found } => {
                write!(f, "Range count mismatch: expected {expected}, found {found}")
            }
            SolveError::NonFiniteAnchor { row, axis, value } => {
                write!(f, "Non-finite anchor coordinate at row {row}, axis {axis}: {value}")
            }
            SolveError::InvalidRange { index, value, reason } => {
                write!(f, "Invalid range at index {index}: {value}: {reason}")
            }
            SolveError::NonFiniteSeedPoint { row, axis, value } => {
                write!(f, "Non-finite seed-bound coordinate at row {row}, axis {axis}: {value}")
            }
            SolveError::DimensionMismatch { expected, found } => {
                write!(f, "Dimension mismatch: expected {expected}, found {found}")
            }

            // ---- Options ----
            SolveError::InvalidStepSize { value, reason } => {
                write!(f, "Invalid step size {value}: {reason}")
            }
            SolveError::InvalidTimeBudget { value, reason } => {
                write!(f, "Invalid time budget {value}: {reason}")
            }

            // ---- Selection ----
            SolveError::NoValidEstimate { trials } => {
                write!(f, "No valid estimate: all {trials} trial(s) ended without an outcome")
            }

            // ---- Fallback ----
            SolveError::Geometry { text } => {
                write!(f, "Geometry error: {text}")
            }
        }
    }
}

/// Promote internal geometry faults to the solver's input-error surface.
///
/// Shape disagreements become [`SolveError::DimensionMismatch`] and an empty
/// point set becomes [`SolveError::EmptyAnchorSet`]; anything else is wrapped
/// verbatim.
impl From<GeometryError> for SolveError {
    fn from(err: GeometryError) -> Self {
        match err {
            GeometryError::DimensionMismatch { expected, found } => {
                SolveError::DimensionMismatch { expected, found }
            }
            GeometryError::EmptyPointSet => SolveError::EmptyAnchorSet,
            other => SolveError::Geometry { text: other.to_string() },
        }
    }
}

/// Convert a [`SolveError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<SolveError> for PyErr {
    fn from(err: SolveError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
