//! Errors for the geometric primitives (distance metric and search box).
//!
//! This module defines a single error type, [`GeometryError`], shared by the
//! distance metric and the search-box resolver.
//!
//! ## Conventions
//! - **Indices and axes are 0-based**.
//! - Shape faults report the expected and found lengths so callers can
//!   surface them as input errors without re-deriving context.
//! - Higher layers (the solver API) convert these into their own error
//!   surface; this module never panics.

#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for geometric operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Error type for geometric primitives.
///
/// Variants cover vector-shape disagreements and degenerate point sets.
/// The error implements `Display`, `Error`, and converts to a Python
/// `ValueError` at PyO3 boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Two vectors that must share a length do not.
    DimensionMismatch { expected: usize, found: usize },

    /// A point set that must contain at least one point is empty.
    EmptyPointSet,

    /// A search box axis has its bounds out of order.
    InvalidBounds { axis: usize, lower: f64, upper: f64 },
}

impl std::error::Error for GeometryError {}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::DimensionMismatch { expected, found } => {
                write!(f, "Dimension mismatch: expected {expected}, found {found}")
            }
            GeometryError::EmptyPointSet => {
                write!(f, "Point set must contain at least one point")
            }
            GeometryError::InvalidBounds { axis, lower, upper } => {
                write!(f, "Invalid bounds on axis {axis}: lower {lower} exceeds upper {upper}")
            }
        }
    }
}

/// Convert a [`GeometryError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl std::convert::From<GeometryError> for PyErr {
    fn from(err: GeometryError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
