//! geometry — distance metric and search-box primitives.
//!
//! Purpose
//! -------
//! Provide the two geometric building blocks the solver rests on: the
//! Euclidean distance between equal-length vectors and the axis-aligned
//! search box that random trial starts are drawn from.
//!
//! Key behaviors
//! -------------
//! - [`metric::euclidean`] measures both point-to-anchor distances and the
//!   residual norm over range vectors; shape faults surface as
//!   [`errors::GeometryError::DimensionMismatch`].
//! - [`bounds::SearchBox`] resolves the per-axis min/max envelope of anchors
//!   and optional seed points and samples uniform starts inside it through a
//!   caller-supplied RNG.
//!
//! Conventions
//! -----------
//! - Vectors are `ndarray` containers over `f64`; views are borrowed, never
//!   copied, by the metric.
//! - This module validates shapes only. Finiteness and domain constraints
//!   are enforced once, at the solver API boundary.
//! - Fallible operations return `GeometryResult<T>`; nothing here panics.

pub mod bounds;
pub mod errors;
pub mod metric;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::bounds::SearchBox;
pub use self::errors::{GeometryError, GeometryResult};
pub use self::metric::euclidean;
