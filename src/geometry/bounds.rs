//! Axis-aligned search box resolved from anchor and seed points.
//!
//! Purpose
//! -------
//! Provide a small, validated container for the region in which random trial
//! starts are drawn. The box is the per-axis min/max envelope of the anchor
//! positions together with any extra seed points supplied to widen it.
//!
//! Key behaviors
//! -------------
//! - Construct a [`SearchBox`] from a non-empty anchor matrix and optional
//!   seed points via [`SearchBox::from_points`], enforcing equal dimensions.
//! - Sample a uniform point inside the box per axis via [`SearchBox::sample`],
//!   through any caller-supplied [`Rng`] so draws stay reproducible.
//! - Tolerate degenerate axes (`lower == upper`): sampling returns the exact
//!   shared coordinate instead of rejecting the empty interval.
//!
//! Invariants & assumptions
//! ------------------------
//! - `lower.len() == upper.len()` and `lower[d] <= upper[d]` for every axis.
//! - Seed points widen the envelope only; they are never treated as anchors.
//! - Finiteness of coordinates is validated at the solver API boundary, not
//!   here.
use crate::geometry::errors::{GeometryError, GeometryResult};
use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::Rng;

/// SearchBox — the axis-aligned region random trial starts are drawn from.
///
/// Fields
/// ------
/// - `lower`: per-axis minimum over anchors ∪ seed points.
/// - `upper`: per-axis maximum over anchors ∪ seed points.
///
/// Invariants
/// ----------
/// - `lower.len() == upper.len()`.
/// - `lower[d] <= upper[d]` for every axis `d`; equality is permitted and
///   collapses sampling on that axis to the shared value.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchBox {
    /// Per-axis lower bound.
    pub lower: Array1<f64>,
    /// Per-axis upper bound.
    pub upper: Array1<f64>,
}

impl SearchBox {
    /// Construct a validated box from explicit per-axis bounds.
    ///
    /// # Errors
    /// - [`GeometryError::DimensionMismatch`] when the bound vectors differ in
    ///   length.
    /// - [`GeometryError::InvalidBounds`] when `lower[d] > upper[d]` on any
    ///   axis, reporting the first offending axis.
    pub fn new(lower: Array1<f64>, upper: Array1<f64>) -> GeometryResult<Self> {
        if lower.len() != upper.len() {
            return Err(GeometryError::DimensionMismatch {
                expected: lower.len(),
                found: upper.len(),
            });
        }
        for (axis, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if lo > hi {
                return Err(GeometryError::InvalidBounds { axis, lower: lo, upper: hi });
            }
        }
        Ok(SearchBox { lower, upper })
    }

    /// Resolve the box enclosing the anchors and any extra seed points.
    ///
    /// # Behavior
    /// For every axis `d`, `lower[d]` is the minimum coordinate over all rows
    /// of `anchors` and `seeds`, and `upper[d]` the maximum. Seed points only
    /// widen the envelope.
    ///
    /// # Errors
    /// - [`GeometryError::EmptyPointSet`] when `anchors` has no rows.
    /// - [`GeometryError::DimensionMismatch`] when `seeds` has a different
    ///   column count than `anchors`.
    pub fn from_points(
        anchors: &ArrayView2<'_, f64>, seeds: Option<&ArrayView2<'_, f64>>,
    ) -> GeometryResult<Self> {
        if anchors.nrows() == 0 {
            return Err(GeometryError::EmptyPointSet);
        }
        let dim = anchors.ncols();
        if let Some(seeds) = seeds {
            if seeds.ncols() != dim {
                return Err(GeometryError::DimensionMismatch {
                    expected: dim,
                    found: seeds.ncols(),
                });
            }
        }

        let mut lower = anchors.row(0).to_owned();
        let mut upper = anchors.row(0).to_owned();
        for j in 1..anchors.nrows() {
            envelope(&mut lower, &mut upper, anchors.row(j));
        }
        if let Some(seeds) = seeds {
            for j in 0..seeds.nrows() {
                envelope(&mut lower, &mut upper, seeds.row(j));
            }
        }
        Ok(SearchBox { lower, upper })
    }

    /// Number of axes the box spans.
    pub fn dim(&self) -> usize {
        self.lower.len()
    }

    /// Draw a uniform point inside the box, one independent draw per axis.
    ///
    /// Degenerate axes (`lower == upper`) yield the shared coordinate without
    /// consuming randomness, so a fully collapsed box always returns its
    /// single point.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
        Array1::from_iter(self.lower.iter().zip(self.upper.iter()).map(|(&lo, &hi)| {
            if lo < hi {
                rng.gen_range(lo..hi)
            } else {
                lo
            }
        }))
    }
}

/// Fold one point into the running per-axis envelope.
fn envelope(lower: &mut Array1<f64>, upper: &mut Array1<f64>, row: ArrayView1<'_, f64>) {
    for (axis, &value) in row.iter().enumerate() {
        if value < lower[axis] {
            lower[axis] = value;
        }
        if value > upper[axis] {
            upper[axis] = value;
        }
    }
}
