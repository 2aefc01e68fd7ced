//! Euclidean distance between equal-length vectors.
//!
//! The metric serves double duty in this crate: it measures point-to-anchor
//! distances in D-dimensional space and the residual norm over N-length range
//! vectors. Both uses share the same contract — equal lengths in, a
//! non-negative scalar out.
use crate::geometry::errors::{GeometryError, GeometryResult};
use ndarray::ArrayView1;

/// Euclidean norm of the difference between two vectors.
///
/// # Behavior
/// - Computes `sqrt(Σ_d (a[d] − b[d])²)` over the shared length.
/// - Performs no allocation; the accumulation is a single pass.
///
/// # Errors
/// Returns [`GeometryError::DimensionMismatch`] when `a.len() != b.len()`.
/// No other failure mode exists; finiteness of the inputs is the caller's
/// concern.
pub fn euclidean(a: &ArrayView1<'_, f64>, b: &ArrayView1<'_, f64>) -> GeometryResult<f64> {
    if a.len() != b.len() {
        return Err(GeometryError::DimensionMismatch { expected: a.len(), found: b.len() });
    }
    let mut acc = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        let diff = x - y;
        acc += diff * diff;
    }
    Ok(acc.sqrt())
}
