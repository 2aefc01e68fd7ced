//! Validation helpers for multilateration inputs.
//!
//! This module centralizes the eager consistency checks performed at the API
//! boundary, before any trial runs:
//!
//! - **Option checks**: [`verify_step_size`], [`verify_time_budget`] ensure
//!   the numeric knobs are usable when provided.
//! - **Anchor validation**: [`validate_anchors`] enforces a non-empty matrix
//!   with at least one axis and finite coordinates.
//! - **Range validation**: [`validate_ranges`] enforces index alignment with
//!   the anchors and finite, non-negative values.
//! - **Seed validation**: [`validate_seed_points`] enforces the anchors'
//!   dimension and finite coordinates on extra bound points.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`SolveError`] variants with the first offending index, making higher-level
//! code more uniform and easier to debug.
use crate::solver::{
    errors::{SolveError, SolveResult},
    types::{Points, Ranges},
};

/// Validate the gradient step size α.
///
/// - Must be **finite** and **non-negative**.
/// - Zero is deliberately accepted: with α = 0 every trial records its
///   untouched random start on the first attempt, a degenerate mode the
///   solver preserves (see [`crate::solver::trial`]).
///
/// # Errors
/// Returns [`SolveError::InvalidStepSize`] if the value is non-finite or
/// negative.
pub fn verify_step_size(step_size: f64) -> SolveResult<()> {
    if !step_size.is_finite() {
        return Err(SolveError::InvalidStepSize {
            value: step_size,
            reason: "Step size must be finite.",
        });
    }
    if step_size < 0.0 {
        return Err(SolveError::InvalidStepSize {
            value: step_size,
            reason: "Step size must be non-negative.",
        });
    }
    Ok(())
}

/// Validate the optional per-trial wall-clock budget, in seconds.
///
/// - Accepts `None` (the driver derives `1 / trial_count`).
/// - If `Some`, the value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`SolveError::InvalidTimeBudget`] if the value is non-finite or
/// ≤ 0.0.
pub fn verify_time_budget(budget: Option<f64>) -> SolveResult<()> {
    if let Some(budget) = budget {
        if !budget.is_finite() {
            return Err(SolveError::InvalidTimeBudget {
                value: budget,
                reason: "Time budget must be finite.",
            });
        }
        if budget <= 0.0 {
            return Err(SolveError::InvalidTimeBudget {
                value: budget,
                reason: "Time budget must be positive.",
            });
        }
    }
    Ok(())
}

/// Validate the anchor matrix.
///
/// Checks:
/// - at least one anchor row,
/// - at least one coordinate axis,
/// - every coordinate finite (`NaN` or `±∞` are rejected).
///
/// # Errors
/// - [`SolveError::EmptyAnchorSet`] for a rowless matrix.
/// - [`SolveError::EmptyDimension`] for zero columns.
/// - [`SolveError::NonFiniteAnchor`] with the first offending row/axis/value.
pub fn validate_anchors(anchors: &Points) -> SolveResult<()> {
    if anchors.nrows() == 0 {
        return Err(SolveError::EmptyAnchorSet);
    }
    if anchors.ncols() == 0 {
        return Err(SolveError::EmptyDimension);
    }
    for ((row, axis), &value) in anchors.indexed_iter() {
        if !value.is_finite() {
            return Err(SolveError::NonFiniteAnchor { row, axis, value });
        }
    }
    Ok(())
}

/// Validate the measured range vector against the anchor matrix.
///
/// Checks:
/// - `ranges.len() == anchors.nrows()` (index alignment),
/// - every range finite and non-negative.
///
/// # Errors
/// - [`SolveError::RangeCountMismatch`] if lengths disagree.
/// - [`SolveError::InvalidRange`] with the index/value/reason of the first
///   offending element.
pub fn validate_ranges(anchors: &Points, ranges: &Ranges) -> SolveResult<()> {
    if ranges.len() != anchors.nrows() {
        return Err(SolveError::RangeCountMismatch {
            expected: anchors.nrows(),
            found: ranges.len(),
        });
    }
    for (index, &value) in ranges.iter().enumerate() {
        if !value.is_finite() {
            return Err(SolveError::InvalidRange {
                index,
                value,
                reason: "Ranges must be finite.",
            });
        }
        if value < 0.0 {
            return Err(SolveError::InvalidRange {
                index,
                value,
                reason: "Ranges must be non-negative.",
            });
        }
    }
    Ok(())
}

/// Validate explicit seed-bound points against the anchors' dimension.
///
/// # Errors
/// - [`SolveError::DimensionMismatch`] if the seed column count differs from
///   `dim`.
/// - [`SolveError::NonFiniteSeedPoint`] with the first offending
///   row/axis/value.
pub fn validate_seed_points(dim: usize, seeds: &Points) -> SolveResult<()> {
    if seeds.ncols() != dim {
        return Err(SolveError::DimensionMismatch { expected: dim, found: seeds.ncols() });
    }
    for ((row, axis), &value) in seeds.indexed_iter() {
        if !value.is_finite() {
            return Err(SolveError::NonFiniteSeedPoint { row, axis, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Acceptance and rejection behavior of every validation helper, with the
    //   reported indices checked on the first offending element.
    //
    // They intentionally DO NOT cover:
    // - End-to-end rejection through `solve`, which is exercised by the
    //   integration suite.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `verify_step_size` accepts positive and zero values and
    // rejects negative or non-finite values.
    //
    // Given
    // -----
    // - The values 1e-3, 0.0, -1.0, and NaN.
    //
    // Expect
    // ------
    // - The first two pass; the last two fail with `InvalidStepSize`.
    fn verify_step_size_boundaries() {
        // Act + Assert
        assert!(verify_step_size(1e-3).is_ok());
        assert!(verify_step_size(0.0).is_ok());
        assert!(matches!(
            verify_step_size(-1.0),
            Err(SolveError::InvalidStepSize { .. })
        ));
        assert!(matches!(
            verify_step_size(f64::NAN),
            Err(SolveError::InvalidStepSize { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify that `verify_time_budget` accepts None and positive values and
    // rejects zero, negative, and infinite budgets.
    //
    // Given
    // -----
    // - None, Some(0.5), Some(0.0), Some(-1.0), Some(inf).
    //
    // Expect
    // ------
    // - The first two pass; the rest fail with `InvalidTimeBudget`.
    fn verify_time_budget_boundaries() {
        // Act + Assert
        assert!(verify_time_budget(None).is_ok());
        assert!(verify_time_budget(Some(0.5)).is_ok());
        assert!(matches!(
            verify_time_budget(Some(0.0)),
            Err(SolveError::InvalidTimeBudget { .. })
        ));
        assert!(matches!(
            verify_time_budget(Some(-1.0)),
            Err(SolveError::InvalidTimeBudget { .. })
        ));
        assert!(matches!(
            verify_time_budget(Some(f64::INFINITY)),
            Err(SolveError::InvalidTimeBudget { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Ensure that `validate_anchors` rejects empty matrices and reports the
    // first non-finite coordinate.
    //
    // Given
    // -----
    // - A 0×2 matrix, a 2×0 matrix, and a 2×2 matrix with a NaN at (1, 0).
    //
    // Expect
    // ------
    // - `EmptyAnchorSet`, `EmptyDimension`, and `NonFiniteAnchor { row: 1,
    //   axis: 0 }` respectively.
    fn validate_anchors_rejects_bad_shapes_and_values() {
        // Arrange
        let rowless: Points = Array2::zeros((0, 2));
        let axisless: Points = Array2::zeros((2, 0));
        let tainted =
            Array2::from_shape_vec((2, 2), vec![0.0, 1.0, f64::NAN, 2.0]).unwrap();

        // Act + Assert
        assert_eq!(validate_anchors(&rowless).unwrap_err(), SolveError::EmptyAnchorSet);
        assert_eq!(validate_anchors(&axisless).unwrap_err(), SolveError::EmptyDimension);
        match validate_anchors(&tainted).unwrap_err() {
            SolveError::NonFiniteAnchor { row, axis, .. } => {
                assert_eq!(row, 1);
                assert_eq!(axis, 0);
            }
            other => panic!("expected NonFiniteAnchor, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure that `validate_ranges` enforces index alignment and the
    // finite/non-negative domain.
    //
    // Given
    // -----
    // - Two 2-D anchors with a 3-element range vector, then with a negative
    //   range at index 1.
    //
    // Expect
    // ------
    // - `RangeCountMismatch { expected: 2, found: 3 }`, then
    //   `InvalidRange { index: 1, .. }`.
    fn validate_ranges_rejects_misalignment_and_domain() {
        // Arrange
        let anchors = Array2::zeros((2, 2));
        let too_many = array![1.0, 2.0, 3.0];
        let negative = array![1.0, -0.5];

        // Act + Assert
        match validate_ranges(&anchors, &too_many).unwrap_err() {
            SolveError::RangeCountMismatch { expected, found } => {
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("expected RangeCountMismatch, got {other:?}"),
        }
        match validate_ranges(&anchors, &negative).unwrap_err() {
            SolveError::InvalidRange { index, value, .. } => {
                assert_eq!(index, 1);
                assert_eq!(value, -0.5);
            }
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure that `validate_seed_points` checks dimension and finiteness.
    //
    // Given
    // -----
    // - Expected dimension 3, a 1×2 seed matrix, and a 1×3 matrix containing
    //   +∞.
    //
    // Expect
    // ------
    // - `DimensionMismatch { expected: 3, found: 2 }`, then
    //   `NonFiniteSeedPoint` at (0, 2).
    fn validate_seed_points_rejects_shape_and_values() {
        // Arrange
        let narrow: Points = Array2::zeros((1, 2));
        let tainted =
            Array2::from_shape_vec((1, 3), vec![0.0, 0.0, f64::INFINITY]).unwrap();

        // Act + Assert
        match validate_seed_points(3, &narrow).unwrap_err() {
            SolveError::DimensionMismatch { expected, found } => {
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
        match validate_seed_points(3, &tainted).unwrap_err() {
            SolveError::NonFiniteSeedPoint { row, axis, .. } => {
                assert_eq!(row, 0);
                assert_eq!(axis, 2);
            }
            other => panic!("expected NonFiniteSeedPoint, got {other:?}"),
        }
    }
}
