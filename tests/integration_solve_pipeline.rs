//! Integration tests for the multilateration solve pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end pipeline: from validated anchors and ranges,
//!   through search-box resolution and random-restart descent, to best-trial
//!   selection and the diagnostic outcome table.
//! - Exercise realistic geometries (planar squares and the four-anchor
//!   ceiling deployment) rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `solver::api::solve`:
//!   - Exact-range convergence in 2-D and the concrete 3-D ceiling scenario.
//!   - Seeded determinism (bit-identical outcome tables).
//!   - The zero-step-size degenerate mode through the public surface.
//! - `solver::validation` via the API boundary:
//!   - Range-count mismatches rejected before any trial runs.
//! - `solver::select` via the API boundary:
//!   - `trial_count = 0` surfacing as `NoValidEstimate`.
//!
//! Exclusions
//! ----------
//! - Fine-grained behavior of the trial optimizer (timeout asymmetry,
//!   zero-predicted-range guard) — covered by unit tests.
//! - Python bindings — exercised at a higher system level.
//!
//! Convergence tests pass an explicit generous `time_budget` so wall-clock
//! pressure on a loaded machine cannot flip trials into the abandoned state;
//! the asserted properties concern convergence and selection, not timing.
use ndarray::{array, Array1, Array2};
use rust_multilat::geometry::euclidean;
use rust_multilat::solver::{
    solve, SeedBounds, SolveError, SolveOptions, SolveOutcome, TrialOutcome,
};

/// Purpose
/// -------
/// Exact node-to-anchor distances for a hidden node, used to build
/// noise-free range vectors for convergence tests.
///
/// Returns
/// -------
/// - A range vector index-aligned with the anchor rows.
fn exact_ranges(anchors: &Array2<f64>, node: &Array1<f64>) -> Array1<f64> {
    Array1::from_iter((0..anchors.nrows()).map(|j| {
        euclidean(&anchors.row(j), &node.view()).expect("test geometry has consistent shapes")
    }))
}

/// Purpose
/// -------
/// Baseline options for convergence tests: seeded for reproducibility and
/// budgeted generously so no trial can be abandoned by timing.
fn generous_options(trial_count: usize, seed: u64) -> SolveOptions {
    SolveOptions {
        trial_count,
        time_budget: Some(30.0),
        seed: Some(seed),
        ..SolveOptions::default()
    }
}

/// Purpose
/// -------
/// Distance from the solved position to the true node, for tolerance
/// asserts.
fn offset_from(outcome: &SolveOutcome, truth: &Array1<f64>) -> f64 {
    euclidean(&outcome.position.view(), &truth.view())
        .expect("solution and truth share a dimension")
}

#[test]
// Purpose
// -------
// Exact-range convergence in the plane: with a well-posed anchor square and
// noise-free ranges, the best of 50 trials lands on the true node.
//
// Given
// -----
// - Four anchors on a 10×10 square, truth at (3, 7), exact ranges, 50
//   seeded trials with default step size.
//
// Expect
// ------
// - Best position within 1e-2 of the truth and winning residual below 1e-3.
fn planar_exact_ranges_converge_to_truth() {
    // Arrange
    let anchors = Array2::from_shape_vec(
        (4, 2),
        vec![0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0],
    )
    .unwrap();
    let truth = array![3.0, 7.0];
    let ranges = exact_ranges(&anchors, &truth);

    // Act
    let outcome =
        solve(&anchors, &ranges, &generous_options(50, 1)).expect("well-posed solve succeeds");

    // Assert
    let offset = offset_from(&outcome, &truth);
    assert!(offset < 1e-2, "best position is {offset} away from the truth");
    assert!(outcome.error < 1e-3, "winning residual {} should be near zero", outcome.error);
    assert_eq!(outcome.trials.len(), 50);
}

#[test]
// Purpose
// -------
// The concrete ceiling scenario: anchors at the four corners of a 9×9 room
// at height 3, node at (4.5, 4.5, 0), exact ranges.
//
// Given
// -----
// - The fixed 4×3 anchor layout, 50 seeded trials, step size 1e-3.
//
// Expect
// ------
// - Best position within 0.1 of (4.5, 4.5, 0).
fn ceiling_scenario_recovers_node() {
    // Arrange
    let anchors = Array2::from_shape_vec(
        (4, 3),
        vec![0.0, 0.0, 3.0, 9.0, 0.0, 3.0, 9.0, 9.0, 3.0, 0.0, 9.0, 3.0],
    )
    .unwrap();
    let truth = array![4.5, 4.5, 0.0];
    let ranges = exact_ranges(&anchors, &truth);

    // Act
    let outcome =
        solve(&anchors, &ranges, &generous_options(50, 2)).expect("well-posed solve succeeds");

    // Assert
    let offset = offset_from(&outcome, &truth);
    assert!(offset < 0.1, "best position {} is {offset} away from the node", outcome.position);
}

#[test]
// Purpose
// -------
// Determinism under fixed randomness: identical inputs and seeds produce
// bit-identical outcomes, trial table included.
//
// Given
// -----
// - The planar square fixture and two calls with `seed = Some(7)`.
//
// Expect
// ------
// - The two `SolveOutcome`s compare equal.
fn seeded_runs_are_bit_identical() {
    // Arrange
    let anchors = Array2::from_shape_vec(
        (4, 2),
        vec![0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0],
    )
    .unwrap();
    let truth = array![2.0, 2.0];
    let ranges = exact_ranges(&anchors, &truth);
    let opts = generous_options(20, 7);

    // Act
    let first = solve(&anchors, &ranges, &opts).expect("well-posed solve succeeds");
    let second = solve(&anchors, &ranges, &opts).expect("well-posed solve succeeds");

    // Assert
    assert_eq!(first, second);
}

#[test]
// Purpose
// -------
// The zero-step-size degenerate mode through the public surface: every
// trial records, and each recorded residual is exactly the residual of its
// recorded position.
//
// Given
// -----
// - The planar square fixture, `step_size = 0`, 10 seeded trials.
//
// Expect
// ------
// - All 10 outcomes Filled; for each, recomputing the residual from the
//   recorded position reproduces the recorded error bit for bit.
fn zero_step_size_records_every_start() {
    // Arrange
    let anchors = Array2::from_shape_vec(
        (4, 2),
        vec![0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0],
    )
    .unwrap();
    let truth = array![5.0, 5.0];
    let ranges = exact_ranges(&anchors, &truth);
    let opts = SolveOptions { step_size: 0.0, ..generous_options(10, 3) };

    // Act
    let outcome = solve(&anchors, &ranges, &opts).expect("degenerate mode still selects a best");

    // Assert
    assert_eq!(outcome.filled_count(), 10);
    for trial in &outcome.trials {
        match trial {
            TrialOutcome::Filled { position, error } => {
                let recomputed = exact_ranges(&anchors, position);
                let residual = euclidean(&ranges.view(), &recomputed.view()).unwrap();
                assert_eq!(*error, residual);
            }
            TrialOutcome::Missing => panic!("zero step size must record every trial"),
        }
    }
}

#[test]
// Purpose
// -------
// Empty-trials failure: zero trials can never produce an estimate, and the
// failure is a typed error rather than a crash or NaN.
//
// Given
// -----
// - A valid fixture with `trial_count = 0`.
//
// Expect
// ------
// - `Err(SolveError::NoValidEstimate { trials: 0 })`.
fn zero_trials_fail_with_no_valid_estimate() {
    // Arrange
    let anchors = Array2::from_shape_vec((3, 2), vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0]).unwrap();
    let ranges = array![0.5, 0.7, 0.7];
    let opts = SolveOptions { trial_count: 0, ..SolveOptions::default() };

    // Act
    let err = solve(&anchors, &ranges, &opts).unwrap_err();

    // Assert
    assert_eq!(err, SolveError::NoValidEstimate { trials: 0 });
}

#[test]
// Purpose
// -------
// Dimension-mismatch rejection: a range vector that is not index-aligned
// with the anchors fails eagerly, before any trial runs.
//
// Given
// -----
// - The four-anchor 3-D ceiling layout with a 3-element range vector.
//
// Expect
// ------
// - `Err(SolveError::RangeCountMismatch { expected: 4, found: 3 })`.
fn misaligned_ranges_are_rejected_eagerly() {
    // Arrange
    let anchors = Array2::from_shape_vec(
        (4, 3),
        vec![0.0, 0.0, 3.0, 9.0, 0.0, 3.0, 9.0, 9.0, 3.0, 0.0, 9.0, 3.0],
    )
    .unwrap();
    let short_ranges = array![5.0, 5.0, 5.0];

    // Act
    let err = solve(&anchors, &short_ranges, &SolveOptions::default()).unwrap_err();

    // Assert
    assert_eq!(err, SolveError::RangeCountMismatch { expected: 4, found: 3 });
}

#[test]
// Purpose
// -------
// Explicit seed bounds flow through the public surface: widening the box
// with far-away points still converges, because the extra volume only
// affects where starts are drawn.
//
// Given
// -----
// - The planar fixture with a seed point at (50, 50) and 50 seeded trials.
//
// Expect
// ------
// - Best position within 0.1 of the truth.
fn widened_seed_bounds_still_converge() {
    // Arrange
    let anchors = Array2::from_shape_vec(
        (4, 2),
        vec![0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0],
    )
    .unwrap();
    let truth = array![6.0, 4.0];
    let ranges = exact_ranges(&anchors, &truth);
    let seeds = Array2::from_shape_vec((1, 2), vec![50.0, 50.0]).unwrap();
    let opts = SolveOptions {
        seed_bounds: SeedBounds::Points(seeds),
        ..generous_options(50, 11)
    };

    // Act
    let outcome = solve(&anchors, &ranges, &opts).expect("well-posed solve succeeds");

    // Assert
    let offset = offset_from(&outcome, &truth);
    assert!(offset < 0.1, "best position is {offset} away from the truth");
}
