//! High-level entry points for multilateration solving.
//!
//! This validates all inputs eagerly, resolves the search box from the
//! configured seed-bound policy, runs the restart driver, and selects the
//! best recorded outcome.
use crate::geometry::bounds::SearchBox;
use crate::solver::{
    driver::run_trials,
    errors::SolveResult,
    options::{SeedBounds, SolveOptions},
    select::select_best,
    types::{Points, Ranges, SolveOutcome},
    validation::{validate_anchors, validate_ranges, validate_seed_points, verify_step_size,
        verify_time_budget},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Estimate the unknown position from anchors and measured ranges.
///
/// # Behavior
/// - Builds a `ChaCha8Rng` from `opts.seed` (`Some` → reproducible runs,
///   `None` → system entropy) and delegates to [`solve_with_rng`].
///
/// # Parameters
/// - `anchors`: N×D anchor positions, one per row.
/// - `ranges`: N measured distances, index-aligned with the anchor rows.
/// - `opts`: trial count, step size, budget, seed-bound policy, RNG seed.
///
/// # Returns
/// A [`SolveOutcome`] with the best recorded position, its residual, the
/// winning trial index, and the full per-trial outcome table.
///
/// # Errors
/// - Input-validation variants of
///   [`SolveError`](crate::solver::errors::SolveError) before any trial runs.
/// - [`SolveError::NoValidEstimate`](crate::solver::errors::SolveError::NoValidEstimate)
///   when no trial records an outcome (including `trial_count == 0`).
///
/// # Example
/// ```
/// use ndarray::{array, Array2};
/// use rust_multilat::solver::{solve, SolveOptions};
///
/// let anchors = Array2::from_shape_vec(
///     (4, 3),
///     vec![0.0, 0.0, 3.0, 9.0, 0.0, 3.0, 9.0, 9.0, 3.0, 0.0, 9.0, 3.0],
/// )
/// .unwrap();
/// let node: ndarray::Array1<f64> = array![4.5, 4.5, 0.0];
/// let ranges = anchors
///     .rows()
///     .into_iter()
///     .map(|a| (&a - &node).mapv(|v| v * v).sum().sqrt())
///     .collect::<ndarray::Array1<f64>>();
///
/// let opts = SolveOptions {
///     trial_count: 50,
///     time_budget: Some(30.0),
///     seed: Some(7),
///     ..SolveOptions::default()
/// };
/// let outcome = solve(&anchors, &ranges, &opts)?;
/// assert_eq!(outcome.trials.len(), 50);
/// # Ok::<(), rust_multilat::solver::SolveError>(())
/// ```
pub fn solve(anchors: &Points, ranges: &Ranges, opts: &SolveOptions) -> SolveResult<SolveOutcome> {
    let mut rng = match opts.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    solve_with_rng(anchors, ranges, opts, &mut rng)
}

/// [`solve`] with an injected random source.
///
/// This is the determinism seam: all randomness flows through `rng`, so
/// repeated calls with identical inputs and identically seeded generators
/// produce bit-identical outcome tables (absent wall-clock timeouts).
///
/// # Errors
/// Same as [`solve`].
pub fn solve_with_rng<R: Rng + ?Sized>(
    anchors: &Points, ranges: &Ranges, opts: &SolveOptions, rng: &mut R,
) -> SolveResult<SolveOutcome> {
    validate_anchors(anchors)?;
    validate_ranges(anchors, ranges)?;
    verify_step_size(opts.step_size)?;
    verify_time_budget(opts.time_budget)?;

    let search = resolve_search_box(anchors, &opts.seed_bounds)?;
    let trials = run_trials(anchors, ranges, &search, opts, rng)?;
    let best = select_best(&trials)?;
    Ok(SolveOutcome { position: best.position, error: best.error, best_trial: best.index, trials })
}

/// Resolve the search box according to the seed-bound policy.
fn resolve_search_box(anchors: &Points, seed_bounds: &SeedBounds) -> SolveResult<SearchBox> {
    let dim = anchors.ncols();
    match seed_bounds {
        SeedBounds::AnchorsOnly => Ok(SearchBox::from_points(&anchors.view(), None)?),
        SeedBounds::Origin => {
            let origin = Points::zeros((1, dim));
            Ok(SearchBox::from_points(&anchors.view(), Some(&origin.view()))?)
        }
        SeedBounds::Points(points) => {
            validate_seed_points(dim, points)?;
            Ok(SearchBox::from_points(&anchors.view(), Some(&points.view()))?)
        }
    }
}
