//! Solver options — configuration for random-restart gradient descent.
//!
//! Purpose
//! -------
//! Collect the configuration knobs for a `solve` run in one place, making the
//! workflow explicit and reproducible: trial count, gradient step size,
//! per-trial wall-clock budget, the seed-bound policy that widens the search
//! box, and an optional RNG seed.
//!
//! Key behaviors
//! -------------
//! - Represent run configuration via [`SolveOptions`], validated on
//!   construction so downstream code can assume sane numeric knobs.
//! - Represent the search-box widening policy via [`SeedBounds`]: the
//!   origin-seeded default, anchors only, or explicit extra points.
//! - Keep cross-cutting configuration out of the numeric core, so call sites
//!   pass explicit, validated options instead of ad-hoc flags.
//!
//! Invariants & assumptions
//! ------------------------
//! - `step_size` is finite and ≥ 0; zero is a deliberate degenerate mode in
//!   which every trial records its untouched random start.
//! - `time_budget`, when explicit, is finite and > 0 (seconds). When absent
//!   the driver derives `1 / trial_count`, and never derives anything for
//!   `trial_count == 0` because no trial runs.
//! - `SeedBounds::Points` carries intent only; dimension and finiteness are
//!   enforced at the API boundary where the anchors' dimension is known.
use crate::solver::{
    errors::SolveResult,
    types::Points,
    validation::{verify_step_size, verify_time_budget},
};

/// SeedBounds — policy for widening the search box beyond the anchors.
///
/// Variants
/// --------
/// - `Origin`
///   Include a single all-zeros point of the anchors' dimension. This is the
///   default and guarantees the box reaches the coordinate origin.
/// - `AnchorsOnly`
///   No extra points; the box is the anchors' own envelope.
/// - `Points(points)`
///   Explicit M×D extra points. They widen the box only and are never
///   treated as anchors.
///
/// Notes
/// -----
/// - Downstream code should pattern-match on `SeedBounds` exhaustively so
///   that the compiler flags missing cases if new variants are added later.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedBounds {
    Origin,
    AnchorsOnly,
    Points(Points),
}

/// SolveOptions — run-time configuration for the restart driver.
///
/// Fields
/// ------
/// - `trial_count`: `usize`
///   Number of independent trials. Zero is allowed and yields an empty
///   outcome table, which selection then rejects with `NoValidEstimate`.
/// - `step_size`: `f64`
///   Gradient scale α. Finite, ≥ 0.
/// - `time_budget`: `Option<f64>`
///   Per-trial wall-clock budget in seconds. `None` derives
///   `1 / trial_count`.
/// - `seed_bounds`: [`SeedBounds`]
///   Search-box widening policy.
/// - `seed`: `Option<u64>`
///   Optional RNG seed. `Some(seed)` yields reproducible runs; `None`
///   delegates to system entropy.
///
/// Default
/// -------
/// - `trial_count = 100`
/// - `step_size = 1e-3`
/// - `time_budget = None` (derived `1 / trial_count`)
/// - `seed_bounds = SeedBounds::Origin`
/// - `seed = None`
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOptions {
    /// Number of independent random-restart trials.
    pub trial_count: usize,
    /// Gradient scale α applied to every step.
    pub step_size: f64,
    /// Per-trial wall-clock budget in seconds; `None` derives `1 / trial_count`.
    pub time_budget: Option<f64>,
    /// Search-box widening policy.
    pub seed_bounds: SeedBounds,
    /// Optional RNG seed for reproducibility.
    pub seed: Option<u64>,
}

impl SolveOptions {
    /// Construct validated solver options.
    ///
    /// # Rules
    /// - `step_size` must be finite and non-negative (zero is allowed; see
    ///   the module docs).
    /// - `time_budget`, if provided, must be finite and strictly positive.
    /// - `trial_count` carries no runtime rule: non-negativity is enforced by
    ///   `usize` itself.
    ///
    /// # Errors
    /// - [`SolveError::InvalidStepSize`](crate::solver::errors::SolveError::InvalidStepSize)
    ///   for non-finite or negative step sizes.
    /// - [`SolveError::InvalidTimeBudget`](crate::solver::errors::SolveError::InvalidTimeBudget)
    ///   for non-finite or non-positive explicit budgets.
    pub fn new(
        trial_count: usize, step_size: f64, time_budget: Option<f64>, seed_bounds: SeedBounds,
        seed: Option<u64>,
    ) -> SolveResult<Self> {
        verify_step_size(step_size)?;
        verify_time_budget(time_budget)?;
        Ok(Self { trial_count, step_size, time_budget, seed_bounds, seed })
    }

    /// The per-trial budget in seconds actually applied by the driver.
    ///
    /// Callers must ensure `trial_count > 0`; the driver short-circuits the
    /// zero-trial case before asking.
    pub(crate) fn effective_time_budget(&self) -> f64 {
        self.time_budget.unwrap_or(1.0 / self.trial_count as f64)
    }
}

impl Default for SolveOptions {
    /// Construct the documented default configuration (100 trials, α = 1e-3,
    /// derived budget, origin seed bound, entropy-seeded RNG).
    fn default() -> Self {
        Self {
            trial_count: 100,
            step_size: 1e-3,
            time_budget: None,
            seed_bounds: SeedBounds::Origin,
            seed: None,
        }
    }
}
