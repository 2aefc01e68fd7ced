//! Restart driver — runs many independent trials from random starts.
//!
//! Purpose
//! -------
//! Launch `trial_count` independent gradient-descent trials, each from its
//! own uniformly drawn start inside the search box, and collect their
//! outcomes in trial order.
//!
//! Key behaviors
//! -------------
//! - Every start is drawn from the caller's RNG *before* any trial runs, one
//!   draw per trial in trial order. Sequential and parallel execution
//!   therefore consume identical randomness and produce the same outcome
//!   distribution; the `parallel` feature changes wall-clock time only.
//! - Trials share nothing mutable: anchors, ranges, and the box are borrowed
//!   read-only, and each trial owns its candidate and predicted-range
//!   buffers.
//! - `trial_count == 0` short-circuits to an empty table before the default
//!   budget (`1 / trial_count`) is ever derived.
//!
//! Conventions
//! -----------
//! - Outcome order always matches trial order; rayon's indexed collect
//!   preserves it.
use crate::geometry::bounds::SearchBox;
use crate::solver::{
    errors::SolveResult,
    options::SolveOptions,
    trial::descend,
    types::{Point, Points, Ranges, TrialOutcome},
};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Run the configured number of independent trials and collect their
/// outcomes in trial order.
///
/// # Behavior
/// - Draws `opts.trial_count` starts from `rng` via [`SearchBox::sample`].
/// - Runs each start through the trial optimizer, in parallel when the
///   `parallel` feature is enabled.
///
/// # Errors
/// Propagates shape faults from the trial optimizer; these cannot occur for
/// inputs that passed API validation.
pub(crate) fn run_trials<R: Rng + ?Sized>(
    anchors: &Points, measured: &Ranges, search: &SearchBox, opts: &SolveOptions, rng: &mut R,
) -> SolveResult<Vec<TrialOutcome>> {
    if opts.trial_count == 0 {
        return Ok(Vec::new());
    }
    let budget_secs = opts.effective_time_budget();
    let starts: Vec<Point> = (0..opts.trial_count).map(|_| search.sample(rng)).collect();
    collect_outcomes(anchors, measured, starts, opts.step_size, budget_secs)
}

#[cfg(feature = "parallel")]
fn collect_outcomes(
    anchors: &Points, measured: &Ranges, starts: Vec<Point>, step_size: f64, budget_secs: f64,
) -> SolveResult<Vec<TrialOutcome>> {
    starts
        .into_par_iter()
        .map(|start| descend(anchors, measured, start, step_size, budget_secs))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn collect_outcomes(
    anchors: &Points, measured: &Ranges, starts: Vec<Point>, step_size: f64, budget_secs: f64,
) -> SolveResult<Vec<TrialOutcome>> {
    starts
        .into_iter()
        .map(|start| descend(anchors, measured, start, step_size, budget_secs))
        .collect()
}
