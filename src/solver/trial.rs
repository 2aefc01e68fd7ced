//! One gradient-descent trial — the numeric core of the solver.
//!
//! Purpose
//! -------
//! Run a single fixed-step gradient descent from one random start against the
//! measured ranges, and report how it ended. The residual being minimized is
//! the Euclidean norm of `measured − predicted(x)` over the N anchors; each
//! step subtracts the analytic gradient of the sum-of-squared-residuals
//! objective, scaled by the caller's α.
//!
//! Key behaviors
//! -------------
//! - Strict-improvement rule: a candidate step is accepted only when its
//!   residual is strictly smaller than the current one, so the sequence of
//!   accepted residuals is strictly decreasing.
//! - First non-improving step terminates the trial and records the *pre-step*
//!   candidate with its residual, never the rejected candidate.
//! - The wall clock is consulted only after an accepted step. A trial whose
//!   budget expires while it is still improving is abandoned with no outcome
//!   (`Missing`); a trial that stops improving within budget records
//!   normally. This asymmetry is inherited behavior and is kept as-is.
//! - A zero predicted range makes the gradient term undefined; the trial
//!   degrades to `Missing` instead of propagating a non-finite position.
//! - With α = 0 the candidate never moves, the first attempt is
//!   non-improving, and the untouched start is recorded with its residual.
//!
//! Invariants & assumptions
//! ------------------------
//! - `anchors`, `measured`, and `start` have consistent shapes; the API
//!   boundary validates this before any trial runs, and shape faults inside
//!   the loop would still surface as errors rather than panics.
//! - Steps within one trial are strictly sequential; each depends on the
//!   previously accepted candidate. Parallelism exists only across trials.
use crate::geometry::metric::euclidean;
use crate::solver::{
    errors::SolveResult,
    types::{Point, Points, Ranges, TrialOutcome},
};
use std::time::Instant;

/// Run one descent from `start` and report the trial's terminal state.
///
/// # Arguments
/// - `anchors`: N×D anchor positions, one per row.
/// - `measured`: N measured ranges, index-aligned with the anchor rows.
/// - `start`: the trial's random start; consumed and iterated in place.
/// - `step_size`: gradient scale α (finite, ≥ 0).
/// - `budget_secs`: wall-clock budget for this trial, in seconds.
///
/// # Returns
/// - `TrialOutcome::Filled` with the last accepted candidate and its residual
///   when the trial stops improving within budget.
/// - `TrialOutcome::Missing` when the budget expires mid-improvement or a
///   zero predicted range is encountered.
///
/// # Errors
/// Propagates [`GeometryError`](crate::geometry::errors::GeometryError)-derived
/// shape faults; these cannot occur for inputs that passed API validation.
pub(crate) fn descend(
    anchors: &Points, measured: &Ranges, start: Point, step_size: f64, budget_secs: f64,
) -> SolveResult<TrialOutcome> {
    let mut estimate = start;
    let mut predicted = predict_ranges(anchors, &estimate)?;
    let mut error = euclidean(&measured.view(), &predicted.view())?;
    let clock = Instant::now();

    loop {
        let delta = match gradient(anchors, measured, &predicted, &estimate, step_size) {
            Some(delta) => delta,
            // Zero predicted range: the gradient term is undefined.
            None => return Ok(TrialOutcome::Missing),
        };
        let candidate = &estimate - &delta;
        let candidate_predicted = predict_ranges(anchors, &candidate)?;
        let candidate_error = euclidean(&measured.view(), &candidate_predicted.view())?;

        if candidate_error < error {
            estimate = candidate;
            predicted = candidate_predicted;
            error = candidate_error;
        } else {
            // Local minimum or overshoot: record the pre-step candidate.
            return Ok(TrialOutcome::Filled { position: estimate, error });
        }

        // Budget is checked only after an accepted step; progress made so far
        // is discarded, not recorded.
        if clock.elapsed().as_secs_f64() >= budget_secs {
            return Ok(TrialOutcome::Missing);
        }
    }
}

/// Distances from `position` to every anchor, in anchor order.
fn predict_ranges(anchors: &Points, position: &Point) -> SolveResult<Ranges> {
    let mut predicted = Ranges::zeros(anchors.nrows());
    for j in 0..anchors.nrows() {
        predicted[j] = euclidean(&anchors.row(j), &position.view())?;
    }
    Ok(predicted)
}

/// The scaled least-squares gradient `2α · Σ_j (p_j − r_j)/p_j · (x − a_j)`.
///
/// This is `α · ∇ Σ_j (r_j − p_j)²`, so subtracting it from the candidate is
/// a descent step on the sum-of-squared-residuals objective. The monitored
/// residual is the Euclidean norm of the same residual vector, monotonic in
/// that objective, so step direction and monitored error agree.
///
/// Returns `None` when any predicted range is exactly zero, which would make
/// the corresponding term undefined.
fn gradient(
    anchors: &Points, measured: &Ranges, predicted: &Ranges, estimate: &Point, step_size: f64,
) -> Option<Point> {
    let dim = estimate.len();
    let mut delta = Point::zeros(dim);
    for j in 0..anchors.nrows() {
        if predicted[j] == 0.0 {
            return None;
        }
        let weight = (predicted[j] - measured[j]) / predicted[j];
        for axis in 0..dim {
            delta[axis] += weight * (estimate[axis] - anchors[[j, axis]]);
        }
    }
    delta *= 2.0 * step_size;
    Some(delta)
}
