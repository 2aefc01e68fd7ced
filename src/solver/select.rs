//! Best-outcome selection over a trial table.
//!
//! Scans the per-trial outcomes for the Filled entry with the smallest
//! residual. Strict `<` comparison keeps the lowest trial index on exactly
//! equal residuals, so selection is deterministic for a fixed table. NaN
//! residuals compare false under `<` and are never selectable.
use crate::solver::{
    errors::{SolveError, SolveResult},
    types::{Point, TrialOutcome},
};

/// The winning trial: its index, recorded position, and residual.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Best {
    pub index: usize,
    pub position: Point,
    pub error: f64,
}

/// Select the Filled outcome with minimal residual.
///
/// # Errors
/// Returns [`SolveError::NoValidEstimate`] when the table is empty or every
/// entry is Missing.
pub(crate) fn select_best(trials: &[TrialOutcome]) -> SolveResult<Best> {
    let mut best: Option<Best> = None;
    for (index, trial) in trials.iter().enumerate() {
        if let TrialOutcome::Filled { position, error } = trial {
            if error.is_nan() {
                continue;
            }
            let improves = match &best {
                Some(current) => *error < current.error,
                None => true,
            };
            if improves {
                best = Some(Best { index, position: position.clone(), error: *error });
            }
        }
    }
    best.ok_or(SolveError::NoValidEstimate { trials: trials.len() })
}
