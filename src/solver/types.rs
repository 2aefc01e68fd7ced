//! solver::types — shared numeric aliases and outcome carriers.
//!
//! Purpose
//! -------
//! Centralize the core numeric types used by the multilateration solver. By
//! defining these in one place, the rest of the solver code can stay agnostic
//! to `ndarray` and can more easily evolve if the backend changes.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for positions, anchor matrices, and range
//!   vectors (`Point`, `Points`, `Ranges`).
//! - Represent the per-trial result as an explicit sum type
//!   ([`TrialOutcome`]) instead of a nullable table cell, so the
//!   timeout-discard path is a visible, testable state.
//! - Bundle the winning estimate with the full diagnostic table in
//!   [`SolveOutcome`].
//!
//! Conventions
//! -----------
//! - Positions are length-D column vectors; anchor matrices are N×D with one
//!   anchor per row; range vectors are length N and index-aligned with the
//!   anchor rows.
//! - Residuals ("errors") are Euclidean norms of the difference between
//!   measured and predicted range vectors, always expressed in range units.
use ndarray::{Array1, Array2};

/// A position in D-dimensional space.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical point type
/// throughout the solver.
pub type Point = Array1<f64>;

/// A set of points, one per row (N×D).
pub type Points = Array2<f64>;

/// Measured or predicted distances, index-aligned with an anchor matrix.
pub type Ranges = Array1<f64>;

/// Result of one gradient-descent trial.
///
/// Variants
/// --------
/// - `Filled { position, error }`
///   The trial reached a non-improving step in time and recorded the last
///   accepted candidate together with its residual.
/// - `Missing`
///   The trial ended without recording anything: either its wall-clock
///   budget expired while it was still improving, or a zero predicted range
///   made the gradient undefined. Missing trials never contribute to
///   selection.
#[derive(Debug, Clone, PartialEq)]
pub enum TrialOutcome {
    Filled { position: Point, error: f64 },
    Missing,
}

impl TrialOutcome {
    /// `true` when the trial recorded a candidate.
    pub fn is_filled(&self) -> bool {
        matches!(self, TrialOutcome::Filled { .. })
    }

    /// The recorded residual, if any.
    pub fn error(&self) -> Option<f64> {
        match self {
            TrialOutcome::Filled { error, .. } => Some(*error),
            TrialOutcome::Missing => None,
        }
    }

    /// The recorded position, if any.
    pub fn position(&self) -> Option<&Point> {
        match self {
            TrialOutcome::Filled { position, .. } => Some(position),
            TrialOutcome::Missing => None,
        }
    }
}

/// Canonical result returned by `solve`.
///
/// - `position`: the winning trial's recorded candidate.
/// - `error`: the winning trial's residual.
/// - `best_trial`: 0-based index of the winning trial; on exactly equal
///   residuals the lowest index wins, so repeated runs with the same draws
///   pick the same trial.
/// - `trials`: the full per-trial outcome table, in trial order, for
///   diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    pub position: Point,
    pub error: f64,
    pub best_trial: usize,
    pub trials: Vec<TrialOutcome>,
}

impl SolveOutcome {
    /// Number of trials that recorded a candidate.
    pub fn filled_count(&self) -> usize {
        self.trials.iter().filter(|t| t.is_filled()).count()
    }

    /// Number of trials that ended without an outcome.
    pub fn missing_count(&self) -> usize {
        self.trials.len() - self.filled_count()
    }
}
