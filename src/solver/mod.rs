//! solver — random-restart gradient descent for multilateration.
//!
//! Purpose
//! -------
//! Estimate an unknown point's position in D-dimensional space from N known
//! anchor positions and N noisy measured ranges. Callers hand over plain
//! numeric inputs and a [`SolveOptions`] configuration and receive the best
//! candidate found across many independent descent trials, together with the
//! full per-trial diagnostic table.
//!
//! Key behaviors
//! -------------
//! - Expose a single computational entry point, [`solve`] (and its
//!   injectable-randomness twin [`solve_with_rng`]), that:
//!   - validates anchors, ranges, seed bounds, and numeric knobs eagerly via
//!     [`validation`],
//!   - resolves the search box from the anchors and the configured
//!     [`SeedBounds`] policy,
//!   - runs `trial_count` independent descents via [`driver`], and
//!   - selects the minimal-residual outcome via [`select`].
//! - Keep each trial's descent strictly sequential and trials mutually
//!   independent, so the driver may run them on a rayon pool (feature
//!   `parallel`, default) without changing the outcome distribution.
//! - Represent per-trial results as an explicit sum type
//!   ([`TrialOutcome`]) so abandoned trials are visible, testable states
//!   rather than silent gaps.
//!
//! Invariants & assumptions
//! ------------------------
//! - Anchors, ranges, and the search box are immutable for the whole run;
//!   each trial owns its only mutable state.
//! - Accepted residuals within one trial are strictly decreasing; the
//!   recorded outcome is always the last accepted candidate, never a
//!   rejected step.
//! - A trial whose wall-clock budget expires while still improving is
//!   abandoned without an outcome; one that stops improving in time records
//!   normally. This asymmetry is inherited behavior, kept deliberately.
//! - Per-trial numerical faults degrade that one trial to `Missing` and
//!   never abort the run; the caller receives either a valid outcome or a
//!   typed error, never a NaN position.
//!
//! Conventions
//! -----------
//! - Positions, anchor matrices, and range vectors use the canonical aliases
//!   [`Point`], [`Points`], [`Ranges`] (`ndarray` containers over `f64`).
//! - Randomness is an explicit dependency: every draw flows through the
//!   caller's `Rng` (or a `ChaCha8Rng` built from `SolveOptions::seed`), so
//!   fixed seeds give bit-identical outcome tables.
//! - Errors bubble up as [`SolveResult<T>`] / [`SolveError`]; this module
//!   and its children never intentionally panic and do no I/O or logging.
//!
//! Downstream usage
//! ----------------
//! - Front-ends (the demo reporter, Python bindings) are expected to
//!   interact only with the re-exported surface: [`solve`],
//!   [`solve_with_rng`], [`SolveOptions`], [`SeedBounds`], [`SolveOutcome`],
//!   [`TrialOutcome`], and the error types.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover validation rules, the degenerate
//!   α = 0 and zero-predicted-range paths, the timeout asymmetry, outcome
//!   ordering, determinism under fixed seeds, and tie-breaking.
//! - Integration tests exercise [`solve`] end-to-end on exact-range
//!   configurations, including the four-anchor ceiling scenario.

pub mod api;
pub mod driver;
pub mod errors;
pub mod options;
pub mod select;
pub mod trial;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::{solve, solve_with_rng};
pub use self::errors::{SolveError, SolveResult};
pub use self::options::{SeedBounds, SolveOptions};
pub use self::types::{Point, Points, Ranges, SolveOutcome, TrialOutcome};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_multilat::solver::prelude::*;
//
// to import the main solver surface in a single line.

pub mod prelude {
    pub use super::api::{solve, solve_with_rng};
    pub use super::errors::{SolveError, SolveResult};
    pub use super::options::{SeedBounds, SolveOptions};
    pub use super::types::{Point, Points, Ranges, SolveOutcome, TrialOutcome};
}
