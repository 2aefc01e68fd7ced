//! rust_multilat — multilateration via random-restart gradient descent, with
//! Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the solver to Python via the `_rust_multilat` extension module.
//! When the `python-bindings` feature is enabled, this module defines the
//! Python-facing function and result class used by the `rust_multilat`
//! package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`geometry`, `solver`, `demo`) as the
//!   public crate surface.
//! - Define the `#[pyclass]` outcome wrapper and the `#[pymodule]`
//!   initializer for the `_rust_multilat` Python extension.
//! - Convert Python arrays and sequences into the solver's `ndarray` inputs
//!   via the helpers in [`utils`].
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold; the
//!   solver's own eager validation still runs on every call.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `ValueError` at the PyO3 boundary.
//! - Native Rust code should depend directly on [`solver`] and can ignore
//!   the PyO3 items guarded by the `python-bindings` feature.

pub mod demo;
pub mod geometry;
pub mod solver;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    solver::{
        options::{SeedBounds, SolveOptions},
        types::{SolveOutcome, TrialOutcome},
    },
    utils::{extract_f64_array, extract_points},
};

/// SolveSummary — Python-facing wrapper for a solver outcome.
///
/// Purpose
/// -------
/// Present the winning estimate and the per-trial diagnostic table from
/// [`SolveOutcome`] to Python code in a lightweight, read-only wrapper.
///
/// Fields
/// ------
/// - `inner`: [`SolveOutcome`]
///   Full solver result backing the accessors.
///
/// Notes
/// -----
/// - Instances are constructed by [`solve`]; Python code never builds one
///   directly. Native Rust callers should use [`solver::solve`] instead.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_multilat")]
pub struct SolveSummary {
    /// Underlying Rust solve outcome.
    inner: SolveOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SolveSummary {
    /// The winning candidate position.
    #[getter]
    pub fn position(&self) -> Vec<f64> {
        self.inner.position.to_vec()
    }

    /// The winning candidate's residual against the measured ranges.
    #[getter]
    pub fn error(&self) -> f64 {
        self.inner.error
    }

    /// 0-based index of the winning trial.
    #[getter]
    pub fn best_trial(&self) -> usize {
        self.inner.best_trial
    }

    /// Number of trials that recorded a candidate.
    #[getter]
    pub fn filled_count(&self) -> usize {
        self.inner.filled_count()
    }

    /// Per-trial outcome table: `(position, error)` tuples for recorded
    /// trials, `None` for abandoned ones, in trial order.
    #[getter]
    pub fn trials(&self) -> Vec<Option<(Vec<f64>, f64)>> {
        self.inner
            .trials
            .iter()
            .map(|trial| match trial {
                TrialOutcome::Filled { position, error } => Some((position.to_vec(), *error)),
                TrialOutcome::Missing => None,
            })
            .collect()
    }
}

/// Estimate a position from anchors and measured ranges.
///
/// Accepts numpy arrays or plain sequences. `seed_bounds=None` reproduces
/// the default origin-seeded search box; passing extra points widens the box
/// without treating them as anchors.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (anchors, ranges, seed_bounds = None, trial_count = 100, step_size = 1e-3,
                 time_budget = None, seed = None),
    text_signature = "(anchors, ranges, /, seed_bounds=None, trial_count=100, \
                      step_size=0.001, time_budget=None, seed=None)"
)]
pub fn solve<'py>(
    py: Python<'py>, anchors: &Bound<'py, PyAny>, ranges: &Bound<'py, PyAny>,
    seed_bounds: Option<&Bound<'py, PyAny>>, trial_count: usize, step_size: f64,
    time_budget: Option<f64>, seed: Option<u64>,
) -> PyResult<SolveSummary> {
    let anchors = extract_points(py, anchors)?;
    let ranges_arr = extract_f64_array(py, ranges)?;
    let ranges = ranges_arr.as_array().to_owned();

    let seed_bounds = match seed_bounds {
        Some(raw) => SeedBounds::Points(extract_points(py, raw)?),
        None => SeedBounds::Origin,
    };
    let opts = SolveOptions::new(trial_count, step_size, time_budget, seed_bounds, seed)?;

    let outcome = crate::solver::solve(&anchors, &ranges, &opts)?;
    Ok(SolveSummary { inner: outcome })
}

/// _rust_multilat — PyO3 module initializer for the Python extension.
///
/// Registers the solver entry point and its result class; invoked
/// automatically by Python when importing the compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_multilat<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<SolveSummary>()?;
    m.add_function(wrap_pyfunction!(solve, m)?)?;
    Ok(())
}
