//! demo — synthetic scenario generation and console reporting.
//!
//! Purpose
//! -------
//! Provide the demonstration front-end around the solver: generate a
//! four-anchor ceiling deployment with a hidden node and noisy ranges, run
//! the solver on the noisy measurements, and render the result as a
//! plain-text report. The module consumes only the public solver surface and
//! carries no algorithmic weight of its own.
//!
//! Conventions
//! -----------
//! - One RNG is threaded through both scenario generation and the solver, so
//!   a seeded [`run`] replays the entire demo bit for bit.
//! - Reporting is pure string building; printing is left to the caller (the
//!   `mlat_demo` binary).

pub mod report;
pub mod scenario;

pub use self::report::render;
pub use self::scenario::{Scenario, ANCHOR_HEIGHT, RANGE_NOISE, ROOM_LENGTH, ROOM_WIDTH};

use crate::solver::{errors::SolveResult, solve_with_rng, SolveOptions};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generate a scenario, solve it, and render the report.
///
/// # Behavior
/// - `seed = Some(s)` makes the whole demo reproducible; `None` draws a
///   fresh scenario from system entropy.
/// - Solver configuration is [`SolveOptions::default`] (100 trials,
///   α = 1e-3, derived per-trial budget).
///
/// # Errors
/// Propagates any [`SolveError`](crate::solver::SolveError) from the solver;
/// with the generated geometry this only occurs if every trial is abandoned.
pub fn run(seed: Option<u64>) -> SolveResult<String> {
    run_with_options(seed, &SolveOptions::default())
}

/// [`run`] with explicit solver options, for callers that want to tune the
/// trial count or budget while keeping the demo geometry.
pub fn run_with_options(seed: Option<u64>, opts: &SolveOptions) -> SolveResult<String> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let scenario =
        Scenario::ceiling_grid(ROOM_WIDTH, ROOM_LENGTH, ANCHOR_HEIGHT, RANGE_NOISE, &mut rng)?;
    let outcome = solve_with_rng(&scenario.anchors, &scenario.measured, opts, &mut rng)?;
    Ok(render(&scenario, &outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify that a seeded demo run completes and reproduces itself.
    //
    // Given
    // -----
    // - Two runs with the same seed and a budget generous enough that no
    //   trial can be abandoned by wall-clock pressure.
    //
    // Expect
    // ------
    // - Both succeed and render identical reports.
    fn seeded_run_is_reproducible() {
        // Arrange
        let opts = SolveOptions {
            trial_count: 20,
            time_budget: Some(30.0),
            ..SolveOptions::default()
        };

        // Act
        let first = run_with_options(Some(42), &opts).expect("seeded demo should solve");
        let second = run_with_options(Some(42), &opts).expect("seeded demo should solve");

        // Assert
        assert_eq!(first, second);
    }
}
